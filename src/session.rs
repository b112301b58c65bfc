use crate::error::Result;
use crate::pipeline::{FrameOutput, GazePipeline};
use crate::pointer::PointerSink;
use crate::source::FrameSource;
use crate::types::{FaceFrame, WinkEvent};

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames: u64,
    pub frames_with_gaze: u64,
    pub moves: u64,
    pub left_winks: u64,
    pub right_winks: u64,
    pub clicks: u64,
}

/// The driving loop: pulls frames, runs the pipeline, dispatches to the sink.
pub struct Session<'a> {
    source: &'a mut dyn FrameSource,
    sink: &'a mut dyn PointerSink,
    pipeline: &'a GazePipeline,
    clicks_enabled: bool,
    frame_limit: Option<u64>,
    last: Option<(FaceFrame, FrameOutput)>,
    summary: SessionSummary,
}

impl<'a> Session<'a> {
    pub fn new(
        source: &'a mut dyn FrameSource,
        sink: &'a mut dyn PointerSink,
        pipeline: &'a GazePipeline,
        clicks_enabled: bool,
    ) -> Self {
        Self {
            source,
            sink,
            pipeline,
            clicks_enabled,
            frame_limit: None,
            last: None,
            summary: SessionSummary::default(),
        }
    }

    /// Stop after `limit` frames even if the source has more
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    /// Most recent frame and what was derived from it
    pub fn last_frame(&self) -> Option<&(FaceFrame, FrameOutput)> {
        self.last.as_ref()
    }

    /// Counters so far. Still valid after `run` returned an error.
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Runs until the source ends or the frame limit is hit. Capture and
    /// injection errors end the session and are returned as-is.
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.summary = SessionSummary::default();
        let summary = &mut self.summary;

        loop {
            if self.frame_limit.is_some_and(|limit| summary.frames >= limit) {
                break;
            }
            let Some(frame) = self.source.capture()? else {
                break;
            };
            let output = self.pipeline.process(&frame);
            summary.frames += 1;

            // No face this frame: leave the pointer where it is
            if let Some(point) = output.screen {
                summary.frames_with_gaze += 1;
                self.sink.move_to(point)?;
                summary.moves += 1;
            } else {
                log::trace!("frame {}: no face, skipping pointer", summary.frames);
            }

            match output.wink {
                WinkEvent::Left => summary.left_winks += 1,
                WinkEvent::Right => summary.right_winks += 1,
                WinkEvent::None => {}
            }

            if self.clicks_enabled {
                if let Some(button) = output.click() {
                    log::debug!(
                        "frame {}: {} wink -> {:?} click",
                        summary.frames,
                        output.wink.as_str(),
                        button
                    );
                    self.sink.click(button)?;
                    summary.clicks += 1;
                }
            }

            self.last = Some((frame, output));
        }

        Ok(*summary)
    }
}
