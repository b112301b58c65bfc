use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::types::FaceFrame;

/// Per-frame model output feeding the driving loop.
pub trait FrameSource {
    fn name(&self) -> String;

    /// Next frame. `Ok(None)` means the stream ended; an `Err` is a
    /// capture failure and ends the session.
    fn capture(&mut self) -> Result<Option<FaceFrame>>;
}

/// Reads model output recorded (or streamed) as one JSON object per line.
///
/// ```text
/// {"face_landmarks":[{"x":0.41,"y":0.45}, ...],"blendshapes":[0.0, ...],"hand_landmarks":[]}
/// ```
///
/// A line that does not parse is reported and yields an empty frame, so
/// the loop skips control for it instead of stopping.
pub struct ReplaySource {
    reader: Box<dyn BufRead>,
    label: String,
    line_no: u64,
    skipped: u64,
}

impl ReplaySource {
    /// Open a recording, or stdin when `path` is `-`.
    pub fn open(path: &str) -> Result<Self> {
        if path == "-" {
            let reader = BufReader::new(io::stdin());
            return Ok(Self::from_reader(reader, "stdin"));
        }
        let file = File::open(Path::new(path))?;
        Ok(Self::from_reader(BufReader::new(file), path))
    }

    pub fn from_reader<R: BufRead + 'static>(reader: R, label: &str) -> Self {
        Self {
            reader: Box::new(reader),
            label: label.to_string(),
            line_no: 0,
            skipped: 0,
        }
    }

    /// Lines that failed to parse so far
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl FrameSource for ReplaySource {
    fn name(&self) -> String {
        format!("Landmark Replay ({})", self.label)
    }

    fn capture(&mut self) -> Result<Option<FaceFrame>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            if !line.trim().is_empty() {
                break;
            }
        }

        match serde_json::from_str::<FaceFrame>(line.trim()) {
            Ok(frame) => Ok(Some(frame)),
            Err(e) => {
                self.skipped += 1;
                log::warn!("{}:{}: skipping malformed frame: {}", self.label, self.line_no, e);
                Ok(Some(FaceFrame::default()))
            }
        }
    }
}
