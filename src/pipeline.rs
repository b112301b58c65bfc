use crate::gestures::GestureController;
use crate::mapper::CoordinateMapper;
use crate::tracker;
use crate::types::{BlinkScores, Button, FaceFrame, GazeRatio, Point2, ScreenPoint, WinkEvent};

/// Everything derived from one frame of model output
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameOutput {
    pub iris: Option<Point2>,
    pub gaze: Option<GazeRatio>,
    pub screen: Option<ScreenPoint>,
    pub blink: BlinkScores,
    pub wink: WinkEvent,
}

impl FrameOutput {
    /// Button a wink should press, if any
    pub fn click(&self) -> Option<Button> {
        match self.wink {
            WinkEvent::Left => Some(Button::Left),
            WinkEvent::Right => Some(Button::Right),
            WinkEvent::None => None,
        }
    }
}

/// Extractor -> mapper / gesture controller, one frame at a time.
pub struct GazePipeline {
    mapper: CoordinateMapper,
    gestures: GestureController,
}

impl GazePipeline {
    pub fn new(mapper: CoordinateMapper, gestures: GestureController) -> Self {
        Self { mapper, gestures }
    }

    pub fn process(&self, frame: &FaceFrame) -> FrameOutput {
        let landmarks = frame.face_landmarks.as_ref();

        let iris = tracker::average_iris_position(landmarks);
        let gaze = tracker::gaze_ratio(landmarks);
        let screen = gaze.map(|g| self.mapper.map_to_screen(g.h, g.v));

        let blink = tracker::blink_scores(frame.blendshapes.as_ref());
        let wink = self.gestures.detect_wink(blink.left, blink.right);

        FrameOutput {
            iris,
            gaze,
            screen,
            blink,
            wink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate::{synthetic_blendshapes, synthetic_face};

    fn pipeline() -> GazePipeline {
        GazePipeline::new(
            CoordinateMapper::new(1000, 1000, 0.2).unwrap(),
            GestureController::default(),
        )
    }

    #[test]
    fn empty_frame_skips_control() {
        let out = pipeline().process(&FaceFrame::default());
        assert_eq!(out.iris, None);
        assert_eq!(out.gaze, None);
        assert_eq!(out.screen, None);
        assert_eq!(out.blink, BlinkScores::default());
        assert_eq!(out.wink, WinkEvent::None);
        assert_eq!(out.click(), None);
    }

    #[test]
    fn centered_gaze_lands_mid_screen() {
        let frame = FaceFrame {
            face_landmarks: Some(synthetic_face(0.5, 0.5)),
            ..Default::default()
        };
        let screen = pipeline().process(&frame).screen.expect("face present");
        assert!((499..=500).contains(&screen.x), "x = {}", screen.x);
        assert!((499..=500).contains(&screen.y), "y = {}", screen.y);
    }

    #[test]
    fn wink_maps_to_click() {
        let frame = FaceFrame {
            blendshapes: Some(synthetic_blendshapes(0.05, 0.9)),
            ..Default::default()
        };
        let out = pipeline().process(&frame);
        assert_eq!(out.wink, WinkEvent::Left);
        assert_eq!(out.click(), Some(Button::Left));
        // No face, so no pointer move even though a wink was seen
        assert_eq!(out.screen, None);
    }
}
