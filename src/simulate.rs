use crate::error::Result;
use crate::source::FrameSource;
use crate::topology::{
    EyeSocket, BLINK_LEFT_CHANNEL, BLINK_RIGHT_CHANNEL, FACE_LANDMARK_COUNT, LEFT_EYE_SOCKET,
    LEFT_IRIS, RIGHT_EYE_SOCKET, RIGHT_IRIS,
};
use crate::types::{Blendshapes, FaceFrame, LandmarkSet, Point2};

/// Number of blendshape channels the face model emits
const BLENDSHAPE_CHANNELS: usize = 52;
const IRIS_RADIUS: f64 = 0.004;

/// Socket geometry of the synthetic face: (outer, inner, top, bottom)
const LEFT_CORNERS: [(f64, f64); 4] = [(0.35, 0.45), (0.45, 0.45), (0.40, 0.43), (0.40, 0.47)];
const RIGHT_CORNERS: [(f64, f64); 4] = [(0.55, 0.45), (0.65, 0.45), (0.60, 0.43), (0.60, 0.47)];

fn place_socket(points: &mut [Point2], socket: &EyeSocket, corners: &[(f64, f64); 4]) {
    let indices = [socket.outer, socket.inner, socket.top, socket.bottom];
    for (&i, &(x, y)) in indices.iter().zip(corners.iter()) {
        points[i] = Point2::new(x, y);
    }
}

fn place_iris(points: &mut [Point2], iris: &[usize; 5], corners: &[(f64, f64); 4], h: f64, v: f64) {
    let (outer, inner, top, bottom) = (corners[0], corners[1], corners[2], corners[3]);
    let cx = outer.0 + h * (inner.0 - outer.0);
    let cy = top.1 + v * (bottom.1 - top.1);

    // Center first, then a symmetric ring so the mean stays on the center
    let offsets = [
        (0.0, 0.0),
        (IRIS_RADIUS, 0.0),
        (0.0, -IRIS_RADIUS),
        (-IRIS_RADIUS, 0.0),
        (0.0, IRIS_RADIUS),
    ];
    for (&i, &(dx, dy)) in iris.iter().zip(offsets.iter()) {
        points[i] = Point2::new(cx + dx, cy + dy);
    }
}

/// A full face mesh with both irises at socket ratio (h, v).
///
/// `h` runs outer -> inner corner and `v` runs top -> bottom, so
/// `tracker::gaze_ratio` of the result is approximately `(h, 1 - v)`.
pub fn synthetic_face(h: f64, v: f64) -> LandmarkSet {
    let mut points = vec![Point2::new(0.5, 0.5); FACE_LANDMARK_COUNT];
    place_socket(&mut points, &LEFT_EYE_SOCKET, &LEFT_CORNERS);
    place_socket(&mut points, &RIGHT_EYE_SOCKET, &RIGHT_CORNERS);
    place_iris(&mut points, &LEFT_IRIS, &LEFT_CORNERS, h, v);
    place_iris(&mut points, &RIGHT_IRIS, &RIGHT_CORNERS, h, v);
    LandmarkSet::new(points)
}

/// Blendshape output with only the two blink channels set
pub fn synthetic_blendshapes(left: f64, right: f64) -> Blendshapes {
    let mut scores = vec![0.0; BLENDSHAPE_CHANNELS];
    scores[BLINK_LEFT_CHANNEL] = left;
    scores[BLINK_RIGHT_CHANNEL] = right;
    Blendshapes::new(scores)
}

/// Frame source that needs no model: the irises trace a slow circle
/// and each blink channel spikes for a few frames on a fixed period.
pub struct SimulatedSource {
    frame_count: u64,
    frame_limit: Option<u64>,
}

impl SimulatedSource {
    pub const WINK_PERIOD: u64 = 90;
    pub const WINK_FRAMES: u64 = 3;

    pub fn new(frame_limit: Option<u64>) -> Self {
        Self {
            frame_count: 0,
            frame_limit,
        }
    }

    fn frame_at(index: u64) -> FaceFrame {
        let t = index as f64 * 0.05;
        let h = 0.5 + 0.35 * t.cos();
        let v = 0.5 + 0.35 * t.sin();

        let closed = |offset: u64| (index + offset) % Self::WINK_PERIOD < Self::WINK_FRAMES;
        let left = if closed(0) { 0.9 } else { 0.05 };
        let right = if closed(Self::WINK_PERIOD / 2) { 0.9 } else { 0.05 };

        FaceFrame {
            face_landmarks: Some(synthetic_face(h, v)),
            blendshapes: Some(synthetic_blendshapes(left, right)),
            hand_landmarks: Vec::new(),
        }
    }
}

impl FrameSource for SimulatedSource {
    fn name(&self) -> String {
        "Simulated Face (no model)".to_string()
    }

    fn capture(&mut self) -> Result<Option<FaceFrame>> {
        if let Some(limit) = self.frame_limit {
            if self.frame_count >= limit {
                return Ok(None);
            }
        }
        let frame = Self::frame_at(self.frame_count);
        self.frame_count += 1;
        Ok(Some(frame))
    }
}
