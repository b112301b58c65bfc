use crate::topology::{
    EyeSocket, BLINK_LEFT_CHANNEL, BLINK_RIGHT_CHANNEL, IRIS_RING, LEFT_EYE_SOCKET, LEFT_IRIS,
    RIGHT_EYE_SOCKET, RIGHT_IRIS,
};
use crate::types::{Blendshapes, BlinkScores, GazeRatio, LandmarkSet, Point2};

/// Smallest socket width/height used as a ratio denominator.
/// A closed or occluded eye collapses its socket; the sign is kept.
pub const SOCKET_EPSILON: f64 = 1e-6;

/// Mean of the given landmark indices, or None if any index is missing.
fn mean_of(landmarks: &LandmarkSet, indices: &[usize]) -> Option<Point2> {
    let mut x = 0.0;
    let mut y = 0.0;
    for &i in indices {
        let p = landmarks.get(i)?;
        x += p.x;
        y += p.y;
    }
    let n = indices.len() as f64;
    Some(Point2 { x: x / n, y: y / n })
}

/// Floors `|d|` at `SOCKET_EPSILON`, keeping the sign. Exact zero goes positive.
pub(crate) fn guard_denominator(d: f64) -> f64 {
    if d.abs() >= SOCKET_EPSILON {
        d
    } else if d < 0.0 {
        -SOCKET_EPSILON
    } else {
        SOCKET_EPSILON
    }
}

/// (horizontal, vertical) position of one iris inside its socket
fn eye_ratio(landmarks: &LandmarkSet, iris: &[usize], socket: &EyeSocket) -> Option<(f64, f64)> {
    let center = mean_of(landmarks, iris)?;
    let outer = landmarks.get(socket.outer)?;
    let inner = landmarks.get(socket.inner)?;
    let top = landmarks.get(socket.top)?;
    let bottom = landmarks.get(socket.bottom)?;

    let horizontal = (center.x - outer.x) / guard_denominator(inner.x - outer.x);
    let vertical = (center.y - top.y) / guard_denominator(bottom.y - top.y);
    Some((horizontal, vertical))
}

/// Mean of all ten iris ring points.
///
/// `None` when the frame has no face, or the landmark set stops short of
/// the iris ring (a mesh without iris refinement).
pub fn average_iris_position(landmarks: Option<&LandmarkSet>) -> Option<Point2> {
    mean_of(landmarks?, &IRIS_RING)
}

/// Left/right eye blink scores. Missing blendshapes read as eyes open.
pub fn blink_scores(blendshapes: Option<&Blendshapes>) -> BlinkScores {
    match blendshapes {
        Some(b) => BlinkScores {
            left: b.channel(BLINK_LEFT_CHANNEL).unwrap_or(0.0),
            right: b.channel(BLINK_RIGHT_CHANNEL).unwrap_or(0.0),
        },
        None => BlinkScores::default(),
    }
}

/// Gaze ratio averaged over both eyes. The averaged vertical ratio is
/// returned inverted (`1 - v`). Neither axis is clamped; extreme eye
/// positions land outside 0..1 and are left for the mapper to clamp.
pub fn gaze_ratio(landmarks: Option<&LandmarkSet>) -> Option<GazeRatio> {
    let landmarks = landmarks?;
    let (lh, lv) = eye_ratio(landmarks, &LEFT_IRIS, &LEFT_EYE_SOCKET)?;
    let (rh, rv) = eye_ratio(landmarks, &RIGHT_IRIS, &RIGHT_EYE_SOCKET)?;

    let avg_h = (lh + rh) / 2.0;
    let avg_v = (lv + rv) / 2.0;
    Some(GazeRatio {
        h: avg_h,
        v: 1.0 - avg_v,
    })
}
