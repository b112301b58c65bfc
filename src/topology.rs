//! Landmark indices and blendshape channels of the face landmark model.
//!
//! These are fixed by the upstream model's output topology. If the model's
//! index scheme changes, this is the only file that should need editing.

/// Total points in a face mesh that includes the refined iris ring
pub const FACE_LANDMARK_COUNT: usize = 478;

/// All ten iris ring points, both eyes
pub const IRIS_RING: [usize; 10] = [468, 469, 470, 471, 472, 473, 474, 475, 476, 477];

/// Iris ring of the eye bounded by `LEFT_EYE_SOCKET`
pub const LEFT_IRIS: [usize; 5] = [468, 469, 470, 471, 472];

/// Iris ring of the eye bounded by `RIGHT_EYE_SOCKET`
pub const RIGHT_IRIS: [usize; 5] = [473, 474, 475, 476, 477];

/// Corner landmarks bounding one eye.
///
/// `outer` and `inner` are the horizontal reference corners of the ratio
/// `(iris - outer) / (inner - outer)`. The assignment is chosen for a
/// horizontally mirrored feed so that both eyes' ratios grow in the same
/// screen direction; swapping them reverses the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeSocket {
    pub outer: usize,
    pub inner: usize,
    pub top: usize,
    pub bottom: usize,
}

pub const LEFT_EYE_SOCKET: EyeSocket = EyeSocket {
    outer: 33,
    inner: 133,
    top: 159,
    bottom: 145,
};

pub const RIGHT_EYE_SOCKET: EyeSocket = EyeSocket {
    outer: 362,
    inner: 263,
    top: 386,
    bottom: 374,
};

/// Blendshape channel: eyeBlinkLeft
pub const BLINK_LEFT_CHANNEL: usize = 9;
/// Blendshape channel: eyeBlinkRight
pub const BLINK_RIGHT_CHANNEL: usize = 10;
