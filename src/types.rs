use serde::{Deserialize, Serialize};

/// A single landmark, normalized to the frame (0.0 - 1.0 on each axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Positionally indexed landmarks for one face or one hand
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    pub points: Vec<Point2>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }
}

/// Blendshape channel scores, indexed by the model's channel order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blendshapes {
    pub scores: Vec<f64>,
}

impl Blendshapes {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    pub fn channel(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }
}

/// Everything the vision model reported for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceFrame {
    pub face_landmarks: Option<LandmarkSet>,
    pub blendshapes: Option<Blendshapes>,
    pub hand_landmarks: Vec<LandmarkSet>,
}

/// Horizontal / vertical iris position inside the eye sockets. 0.5 is centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeRatio {
    pub h: f64,
    pub v: f64,
}

/// Eye closure intensity, 0.0 = open, 1.0 = closed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlinkScores {
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WinkEvent {
    #[default]
    None,
    Left,
    Right,
}

impl WinkEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}
