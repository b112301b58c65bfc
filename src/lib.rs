//! IrisFlow: gaze and wink driven pointer control.
//!
//! Face landmarks and blendshape scores from an external face landmark
//! model are turned into a gaze ratio and blink scores (`tracker`), the gaze
//! ratio is stretched onto the screen through a virtual box (`mapper`), and
//! blink scores are classified into winks (`gestures`). `session` drives
//! that per frame from a `FrameSource` into a `PointerSink`.

pub mod config;
pub mod error;
pub mod gestures;
pub mod mapper;
pub mod overlay;
pub mod pipeline;
pub mod pointer;
pub mod session;
pub mod simulate;
pub mod source;
pub mod topology;
pub mod tracker;
pub mod types;

#[cfg(test)]
mod tracker_tests;

pub use error::{Error, Result};
