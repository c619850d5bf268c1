//! Hand landmark input
//!
//! Data model for the per-frame detector output (points, landmark sets,
//! handedness) and the sources that feed it into a gesture session.

pub mod source;
pub mod types;

pub use source::{ChannelSource, LandmarkSource, ReplaySource};
pub use types::{
    FrameObservation, HandObservation, Handedness, InputEvent, Landmark, LandmarkError,
    LandmarkSet, Point2D, TrackedHand, LANDMARK_COUNT,
};
