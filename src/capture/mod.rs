//! Capture-side interfaces
//!
//! The camera and the landmark model are external; this module only defines
//! what they hand over to the gesture pipeline.

pub mod landmarks;

// Re-export the landmark data model
pub use landmarks::{
    FrameObservation, HandObservation, Handedness, InputEvent, LandmarkSet, Point2D, TrackedHand,
};
