//! Discrete gesture recognition

pub mod classifier;

pub use classifier::{Gesture, GestureClassifier, HandGestures};
