//! Gesture interaction engine

pub mod state_machine;

pub use state_machine::{Mode, ModeStateMachine};
