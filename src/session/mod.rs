//! Gesture session driver
//!
//! The only async layer: it waits on a landmark source and feeds the
//! synchronous state machine one event at a time.

pub mod error;
pub mod runner;

pub use error::{SessionError, SessionResult};
pub use runner::{GestureSession, SessionSummary, StopReason};
