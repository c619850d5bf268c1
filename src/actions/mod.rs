//! Action dispatch
//!
//! Maps state-machine decisions onto the abstract commands consumed by the
//! external OS and viewer collaborators, and provides sinks that log or
//! record those commands.

pub mod dispatcher;
pub mod recorder;

pub use dispatcher::{
    Action, ActionDispatcher, ActionSink, GestureIntent, MouseButton, TracingSink,
};
pub use recorder::{ActionRecorder, RecordedAction};
