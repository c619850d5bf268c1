//! Gesture intents to abstract actions
//!
//! The state machine decides *what happened* ([`GestureIntent`]); the
//! dispatcher names the command the OS or viewer should run for it
//! ([`Action`]). Nothing here touches the OS: actions are handed to an
//! [`ActionSink`] owned by the caller.

use crate::capture::landmarks::types::Point2D;
use crate::engine::state_machine::Mode;
use crate::viewer::drag_zoom::ZoomDirection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseButton {
    Left,
    Right,
}

/// Commands for the screen/cursor and viewer sinks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    MoveCursor { x: f64, y: f64 },
    Click { button: MouseButton },
    MouseDown,
    MouseUp,
    MaximizeWindow,
    MinimizeWindow,
    NextImage,
    PrevImage,
    Zoom { direction: ZoomDirection },
    Pan { dx: f64, dy: f64 },
}

impl Action {
    /// Continuous actions fire nearly every frame and are not worth logging
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::MoveCursor { .. } | Self::Pan { .. })
    }
}

/// What the state machine decided for a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureIntent {
    /// Smoothed cursor position in screen coordinates
    CursorMoved(Point2D),
    PrimaryPinch,
    SecondaryPinch,
    /// Secondary pinch held past the hold threshold
    SecondaryPinchHeld,
    SelectionEngaged,
    SelectionReleased,
    Clap(Mode),
    PinchSpread(ZoomDirection),
    Dragged(Point2D),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ActionDispatcher;

impl ActionDispatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn dispatch(&self, intent: GestureIntent) -> Action {
        match intent {
            GestureIntent::CursorMoved(p) => Action::MoveCursor { x: p.x, y: p.y },
            GestureIntent::PrimaryPinch => Action::Click {
                button: MouseButton::Left,
            },
            GestureIntent::SecondaryPinch => Action::Click {
                button: MouseButton::Right,
            },
            GestureIntent::SecondaryPinchHeld => Action::MaximizeWindow,
            GestureIntent::SelectionEngaged => Action::MouseDown,
            GestureIntent::SelectionReleased => Action::MouseUp,
            GestureIntent::Clap(Mode::Cursor) => Action::MinimizeWindow,
            GestureIntent::Clap(Mode::Image) => Action::NextImage,
            GestureIntent::PinchSpread(direction) => Action::Zoom { direction },
            GestureIntent::Dragged(delta) => Action::Pan {
                dx: delta.x,
                dy: delta.y,
            },
        }
    }

    pub fn dispatch_all(&self, intents: impl IntoIterator<Item = GestureIntent>) -> Vec<Action> {
        intents
            .into_iter()
            .map(|intent| {
                let action = self.dispatch(intent);
                if !action.is_continuous() {
                    tracing::debug!("{:?} -> {:?}", intent, action);
                }
                action
            })
            .collect()
    }
}

/// Executes actions. Fire-and-forget: failures are the sink's business.
pub trait ActionSink: Send {
    fn execute(&mut self, action: &Action);
}

impl ActionSink for Vec<Action> {
    fn execute(&mut self, action: &Action) {
        self.push(*action);
    }
}

/// Both sinks see every action, first one first
impl<A: ActionSink, B: ActionSink> ActionSink for (A, B) {
    fn execute(&mut self, action: &Action) {
        self.0.execute(action);
        self.1.execute(action);
    }
}

/// Sink that only logs, for dry runs
#[derive(Debug, Default)]
pub struct TracingSink;

impl ActionSink for TracingSink {
    fn execute(&mut self, action: &Action) {
        if action.is_continuous() {
            tracing::trace!("{:?}", action);
        } else {
            tracing::info!("{:?}", action);
        }
    }
}
