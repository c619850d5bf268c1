//! Frame loop
//!
//! Pulls input events from a [`LandmarkSource`], runs them through the mode
//! state machine one at a time and hands the resulting actions to an
//! [`ActionSink`]. Stopping is simply the source running dry or a quit event.

use crate::actions::dispatcher::ActionSink;
use crate::capture::landmarks::source::LandmarkSource;
use crate::capture::landmarks::types::InputEvent;
use crate::engine::state_machine::{Mode, ModeStateMachine};
use crate::session::error::SessionResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StopReason {
    Quit,
    SourceExhausted,
}

/// What a finished session did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub frames: u64,
    pub mode_toggles: u64,
    pub actions: u64,
    pub final_mode: Mode,
    pub stop_reason: StopReason,
}

pub struct GestureSession<S: LandmarkSource, K: ActionSink> {
    machine: ModeStateMachine,
    source: S,
    sink: K,
}

impl<S: LandmarkSource, K: ActionSink> GestureSession<S, K> {
    pub fn new(machine: ModeStateMachine, source: S, sink: K) -> Self {
        Self {
            machine,
            source,
            sink,
        }
    }

    pub fn machine(&self) -> &ModeStateMachine {
        &self.machine
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_parts(self) -> (ModeStateMachine, S, K) {
        (self.machine, self.source, self.sink)
    }

    /// Run until the source is exhausted or a quit event arrives
    pub async fn run(&mut self) -> SessionResult<SessionSummary> {
        tracing::info!(
            "Gesture session started (source={}, mode={})",
            self.source.id(),
            self.machine.mode()
        );

        let mut frames = 0;
        let mut mode_toggles = 0;
        let mut actions = 0;

        let stop_reason = loop {
            let Some(event) = self.source.next_event().await? else {
                break StopReason::SourceExhausted;
            };

            let dispatched = match event {
                InputEvent::Frame(frame) => {
                    frames += 1;
                    self.machine.process_frame(&frame)
                }
                InputEvent::ToggleMode => {
                    mode_toggles += 1;
                    self.machine.toggle_mode()
                }
                InputEvent::Quit => break StopReason::Quit,
            };

            for action in &dispatched {
                self.sink.execute(action);
            }
            actions += dispatched.len() as u64;
        };

        let summary = SessionSummary {
            frames,
            mode_toggles,
            actions,
            final_mode: self.machine.mode(),
            stop_reason,
        };

        tracing::info!(
            "Gesture session stopped ({:?}): {} frames, {} toggles, {} actions",
            summary.stop_reason,
            summary.frames,
            summary.mode_toggles,
            summary.actions
        );

        Ok(summary)
    }
}
