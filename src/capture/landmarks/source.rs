//! Landmark sources
//!
//! A source yields the input events for a gesture session: detector frames
//! plus the mode-toggle and quit events. The detector itself lives outside
//! this crate; it either pushes into a [`ChannelSource`] or its output is
//! replayed from disk through a [`ReplaySource`].

use crate::capture::landmarks::types::InputEvent;
use crate::session::error::{SessionError, SessionResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::Path;
use tokio::sync::mpsc;

/// Trait for landmark sources
#[async_trait]
pub trait LandmarkSource: Send {
    /// Get the source identifier (e.g., "replay", "channel")
    fn id(&self) -> &str;

    /// Wait for the next input event. `None` means the source is exhausted.
    async fn next_event(&mut self) -> SessionResult<Option<InputEvent>>;
}

/// Replays a recorded event stream.
pub struct ReplaySource {
    id: String,
    events: VecDeque<InputEvent>,
}

impl ReplaySource {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self {
            id: "replay".to_string(),
            events: events.into(),
        }
    }

    /// Load a JSON array of input events.
    pub fn from_file(path: &Path) -> SessionResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let events: Vec<InputEvent> = serde_json::from_str(&content)?;

        tracing::info!("Loaded {} input events from {}", events.len(), path.display());

        Ok(Self::new(events))
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl LandmarkSource for ReplaySource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn next_event(&mut self) -> SessionResult<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}

/// Receives events pushed by a detector running on another thread or task.
pub struct ChannelSource {
    id: String,
    receiver: mpsc::Receiver<InputEvent>,
}

impl ChannelSource {
    /// Create a source and the sender the detector pushes into.
    pub fn channel(capacity: usize) -> SessionResult<(mpsc::Sender<InputEvent>, Self)> {
        if capacity == 0 {
            return Err(SessionError::Source(
                "channel capacity must be positive".to_string(),
            ));
        }

        let (sender, receiver) = mpsc::channel(capacity);
        Ok((
            sender,
            Self {
                id: "channel".to_string(),
                receiver,
            },
        ))
    }
}

#[async_trait]
impl LandmarkSource for ChannelSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn next_event(&mut self) -> SessionResult<Option<InputEvent>> {
        // All senders dropped means the detector shut down.
        Ok(self.receiver.recv().await)
    }
}
