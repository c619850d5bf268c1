use crate::actions::dispatcher::{Action, ActionSink};
use crate::session::error::SessionResult;
use parking_lot::Mutex as ParkingMutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedAction {
    pub sequence: u64,
    pub action: Action,
    pub unix_time_ms: i64,
}

/// Sink that keeps every action it receives.
///
/// Clones share the same buffer, so a handle kept by the caller can inspect
/// or flush what a session dispatched after the session took ownership of
/// its own clone.
#[derive(Debug, Clone)]
pub struct ActionRecorder {
    id: String,
    actions: Arc<ParkingMutex<Vec<RecordedAction>>>,
}

impl ActionRecorder {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            actions: Arc::new(ParkingMutex::new(Vec::new())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.actions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.lock().is_empty()
    }

    /// Snapshot of the recorded actions, without metadata
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().iter().map(|r| r.action).collect()
    }

    pub fn records(&self) -> Vec<RecordedAction> {
        self.actions.lock().clone()
    }

    pub fn clear(&self) {
        self.actions.lock().clear();
    }

    fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> SessionResult<()> {
        let data = serde_json::to_vec_pretty(value)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Write the recorded actions to `<dir>/gestures-<id>-actions.json`
    pub fn flush_to_disk(&self, output_dir: &Path) -> SessionResult<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let path = output_dir.join(format!("gestures-{}-actions.json", self.id));
        Self::write_json(&path, &*self.actions.lock())?;

        tracing::info!("Wrote {} actions to {}", self.len(), path.display());

        Ok(path)
    }
}

impl Default for ActionRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSink for ActionRecorder {
    fn execute(&mut self, action: &Action) {
        let mut actions = self.actions.lock();
        let sequence = actions.len() as u64;
        actions.push(RecordedAction {
            sequence,
            action: *action,
            unix_time_ms: chrono::Utc::now().timestamp_millis(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::dispatcher::MouseButton;

    #[test]
    fn test_clones_share_buffer() {
        let recorder = ActionRecorder::new();
        let mut sink = recorder.clone();

        sink.execute(&Action::MouseDown);
        sink.execute(&Action::Click {
            button: MouseButton::Left,
        });

        assert_eq!(recorder.len(), 2);
        assert_eq!(
            recorder.actions(),
            vec![
                Action::MouseDown,
                Action::Click {
                    button: MouseButton::Left
                }
            ]
        );
        let sequences: Vec<u64> = recorder.records().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1]);

        recorder.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_flush_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = ActionRecorder::new();
        recorder.execute(&Action::NextImage);

        let path = recorder.flush_to_disk(&dir.path().join("out")).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .contains(recorder.id()));

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<RecordedAction> = serde_json::from_str(&content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].action, Action::NextImage);
    }
}
