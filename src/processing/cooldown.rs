//! Frame-counted debounce for discrete actions
//!
//! Each action kind owns its own counter, so a clap on cooldown never blocks
//! an unrelated action. Counters are measured in processed frames, not wall
//! time; use [`frames_for_duration`] when a duration is the intent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Actions that are debounced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CooldownKey {
    MaximizeWindow,
    MinimizeWindow,
    NextImage,
}

/// Default cooldown length in frames
pub const DEFAULT_COOLDOWN_FRAMES: u32 = 25;

#[derive(Debug, Clone, Default)]
pub struct CooldownManager {
    counters: HashMap<CooldownKey, u32>,
}

impl CooldownManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block `key` for the next `frames` ticks.
    pub fn start(&mut self, key: CooldownKey, frames: u32) {
        self.counters.insert(key, frames);
    }

    /// Count down every running cooldown by one frame.
    pub fn tick(&mut self) {
        for remaining in self.counters.values_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        self.counters.retain(|_, remaining| *remaining > 0);
    }

    pub fn is_ready(&self, key: CooldownKey) -> bool {
        self.remaining(key) == 0
    }

    pub fn remaining(&self, key: CooldownKey) -> u32 {
        self.counters.get(&key).copied().unwrap_or(0)
    }
}

/// Convert a duration to a frame count at `tick_rate_hz`, rounding up
pub fn frames_for_duration(duration: Duration, tick_rate_hz: f64) -> u32 {
    (duration.as_secs_f64() * tick_rate_hz).ceil().min(u32::MAX as f64) as u32
}
