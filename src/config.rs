//! Gesture pipeline configuration
//!
//! All thresholds and tuning constants live here so the classifier, the
//! viewer controller and the state machine never hard-code them. Values are
//! loaded from JSON (camelCase keys, every field optional) and validated
//! before a state machine is built.

use crate::processing::cooldown::{frames_for_duration, DEFAULT_COOLDOWN_FRAMES};
use crate::processing::cursor::ScreenSize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Pixel distance thresholds for the gesture vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureThresholds {
    /// Thumb tip to index tip
    pub pinch_px: f64,
    /// Thumb tip to middle tip
    pub secondary_pinch_px: f64,
    /// Index tip to middle tip
    pub bridge_px: f64,
    /// Wrist to wrist across both hands
    pub clap_px: f64,
}

impl GestureThresholds {
    pub fn validate(&self) -> ConfigResult<()> {
        positive("thresholds.pinchPx", self.pinch_px)?;
        positive("thresholds.secondaryPinchPx", self.secondary_pinch_px)?;
        positive("thresholds.bridgePx", self.bridge_px)?;
        positive("thresholds.clapPx", self.clap_px)
    }
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            pinch_px: 40.0,
            secondary_pinch_px: 40.0,
            bridge_px: 50.0,
            clap_px: 180.0,
        }
    }
}

/// Smoothing factors (alpha) for continuous outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmoothingConfig {
    pub cursor_alpha: f64,
    pub viewer_alpha: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            cursor_alpha: 0.25,
            viewer_alpha: 0.25,
        }
    }
}

/// Debounce length for discrete actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CooldownConfig {
    pub frames: u32,
    /// Wall-clock alternative to `frames`, requires `tick_rate_hz`
    pub duration_ms: Option<u64>,
    pub tick_rate_hz: Option<f64>,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_COOLDOWN_FRAMES,
            duration_ms: None,
            tick_rate_hz: None,
        }
    }
}

impl CooldownConfig {
    /// Cooldown in frames, converting `duration_ms` when a tick rate is known
    pub fn effective_frames(&self) -> u32 {
        match (self.duration_ms, self.tick_rate_hz) {
            (Some(ms), Some(hz)) => frames_for_duration(Duration::from_millis(ms), hz),
            _ => self.frames,
        }
    }
}

/// Image viewer zoom and pan limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_step: f64,
    /// Minimum change in inter-hand distance per frame that counts as zoom
    pub zoom_delta_px: f64,
    /// Scaled image always keeps this much on screen per axis
    pub min_visible_px: u32,
}

impl ViewerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        positive("viewer.minScale", self.min_scale)?;
        positive("viewer.maxScale", self.max_scale)?;
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid {
                field: "viewer.minScale",
                reason: format!("{} exceeds viewer.maxScale {}", self.min_scale, self.max_scale),
            });
        }
        positive("viewer.zoomStep", self.zoom_step)?;
        if !(self.zoom_delta_px.is_finite() && self.zoom_delta_px >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "viewer.zoomDeltaPx",
                reason: format!("must be a non-negative number, got {}", self.zoom_delta_px),
            });
        }
        if self.min_visible_px == 0 {
            return Err(ConfigError::Invalid {
                field: "viewer.minVisiblePx",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            zoom_step: 0.1,
            zoom_delta_px: 10.0,
            min_visible_px: 100,
        }
    }
}

/// Top-level configuration for a gesture session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    pub thresholds: GestureThresholds,
    pub smoothing: SmoothingConfig,
    pub cooldown: CooldownConfig,
    pub viewer: ViewerConfig,
    /// Frames a secondary pinch must be held before it means "maximize"
    pub maximize_hold_frames: u32,
    pub screen: ScreenSize,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            thresholds: GestureThresholds::default(),
            smoothing: SmoothingConfig::default(),
            cooldown: CooldownConfig::default(),
            viewer: ViewerConfig::default(),
            maximize_hold_frames: 15,
            screen: ScreenSize::default(),
        }
    }
}

impl GestureConfig {
    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded gesture config from {}", path.display());

        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.thresholds.validate()?;

        alpha("smoothing.cursorAlpha", self.smoothing.cursor_alpha)?;
        alpha("smoothing.viewerAlpha", self.smoothing.viewer_alpha)?;

        match (self.cooldown.duration_ms, self.cooldown.tick_rate_hz) {
            (_, Some(hz)) => positive("cooldown.tickRateHz", hz)?,
            (Some(_), None) => {
                return Err(ConfigError::Invalid {
                    field: "cooldown.durationMs",
                    reason: "requires cooldown.tickRateHz".to_string(),
                })
            }
            (None, None) => {}
        }

        self.viewer.validate()?;

        if self.maximize_hold_frames == 0 {
            return Err(ConfigError::Invalid {
                field: "maximizeHoldFrames",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Invalid {
                field: "screen",
                reason: format!("{}x{} has no area", self.screen.width, self.screen.height),
            });
        }

        Ok(())
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {}", value),
        })
    }
}

/// Smoothing factor check: (0, 1], where 1 disables smoothing
pub(crate) fn alpha(field: &'static str, value: f64) -> ConfigResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must lie in (0, 1], got {}", value),
        })
    }
}
