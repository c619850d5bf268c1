//! Per-frame signal processing
//!
//! Geometry helpers, exponential smoothing, screen-space cursor mapping and
//! frame-counted cooldowns. Everything here that carries state across frames
//! is owned by the mode state machine.

pub mod cooldown;
pub mod cursor;
pub mod geometry;
pub mod smoothing;

pub use cooldown::{CooldownKey, CooldownManager};
pub use cursor::{CursorMapper, ScreenSize};
pub use geometry::{distance, midpoint};
pub use smoothing::{SmoothingFilter, SmoothingFilter2D};
