//! Exponential smoothing for jittery per-frame signals
//!
//! A single-pole filter: every frame the current value moves a fixed fraction
//! `alpha` of the remaining distance toward its target. Used for the cursor
//! position and for the viewer's scale and pan offset.

use crate::capture::landmarks::types::Point2D;
use crate::config::{self, ConfigResult};

/// 1D smoothed value tracking a target
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingFilter {
    current: f64,
    target: f64,
    alpha: f64,
}

impl SmoothingFilter {
    /// Create a filter resting at `initial`.
    ///
    /// `alpha` must lie in (0, 1]; 1 disables smoothing.
    pub fn new(initial: f64, alpha: f64) -> ConfigResult<Self> {
        config::alpha("alpha", alpha)?;
        Ok(Self {
            current: initial,
            target: initial,
            alpha,
        })
    }

    /// Update the target only; `current` moves on the next `step`.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advance one frame toward the target and return the new value.
    pub fn step(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.alpha;
        self.current
    }

    /// Jump straight to `value` with nothing left to settle.
    pub fn reset(&mut self, value: f64) {
        self.current = value;
        self.target = value;
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Check if the value is within `threshold` of its target
    pub fn is_settled(&self, threshold: f64) -> bool {
        (self.target - self.current).abs() < threshold
    }
}

/// 2D smoothed point (X and Y axes)
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingFilter2D {
    pub x: SmoothingFilter,
    pub y: SmoothingFilter,
}

impl SmoothingFilter2D {
    pub fn new(initial: Point2D, alpha: f64) -> ConfigResult<Self> {
        Ok(Self {
            x: SmoothingFilter::new(initial.x, alpha)?,
            y: SmoothingFilter::new(initial.y, alpha)?,
        })
    }

    pub fn set_target(&mut self, target: Point2D) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    /// Advance both axes and return the new point
    pub fn step(&mut self) -> Point2D {
        Point2D::new(self.x.step(), self.y.step())
    }

    pub fn reset(&mut self, value: Point2D) {
        self.x.reset(value.x);
        self.y.reset(value.y);
    }

    pub fn current(&self) -> Point2D {
        Point2D::new(self.x.current(), self.y.current())
    }

    pub fn target(&self) -> Point2D {
        Point2D::new(self.x.target(), self.y.target())
    }

    /// Check if both axes have settled
    pub fn is_settled(&self, threshold: f64) -> bool {
        self.x.is_settled(threshold) && self.y.is_settled(threshold)
    }
}
