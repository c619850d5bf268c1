//! Cursor mapping from capture-frame pixels to screen coordinates
//!
//! The index fingertip is mapped linearly from the camera frame onto the
//! screen, then smoothed so detector jitter does not shake the pointer.

use crate::capture::landmarks::types::Point2D;
use crate::config::ConfigResult;
use crate::processing::smoothing::SmoothingFilter2D;
use serde::{Deserialize, Serialize};

/// Hand-less frames keep emitting cursor moves until within this many pixels.
pub const CURSOR_SETTLE_THRESHOLD: f64 = 0.5;

/// Target screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Linear interpolation of `value` from `[0, from]` onto `[0, to]`, clamped
/// to the ends of the range.
pub fn interpolate(value: f64, from: f64, to: f64) -> f64 {
    if from <= 0.0 {
        return 0.0;
    }
    value.clamp(0.0, from) / from * to
}

/// Map a capture-frame point onto the screen
pub fn map_to_screen(
    point: Point2D,
    frame_width: u32,
    frame_height: u32,
    screen: ScreenSize,
) -> Point2D {
    Point2D::new(
        interpolate(point.x, frame_width as f64, screen.width as f64),
        interpolate(point.y, frame_height as f64, screen.height as f64),
    )
}

/// Smoothed on-screen cursor
#[derive(Debug, Clone)]
pub struct CursorMapper {
    screen: ScreenSize,
    filter: SmoothingFilter2D,
    primed: bool,
}

impl CursorMapper {
    pub fn new(screen: ScreenSize, alpha: f64) -> ConfigResult<Self> {
        Ok(Self {
            screen,
            filter: SmoothingFilter2D::new(Point2D::default(), alpha)?,
            primed: false,
        })
    }

    /// Aim the cursor at a fingertip seen in a `frame_width` x `frame_height`
    /// capture frame.
    ///
    /// The first sample snaps the cursor instead of sweeping in from the
    /// screen origin.
    pub fn track(&mut self, fingertip: Point2D, frame_width: u32, frame_height: u32) {
        let target = map_to_screen(fingertip, frame_width, frame_height, self.screen);
        if self.primed {
            self.filter.set_target(target);
        } else {
            self.filter.reset(target);
            self.primed = true;
        }
    }

    /// Advance the smoothing one frame. Returns `None` until the cursor has
    /// been aimed at least once.
    pub fn step(&mut self) -> Option<Point2D> {
        self.primed.then(|| self.filter.step())
    }

    pub fn is_settled(&self) -> bool {
        self.filter.is_settled(CURSOR_SETTLE_THRESHOLD)
    }

    pub fn position(&self) -> Option<Point2D> {
        self.primed.then(|| self.filter.current())
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }
}
