//! Pan and zoom state for the image viewer
//!
//! Gestures only move the *targets*; `advance` eases the displayed scale and
//! offset toward them once per rendered frame, so zoom steps and drags settle
//! smoothly even on frames without input.

use crate::capture::landmarks::types::Point2D;
use crate::config::{ConfigResult, ViewerConfig};
use crate::processing::geometry::midpoint;
use crate::processing::smoothing::{SmoothingFilter, SmoothingFilter2D};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoomDirection {
    In,
    Out,
}

/// Smoothed view state handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DragZoomController {
    scale: SmoothingFilter,
    offset: SmoothingFilter2D,
    drag_active: bool,
    prev_center: Option<Point2D>,
    min_scale: f64,
    max_scale: f64,
    zoom_step: f64,
}

impl DragZoomController {
    /// Identity view with the scale clamped into the configured range.
    /// Fails if `config` or `alpha` is out of range.
    pub fn new(config: &ViewerConfig, alpha: f64) -> ConfigResult<Self> {
        config.validate()?;
        let initial_scale = 1.0_f64.clamp(config.min_scale, config.max_scale);

        Ok(Self {
            scale: SmoothingFilter::new(initial_scale, alpha)?,
            offset: SmoothingFilter2D::new(Point2D::default(), alpha)?,
            drag_active: false,
            prev_center: None,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            zoom_step: config.zoom_step,
        })
    }

    /// Feed the two drag fingertips for this frame.
    ///
    /// The first call only anchors the midpoint. Later calls add the
    /// midpoint's displacement to the target offset and return it. Passing
    /// the same point twice gives a single-finger drag.
    pub fn begin_or_continue_drag(&mut self, first: Point2D, second: Point2D) -> Option<Point2D> {
        let center = midpoint(first, second);

        let delta = match self.prev_center {
            Some(prev) if self.drag_active => {
                let delta = Point2D::new(center.x - prev.x, center.y - prev.y);
                let target = self.offset.target();
                self.offset
                    .set_target(Point2D::new(target.x + delta.x, target.y + delta.y));
                Some(delta)
            }
            _ => {
                tracing::debug!("Drag anchored at ({:.1}, {:.1})", center.x, center.y);
                self.drag_active = true;
                None
            }
        };

        self.prev_center = Some(center);
        delta
    }

    /// End the drag. Accumulated offset is kept.
    pub fn stop_drag(&mut self) {
        self.drag_active = false;
        self.prev_center = None;
    }

    /// Step the target scale one notch, clamped to the configured bounds.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let target = match direction {
            ZoomDirection::In => (self.scale.target() + self.zoom_step).min(self.max_scale),
            ZoomDirection::Out => (self.scale.target() - self.zoom_step).max(self.min_scale),
        };
        self.scale.set_target(target);
    }

    /// Ease scale and offset one frame toward their targets
    pub fn advance(&mut self) -> ViewTransform {
        self.scale.step();
        self.offset.step();
        self.view()
    }

    pub fn view(&self) -> ViewTransform {
        let offset = self.offset.current();
        ViewTransform {
            scale: self.scale.current(),
            offset_x: offset.x,
            offset_y: offset.y,
        }
    }

    pub fn target_scale(&self) -> f64 {
        self.scale.target()
    }

    pub fn target_offset(&self) -> Point2D {
        self.offset.target()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_active
    }

    pub fn prev_center(&self) -> Option<Point2D> {
        self.prev_center
    }
}
