//! Where the scaled image lands on the display surface
//!
//! The image is scaled to `display * scale`, centred, shifted by the smoothed
//! offset and then clamped so at least `min_visible` pixels stay on screen
//! per axis. The renderer copies `source` out of the scaled image into
//! `destination` on the surface.

use crate::viewer::drag_zoom::ViewTransform;
use serde::{Deserialize, Serialize};

/// Integer pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub scaled_width: i64,
    pub scaled_height: i64,
    /// Top-left of the scaled image in surface coordinates, after clamping
    pub origin_x: i64,
    pub origin_y: i64,
    /// Visible part of the scaled image
    pub source: Rect,
    /// Where that part is drawn on the surface
    pub destination: Rect,
}

/// Lay out the scaled image on a `display_width` x `display_height` surface
pub fn compute_placement(
    display_width: u32,
    display_height: u32,
    view: ViewTransform,
    min_visible: u32,
) -> Placement {
    let (fw, fh) = (display_width as i64, display_height as i64);
    let margin = min_visible as i64;

    let new_w = (fw as f64 * view.scale) as i64;
    let new_h = (fh as f64 * view.scale) as i64;

    let origin_x = clamp_axis((fw - new_w).div_euclid(2) + view.offset_x as i64, new_w, fw, margin);
    let origin_y = clamp_axis((fh - new_h).div_euclid(2) + view.offset_y as i64, new_h, fh, margin);

    let (dst_x, src_x, width) = visible_span(origin_x, new_w, fw);
    let (dst_y, src_y, height) = visible_span(origin_y, new_h, fh);

    Placement {
        scaled_width: new_w,
        scaled_height: new_h,
        origin_x,
        origin_y,
        source: Rect::new(src_x, src_y, width, height),
        destination: Rect::new(dst_x, dst_y, width, height),
    }
}

/// Keep `origin` within `[-size + margin, display - margin]`. When the
/// window is inverted (tiny surfaces) the upper bound wins.
fn clamp_axis(origin: i64, size: i64, display: i64, margin: i64) -> i64 {
    origin.max(-size + margin).min(display - margin)
}

/// Intersect `[origin, origin + size)` with `[0, display)`.
///
/// Returns destination start, source start and visible length.
fn visible_span(origin: i64, size: i64, display: i64) -> (i64, i64, i64) {
    let start = origin.max(0);
    let end = (origin + size).min(display);
    let source = (-origin).max(0);
    (start, source, (end - start).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(scale: f64, offset_x: f64, offset_y: f64) -> ViewTransform {
        ViewTransform {
            scale,
            offset_x,
            offset_y,
        }
    }

    #[test]
    fn test_identity_fills_surface() {
        let placement = compute_placement(1280, 720, ViewTransform::default(), 100);

        assert_eq!(placement.scaled_width, 1280);
        assert_eq!(placement.scaled_height, 720);
        assert_eq!(placement.source, Rect::new(0, 0, 1280, 720));
        assert_eq!(placement.destination, Rect::new(0, 0, 1280, 720));
    }

    #[test]
    fn test_zoomed_out_is_centred() {
        let placement = compute_placement(1000, 800, view(0.5, 0.0, 0.0), 100);

        assert_eq!(placement.origin_x, 250);
        assert_eq!(placement.origin_y, 200);
        assert_eq!(placement.destination, Rect::new(250, 200, 500, 400));
        assert_eq!(placement.source, Rect::new(0, 0, 500, 400));
    }

    #[test]
    fn test_zoomed_in_crops_source() {
        let placement = compute_placement(1000, 800, view(2.0, 0.0, 0.0), 100);

        assert_eq!(placement.origin_x, -500);
        assert_eq!(placement.source, Rect::new(500, 400, 1000, 800));
        assert_eq!(placement.destination, Rect::new(0, 0, 1000, 800));
    }

    #[test]
    fn test_offset_is_clamped() {
        // Dragged far right: only 100px remain visible on the left edge of the surface
        let right = compute_placement(1000, 800, view(1.0, 5000.0, 0.0), 100);
        assert_eq!(right.origin_x, 900);
        assert_eq!(right.destination.width, 100);

        // Dragged far up-left
        let left = compute_placement(1000, 800, view(1.0, -5000.0, -5000.0), 100);
        assert_eq!(left.origin_x, -900);
        assert_eq!(left.origin_y, -700);
        assert_eq!(left.source, Rect::new(900, 700, 100, 100));
        assert_eq!(left.destination, Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn test_always_keeps_min_visible() {
        for scale in [0.5, 0.75, 1.0, 1.6, 2.3, 3.0] {
            for offset in [-100_000.0, -1500.0, -333.0, 0.0, 250.0, 1800.0, 100_000.0] {
                let placement = compute_placement(1280, 720, view(scale, offset, -offset), 100);
                assert!(
                    placement.destination.width >= 100 && placement.destination.height >= 100,
                    "scale {} offset {} left {:?} visible",
                    scale,
                    offset,
                    placement.destination
                );
                assert_eq!(placement.source.width, placement.destination.width);
                assert_eq!(placement.source.height, placement.destination.height);
            }
        }
    }

    #[test]
    fn test_empty_rect() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }
}
