//! Point geometry shared by the classifier and the viewer controller

use crate::capture::landmarks::types::Point2D;

/// Euclidean distance between two points
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Arithmetic mean of two points
pub fn midpoint(a: Point2D, b: Point2D) -> Point2D {
    Point2D::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
