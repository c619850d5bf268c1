//! Image viewer state
//!
//! Drag/zoom control, the placement contract the external renderer follows,
//! and image index cycling.

pub mod drag_zoom;
pub mod gallery;
pub mod placement;

pub use drag_zoom::{DragZoomController, ViewTransform, ZoomDirection};
pub use gallery::{ImageGallery, ViewerError};
pub use placement::{compute_placement, Placement, Rect};
