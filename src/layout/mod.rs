//! Layout engine: visible column/row bands, merge index, cell and image
//! rectangles.

pub mod anchors;
pub mod sheet_layout;

pub use anchors::{image_rect, CanvasAnchor};
pub use sheet_layout::{CanvasColumn, CanvasRow, SheetLayout};
