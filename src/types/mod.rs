//! Data model: workbook capability traits and the style/drawing types they
//! hand to the renderer.

pub mod drawing;
pub mod style;
pub mod workbook;

pub use drawing::{AnchorSpec, Extent, ImageData, ImageFormat, ImagePlacement, SheetImage};
pub use style::{
    AlignmentSpec, BorderSide, BorderStyle, Borders, ColumnProperties, Fill, FontSpec,
    SheetProperties,
};
pub use workbook::{SheetCell, SheetRow, Workbook, Worksheet};
