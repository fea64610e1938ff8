//! Read-only capability traits over the workbook object model.
//!
//! The renderer never parses workbook bytes; it consumes an in-memory model
//! through these traits and does not mutate it. Implementations typically
//! wrap whatever the parser produced; the test suite wraps plain structs.

use crate::error::Result;
use crate::types::{
    AlignmentSpec, Borders, ColumnProperties, Fill, FontSpec, ImageData, SheetImage,
    SheetProperties,
};

/// A workbook: an ordered set of worksheets plus an image store.
pub trait Workbook {
    type Sheet: Worksheet;

    /// Fetch a worksheet by 1-based index.
    fn worksheet_by_index(&self, index: u32) -> Option<&Self::Sheet>;

    /// Fetch a worksheet by name.
    fn worksheet_by_name(&self, name: &str) -> Option<&Self::Sheet>;

    /// The worksheet drawn when the caller names none.
    fn default_worksheet(&self) -> Option<&Self::Sheet>;

    /// Fetch an embedded image's bytes by numeric id.
    fn image(&self, id: u32) -> Option<ImageData>;
}

/// One worksheet: dimensions, band properties, cells, merges, images.
pub trait Worksheet {
    type Row: SheetRow;

    fn column_count(&self) -> u32;

    fn row_count(&self) -> u32;

    fn properties(&self) -> SheetProperties;

    /// Declared properties of a column, if any.
    fn column(&self, number: u32) -> Option<ColumnProperties>;

    /// Rows `start..=end` (1-based), in order. A sheet with no rows yields
    /// an empty vec and the draw becomes a no-op.
    fn rows(&self, start: u32, end: u32) -> Vec<Self::Row>;

    /// Merged range references (e.g. "A1:B2"), in document order.
    fn merges(&self) -> Vec<String>;

    /// Embedded image references, in document order.
    fn images(&self) -> Vec<SheetImage>;
}

/// One row handle: band properties plus cell access.
pub trait SheetRow {
    type Cell: SheetCell;

    fn number(&self) -> u32;

    /// Declared height in points; absent means the sheet default applies.
    fn height(&self) -> Option<f64>;

    fn hidden(&self) -> bool;

    fn collapsed(&self) -> bool;

    /// Cell at the given 1-based column.
    fn cell(&self, col: u32) -> Self::Cell;
}

/// One cell: value plus styling.
pub trait SheetCell {
    /// The cell's display text. A failure here is swallowed by the renderer
    /// and treated as an empty string.
    fn text(&self) -> Result<String>;

    fn is_merged(&self) -> bool;

    fn fill(&self) -> Option<Fill>;

    fn borders(&self) -> Borders;

    fn font(&self) -> Option<FontSpec>;

    fn alignment(&self) -> Option<AlignmentSpec>;
}
