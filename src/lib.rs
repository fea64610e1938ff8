//! sheetview - workbook-to-canvas renderer
//!
//! Paints a pixel-accurate facsimile of one worksheet onto an HTML Canvas
//! 2D surface, without relying on a spreadsheet application's own
//! rendering:
//! - Column widths in character units, row heights in points, EMU offsets
//! - Per-cell backgrounds, four directional borders with dash patterns
//! - Styled text with alignment, wrapping and shrink-to-fit
//! - Merged regions painted once at their bounding rect
//! - Anchor-positioned embedded images, decoded asynchronously
//!
//! The workbook model is consumed read-only through the capability traits
//! in [`types`]; parsing workbook bytes is someone else's job.
//!
//! # Usage
//!
//! ```ignore
//! use sheetview::{render, RenderOptions, SheetSelector};
//!
//! render(&canvas, &workbook, SheetSelector::Default,
//!        &RenderOptions::default(), None).await?;
//! ```

pub mod cell_ref;
pub mod error;
pub mod options;
pub mod types;
pub mod units;

// Layout and drawing
pub mod layout;
pub mod render;
pub mod styles;
pub mod text;

pub use error::{Result, SheetviewError};
pub use options::RenderOptions;
pub use render::{render, Renderer, SheetSelector};
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
