//! Cell planning: iteration order and per-cell draw data.
//!
//! A draw walks the sheet twice — merged ranges first (in document order),
//! then every non-merged cell row by row. Within each pass, cells are
//! emitted empty-first, then cells whose value fits their rect, then
//! overflowing cells last, so spilled text paints over blank neighbours and
//! is not covered by later backgrounds. Overflow is a width-only
//! approximation; text is deliberately not clipped against neighbours.

use crate::cell_ref::CellPos;
use crate::layout::SheetLayout;
use crate::styles::{
    lower_background, lower_border, lower_text, DrawParams, LoweredBorder, LoweredText,
};
use crate::text::TextMeasurer;
use crate::types::{SheetCell, SheetRow};
use crate::units::Rect;

/// The four lowered border sides of a cell.
#[derive(Debug, Clone)]
pub struct CellBorders {
    pub left: LoweredBorder,
    pub top: LoweredBorder,
    pub right: LoweredBorder,
    pub bottom: LoweredBorder,
}

/// Everything needed to paint one cell. Built during iteration, consumed by
/// the painter, never retained.
#[derive(Debug, Clone)]
pub struct CanvasCell {
    pub rect: Rect,
    pub background: String,
    pub borders: CellBorders,
    pub text: LoweredText,
    pub value: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Spill {
    Empty,
    Fits,
    Overflows,
}

/// Produce all cells of the sheet in paint order.
pub fn plan_cells<R, M>(
    layout: &SheetLayout<R>,
    params: &DrawParams,
    measurer: &mut M,
) -> Vec<CanvasCell>
where
    R: SheetRow,
    M: TextMeasurer,
{
    let mut merged = Buckets::default();
    for range in layout.merge_ranges() {
        let Some(rect) = layout.range_rect(range) else {
            continue;
        };
        let Some(row) = layout.row(range.start.row) else {
            continue;
        };
        let cell = row.row.cell(range.start.col);
        merged.push(lower_cell(&cell, rect, params), measurer);
    }

    let mut plain = Buckets::default();
    for row in &layout.rows {
        for column in &layout.columns {
            let pos = CellPos {
                col: column.number,
                row: row.number,
            };
            if layout.merge_range_at(pos).is_some() {
                continue;
            }
            let rect = Rect::new(column.x, row.y, column.width, row.height);
            let cell = row.row.cell(column.number);
            plain.push(lower_cell(&cell, rect, params), measurer);
        }
    }

    let mut cells = merged.into_ordered();
    cells.extend(plain.into_ordered());
    cells
}

fn lower_cell<C: SheetCell>(cell: &C, rect: Rect, params: &DrawParams) -> CanvasCell {
    // A cell whose text cannot be read still paints as an empty cell.
    let value = cell.text().unwrap_or_default();
    let borders = cell.borders();

    CanvasCell {
        rect,
        background: lower_background(cell.fill().as_ref(), params),
        borders: CellBorders {
            left: lower_border(borders.left.as_ref(), params),
            top: lower_border(borders.top.as_ref(), params),
            right: lower_border(borders.right.as_ref(), params),
            bottom: lower_border(borders.bottom.as_ref(), params),
        },
        text: lower_text(cell.font().as_ref(), cell.alignment().as_ref(), params),
        value,
    }
}

#[derive(Default)]
struct Buckets {
    empty: Vec<CanvasCell>,
    fits: Vec<CanvasCell>,
    overflows: Vec<CanvasCell>,
}

impl Buckets {
    fn push<M: TextMeasurer>(&mut self, cell: CanvasCell, measurer: &mut M) {
        match classify(&cell, measurer) {
            Spill::Empty => self.empty.push(cell),
            Spill::Fits => self.fits.push(cell),
            Spill::Overflows => self.overflows.push(cell),
        }
    }

    fn into_ordered(self) -> Vec<CanvasCell> {
        let mut cells = self.empty;
        cells.extend(self.fits);
        cells.extend(self.overflows);
        cells
    }
}

/// X coordinate handed to `fillText` for a canvas `textAlign` value.
pub fn text_anchor_x(horizontal: &str, inner: &Rect) -> f64 {
    match horizontal {
        "center" => inner.x + inner.width / 2.0,
        "right" | "end" => inner.x + inner.width,
        _ => inner.x,
    }
}

/// Baseline of the first text line for a canvas `textBaseline` value;
/// subsequent lines advance by `line_height`.
pub fn first_baseline_y(vertical: &str, inner: &Rect, line_count: usize, line_height: f64) -> f64 {
    let occupied = line_count.saturating_sub(1) as f64 * line_height;
    match vertical {
        "top" => inner.y,
        "middle" => inner.y + (inner.height - occupied) / 2.0,
        _ => inner.y + inner.height - occupied,
    }
}

fn classify<M: TextMeasurer>(cell: &CanvasCell, measurer: &mut M) -> Spill {
    if cell.value.is_empty() {
        return Spill::Empty;
    }
    if !cell.text.alignment.shrink_to_fit
        && measurer.measure(&cell.text.font, &cell.value) < cell.rect.width
    {
        return Spill::Fits;
    }
    Spill::Overflows
}
