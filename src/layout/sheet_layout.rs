//! Pre-computed layout for one worksheet.
//!
//! Positions are computed once per draw: visible columns and rows become
//! bands with cumulative pixel offsets, merges become a cell-to-range index,
//! and cell rectangles fall out of band lookups.

use std::collections::HashMap;

use crate::cell_ref::{parse_cell_range, CellPos, CellRange};
use crate::types::{SheetRow, Worksheet};
use crate::units::{Rect, Scale};

/// A visible column band.
#[derive(Debug, Clone, Copy)]
pub struct CanvasColumn {
    pub number: u32,
    /// Left edge; cumulative sum of the visible widths before it.
    pub x: f64,
    pub width: f64,
}

/// A visible row band, keeping its source row handle for cell access.
#[derive(Debug)]
pub struct CanvasRow<R> {
    pub number: u32,
    /// Top edge; cumulative sum of the visible heights above it.
    pub y: f64,
    pub height: f64,
    pub row: R,
}

/// Layout products for one sheet: bands, canvas size, merge index.
pub struct SheetLayout<R> {
    pub columns: Vec<CanvasColumn>,
    pub rows: Vec<CanvasRow<R>>,
    /// Canvas size: (sum of visible widths, sum of visible heights).
    pub width: f64,
    pub height: f64,
    col_index: HashMap<u32, usize>,
    row_index: HashMap<u32, usize>,
    merge_ids: HashMap<(u32, u32), usize>,
    merge_ranges: Vec<CellRange>,
}

impl<R: SheetRow> SheetLayout<R> {
    /// Compute the layout for `sheet`. `fallback_col_width` (character
    /// units) applies when neither the column nor the sheet declares one.
    pub fn build<S>(sheet: &S, scale: &Scale, fallback_col_width: f64) -> Self
    where
        S: Worksheet<Row = R>,
    {
        let props = sheet.properties();

        let mut columns = Vec::new();
        let mut col_index = HashMap::new();
        let mut x = 0.0;
        for number in 1..=sheet.column_count() {
            let declared = sheet.column(number);
            if declared
                .as_ref()
                .is_some_and(|c| c.hidden || c.collapsed)
            {
                continue;
            }
            let char_units = declared
                .and_then(|c| c.width)
                .or(props.default_col_width)
                .unwrap_or(fallback_col_width);
            let width = scale.char_units_to_px(char_units);
            col_index.insert(number, columns.len());
            columns.push(CanvasColumn { number, x, width });
            x += width;
        }

        let mut rows = Vec::new();
        let mut row_index = HashMap::new();
        let mut y = 0.0;
        for row in sheet.rows(1, sheet.row_count()) {
            if row.hidden() || row.collapsed() {
                continue;
            }
            let points = row.height().unwrap_or(props.default_row_height);
            let height = scale.points_to_px(points);
            let number = row.number();
            row_index.insert(number, rows.len());
            rows.push(CanvasRow {
                number,
                y,
                height,
                row,
            });
            y += height;
        }

        let mut merge_ids = HashMap::new();
        let mut merge_ranges = Vec::new();
        for merge_ref in sheet.merges() {
            let Some(range) = parse_cell_range(&merge_ref) else {
                continue;
            };
            let id = merge_ranges.len();
            for col in range.start.col..=range.end.col {
                for row in range.start.row..=range.end.row {
                    merge_ids.insert((col, row), id);
                }
            }
            merge_ranges.push(range);
        }

        SheetLayout {
            columns,
            rows,
            width: x,
            height: y,
            col_index,
            row_index,
            merge_ids,
            merge_ranges,
        }
    }

    /// True when the sheet yielded no rows; the draw is then a no-op.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, number: u32) -> Option<&CanvasColumn> {
        self.col_index
            .get(&number)
            .and_then(|&i| self.columns.get(i))
    }

    pub fn row(&self, number: u32) -> Option<&CanvasRow<R>> {
        self.row_index.get(&number).and_then(|&i| self.rows.get(i))
    }

    /// All merged ranges, in document order.
    pub fn merge_ranges(&self) -> &[CellRange] {
        &self.merge_ranges
    }

    /// The merged range containing `pos`, if any.
    pub fn merge_range_at(&self, pos: CellPos) -> Option<&CellRange> {
        self.merge_ids
            .get(&(pos.col, pos.row))
            .and_then(|&id| self.merge_ranges.get(id))
    }

    /// Rect of a single cell, ignoring merges. `None` when the column or
    /// row is hidden or out of range.
    pub fn single_cell_rect(&self, pos: CellPos) -> Option<Rect> {
        let column = self.column(pos.col)?;
        let row = self.row(pos.row)?;
        Some(Rect::new(column.x, row.y, column.width, row.height))
    }

    /// Bounding rect of a range: top-left of `start` spanned to
    /// bottom-right of `end`.
    pub fn range_rect(&self, range: &CellRange) -> Option<Rect> {
        let start = self.single_cell_rect(range.start)?;
        let end = self.single_cell_rect(range.end)?;
        Some(Rect::span(&start, &end))
    }

    /// Merge-aware cell rect: the bounding rect of the containing merged
    /// range, or the single-cell rect.
    pub fn cell_rect(&self, pos: CellPos) -> Option<Rect> {
        match self.merge_range_at(pos) {
            Some(range) => {
                let range = *range;
                self.range_rect(&range)
            }
            None => self.single_cell_rect(pos),
        }
    }
}
