//! Mock workbook model used by the integration tests.
//!
//! Builds in-memory sheets through the same capability traits the renderer
//! consumes, so layout, planning and lowering can be exercised without a
//! parser or a browser canvas.
#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;

use sheetview::cell_ref::parse_cell_ref;
use sheetview::error::Result;
use sheetview::text::TextMeasurer;
use sheetview::types::{
    AlignmentSpec, Borders, ColumnProperties, Fill, FontSpec, ImageData, SheetCell, SheetImage,
    SheetProperties, SheetRow, Workbook, Worksheet,
};

/// Fake measurer: every character is `char_px` wide regardless of font.
pub struct CharWidthMeasurer {
    pub char_px: f64,
}

impl CharWidthMeasurer {
    pub fn new(char_px: f64) -> Self {
        Self { char_px }
    }
}

impl TextMeasurer for CharWidthMeasurer {
    fn measure(&mut self, _font: &str, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_px
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestCell {
    pub value: Option<String>,
    /// Simulates a cell whose text accessor throws.
    pub text_fails: bool,
    pub merged: bool,
    pub fill: Option<Fill>,
    pub borders: Borders,
    pub font: Option<FontSpec>,
    pub alignment: Option<AlignmentSpec>,
}

impl TestCell {
    pub fn text(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            text_fails: true,
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_alignment(mut self, alignment: AlignmentSpec) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

impl SheetCell for TestCell {
    fn text(&self) -> Result<String> {
        if self.text_fails {
            return Err("cell value unavailable".into());
        }
        Ok(self.value.clone().unwrap_or_default())
    }

    fn is_merged(&self) -> bool {
        self.merged
    }

    fn fill(&self) -> Option<Fill> {
        self.fill.clone()
    }

    fn borders(&self) -> Borders {
        self.borders.clone()
    }

    fn font(&self) -> Option<FontSpec> {
        self.font.clone()
    }

    fn alignment(&self) -> Option<AlignmentSpec> {
        self.alignment.clone()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RowConfig {
    height: Option<f64>,
    hidden: bool,
    collapsed: bool,
}

pub struct TestRow {
    number: u32,
    config: RowConfig,
    cells: Rc<HashMap<(u32, u32), TestCell>>,
}

impl SheetRow for TestRow {
    type Cell = TestCell;

    fn number(&self) -> u32 {
        self.number
    }

    fn height(&self) -> Option<f64> {
        self.config.height
    }

    fn hidden(&self) -> bool {
        self.config.hidden
    }

    fn collapsed(&self) -> bool {
        self.config.collapsed
    }

    fn cell(&self, col: u32) -> TestCell {
        self.cells
            .get(&(col, self.number))
            .cloned()
            .unwrap_or_default()
    }
}

pub struct TestSheet {
    pub name: String,
    column_count: u32,
    row_count: u32,
    default_col_width: Option<f64>,
    default_row_height: f64,
    columns: HashMap<u32, ColumnProperties>,
    row_configs: HashMap<u32, RowConfig>,
    cells: Rc<HashMap<(u32, u32), TestCell>>,
    merges: Vec<String>,
    images: Vec<SheetImage>,
}

impl TestSheet {
    pub fn new(name: &str, column_count: u32, row_count: u32) -> Self {
        Self {
            name: name.to_string(),
            column_count,
            row_count,
            default_col_width: None,
            default_row_height: 15.0,
            columns: HashMap::new(),
            row_configs: HashMap::new(),
            cells: Rc::new(HashMap::new()),
            merges: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn default_col_width(mut self, width: f64) -> Self {
        self.default_col_width = Some(width);
        self
    }

    pub fn default_row_height(mut self, height: f64) -> Self {
        self.default_row_height = height;
        self
    }

    pub fn col_width(mut self, number: u32, width: f64) -> Self {
        self.columns
            .entry(number)
            .or_insert_with(|| ColumnProperties {
                number,
                ..ColumnProperties::default()
            })
            .width = Some(width);
        self
    }

    pub fn hide_col(mut self, number: u32) -> Self {
        self.columns
            .entry(number)
            .or_insert_with(|| ColumnProperties {
                number,
                ..ColumnProperties::default()
            })
            .hidden = true;
        self
    }

    pub fn collapse_col(mut self, number: u32) -> Self {
        self.columns
            .entry(number)
            .or_insert_with(|| ColumnProperties {
                number,
                ..ColumnProperties::default()
            })
            .collapsed = true;
        self
    }

    pub fn row_height(mut self, number: u32, height: f64) -> Self {
        self.row_configs.entry(number).or_default().height = Some(height);
        self
    }

    pub fn hide_row(mut self, number: u32) -> Self {
        self.row_configs.entry(number).or_default().hidden = true;
        self
    }

    pub fn collapse_row(mut self, number: u32) -> Self {
        self.row_configs.entry(number).or_default().collapsed = true;
        self
    }

    /// Place a cell at a reference like "B2".
    pub fn cell(mut self, cell_ref: &str, cell: TestCell) -> Self {
        let pos = parse_cell_ref(cell_ref).expect("valid cell ref");
        Rc::make_mut(&mut self.cells).insert((pos.col, pos.row), cell);
        self
    }

    pub fn value(self, cell_ref: &str, value: &str) -> Self {
        self.cell(cell_ref, TestCell::text(value))
    }

    pub fn merge(mut self, range_ref: &str) -> Self {
        self.merges.push(range_ref.to_string());
        self
    }

    pub fn image(mut self, image: SheetImage) -> Self {
        self.images.push(image);
        self
    }
}

impl Worksheet for TestSheet {
    type Row = TestRow;

    fn column_count(&self) -> u32 {
        self.column_count
    }

    fn row_count(&self) -> u32 {
        self.row_count
    }

    fn properties(&self) -> SheetProperties {
        SheetProperties {
            default_col_width: self.default_col_width,
            default_row_height: self.default_row_height,
        }
    }

    fn column(&self, number: u32) -> Option<ColumnProperties> {
        self.columns.get(&number).cloned()
    }

    fn rows(&self, start: u32, end: u32) -> Vec<TestRow> {
        if self.row_count == 0 {
            return Vec::new();
        }
        (start..=end.min(self.row_count))
            .map(|number| TestRow {
                number,
                config: self.row_configs.get(&number).copied().unwrap_or_default(),
                cells: Rc::clone(&self.cells),
            })
            .collect()
    }

    fn merges(&self) -> Vec<String> {
        self.merges.clone()
    }

    fn images(&self) -> Vec<SheetImage> {
        self.images.clone()
    }
}

#[derive(Default)]
pub struct TestWorkbook {
    sheets: Vec<TestSheet>,
    images: HashMap<u32, ImageData>,
}

impl TestWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(mut self, sheet: TestSheet) -> Self {
        self.sheets.push(sheet);
        self
    }

    pub fn with_image(mut self, id: u32, data: ImageData) -> Self {
        self.images.insert(id, data);
        self
    }
}

impl Workbook for TestWorkbook {
    type Sheet = TestSheet;

    fn worksheet_by_index(&self, index: u32) -> Option<&TestSheet> {
        if index == 0 {
            return None;
        }
        self.sheets.get(index as usize - 1)
    }

    fn worksheet_by_name(&self, name: &str) -> Option<&TestSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    fn default_worksheet(&self) -> Option<&TestSheet> {
        self.sheets.first()
    }

    fn image(&self, id: u32) -> Option<ImageData> {
        self.images.get(&id).cloned()
    }
}
