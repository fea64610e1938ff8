//! Draw orchestration on the Canvas 2D surface.
//!
//! A draw sizes the raster to the sheet's visible bands, paints the
//! background, paints every cell (background, then borders, then value, in
//! the order produced by [`cells::plan_cells`]), and finally composites
//! embedded images asynchronously.

pub mod cells;
pub mod images;

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, SheetviewError};
use crate::layout::SheetLayout;
use crate::options::RenderOptions;
use crate::styles::DrawParams;
use crate::text::{break_lines, with_measurer};
use crate::types::Workbook;

pub use cells::{first_baseline_y, plan_cells, text_anchor_x, CanvasCell, CellBorders};

/// Which worksheet to draw.
#[derive(Debug, Clone, Default)]
pub enum SheetSelector {
    /// The workbook's default worksheet.
    #[default]
    Default,
    /// 1-based worksheet index.
    Index(u32),
    /// Worksheet name.
    Name(String),
}

impl From<u32> for SheetSelector {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for SheetSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SheetSelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

fn select_sheet<'a, W: Workbook>(workbook: &'a W, selector: &SheetSelector) -> Option<&'a W::Sheet> {
    match selector {
        SheetSelector::Default => workbook.default_worksheet(),
        SheetSelector::Index(index) => workbook.worksheet_by_index(*index),
        SheetSelector::Name(name) => workbook.worksheet_by_name(name),
    }
}

/// Canvas renderer bound to one target canvas.
pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Bumped at the start of every draw; image tasks from an older draw
    /// see the mismatch and drop their bitmaps.
    generation: Rc<Cell<u64>>,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        console_error_panic_hook::set_once();

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SheetviewError::Context("failed to get 2d context".to_string()))?
            .ok_or_else(|| SheetviewError::Context("no 2d context available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SheetviewError::Context("context is not 2d".to_string()))?;

        Ok(Self {
            canvas,
            ctx,
            generation: Rc::new(Cell::new(0)),
        })
    }

    /// Draw one worksheet of `workbook` onto the canvas.
    ///
    /// The raster is resized to the sheet's visible extent. `scale` sets the
    /// canvas's CSS size to raster x scale; without it any previously set
    /// CSS size is cleared. Resolves once cells are painted and every image
    /// decode has settled.
    pub async fn draw<W: Workbook>(
        &self,
        workbook: &W,
        sheet: SheetSelector,
        options: &RenderOptions,
        scale: Option<f64>,
    ) -> Result<()> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let params = DrawParams::new(options);
        let Some(sheet) = select_sheet(workbook, &sheet) else {
            return Ok(());
        };

        let layout = SheetLayout::build(sheet, &params.scale, params.fallback_col_char_unit_width);
        if layout.is_empty() {
            return Ok(());
        }

        self.resize_surface(&layout, scale);

        self.ctx.set_fill_style_str(&params.background_color);
        self.ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

        let cells = with_measurer(|m| plan_cells(&layout, &params, m))?;
        for cell in &cells {
            self.paint_cell(cell, &params)?;
        }

        images::draw_images(
            &self.ctx,
            workbook,
            sheet,
            &layout,
            &params.scale,
            &self.generation,
            generation,
        )
        .await
    }

    fn resize_surface<R>(&self, layout: &SheetLayout<R>, scale: Option<f64>) {
        self.canvas.set_width(layout.width.round() as u32);
        self.canvas.set_height(layout.height.round() as u32);

        let style = self.canvas.style();
        match scale {
            Some(scale) => {
                let _ = style.set_property("width", &format!("{}px", layout.width * scale));
                let _ = style.set_property("height", &format!("{}px", layout.height * scale));
            }
            None => {
                let _ = style.remove_property("width");
                let _ = style.remove_property("height");
            }
        }
    }

    /// Paint one cell: background, then borders, then value.
    fn paint_cell(&self, cell: &CanvasCell, params: &DrawParams) -> Result<()> {
        let rect = &cell.rect;

        self.ctx.set_fill_style_str(&cell.background);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);

        self.stroke_border(&cell.borders.left, rect.x, rect.y, rect.x, rect.bottom())?;
        self.stroke_border(&cell.borders.top, rect.x, rect.y, rect.right(), rect.y)?;
        self.stroke_border(
            &cell.borders.right,
            rect.right(),
            rect.y,
            rect.right(),
            rect.bottom(),
        )?;
        self.stroke_border(
            &cell.borders.bottom,
            rect.x,
            rect.bottom(),
            rect.right(),
            rect.bottom(),
        )?;

        if !cell.value.is_empty() {
            self.paint_text(cell, params)?;
        }

        Ok(())
    }

    fn stroke_border(
        &self,
        border: &crate::styles::LoweredBorder,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<()> {
        if border.is_none() {
            return Ok(());
        }

        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&border.color);
        self.ctx.set_line_width(border.width);
        self.ctx.set_line_cap("square");
        self.ctx.set_line_join("miter");
        let segments = Array::new();
        for segment in &border.segments {
            segments.push(&JsValue::from_f64(*segment));
        }
        self.ctx.set_line_dash(segments.as_ref())?;
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();

        Ok(())
    }

    fn paint_text(&self, cell: &CanvasCell, params: &DrawParams) -> Result<()> {
        let text = &cell.text;
        let inner = cell.rect.inset(params.cell_px_padding);

        let lines = with_measurer(|m| {
            break_lines(
                m,
                &text.font,
                &cell.value,
                inner.width,
                text.alignment.wrap_text,
            )
        })?;

        self.ctx.set_fill_style_str(&text.color);
        self.ctx.set_font(&text.font);
        self.ctx.set_text_align(&text.alignment.horizontal);
        self.ctx.set_text_baseline(&text.alignment.vertical);
        let _ = js_sys::Reflect::set(
            self.ctx.as_ref(),
            &JsValue::from_str("direction"),
            &JsValue::from_str(&text.alignment.text_direction),
        );

        let x = text_anchor_x(&text.alignment.horizontal, &inner);
        let mut y = first_baseline_y(
            &text.alignment.vertical,
            &inner,
            lines.len(),
            text.line_height,
        );

        for line in &lines {
            if text.alignment.shrink_to_fit {
                self.ctx
                    .fill_text_with_max_width(line, x, y, inner.width)?;
            } else {
                self.ctx.fill_text(line, x, y)?;
            }
            y += text.line_height;
        }

        Ok(())
    }
}

/// Render one worksheet of `workbook` onto `canvas`. Convenience wrapper
/// around [`Renderer`] for one-shot draws.
pub async fn render<W: Workbook>(
    canvas: &HtmlCanvasElement,
    workbook: &W,
    sheet: SheetSelector,
    options: &RenderOptions,
    scale: Option<f64>,
) -> Result<()> {
    Renderer::new(canvas.clone())?
        .draw(workbook, sheet, options, scale)
        .await
}
