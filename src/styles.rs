//! Style lowering: workbook styles to canvas primitives.
//!
//! Colors arrive as ARGB hex and leave as `#RRGGBBAA`. Border styles map to
//! pixel widths and dash segments, fonts to a CSS font shorthand, alignment
//! to the canvas `textAlign`/`textBaseline` vocabularies. All point-valued
//! quantities are multiplied by `pixel_per_point` exactly once, here, when
//! the draw parameters are built.

use std::collections::HashMap;

use crate::options::RenderOptions;
use crate::types::{AlignmentSpec, BorderSide, BorderStyle, Fill, FontSpec};
use crate::units::Scale;

/// Canvas `textAlign` values accepted from the workbook model.
const HORIZONTAL_ALIGNMENTS: [&str; 5] = ["left", "right", "center", "start", "end"];

/// Canvas `textBaseline` values accepted from the workbook model.
const VERTICAL_ALIGNMENTS: [&str; 6] = [
    "top",
    "hanging",
    "middle",
    "alphabetic",
    "ideographic",
    "bottom",
];

/// Options resolved into pre-scaled pixel values for one draw.
pub struct DrawParams {
    pub scale: Scale,
    pub background_color: String,
    pub border_fallback_color: String,
    pub border_fallback_style: BorderStyle,
    /// Per-style stroke widths in pixels.
    pub border_px_widths: HashMap<BorderStyle, f64>,
    /// Per-style dash segments in pixels; missing means solid.
    pub border_px_segments: HashMap<BorderStyle, Vec<f64>>,
    pub text_fallback_color: String,
    pub text_fallback_font_family_name: String,
    pub text_fallback_font_size: f64,
    pub text_fallback_alignment: Alignment,
    pub text_line_height: f64,
    pub fallback_col_char_unit_width: f64,
    pub cell_px_padding: f64,
}

impl DrawParams {
    pub fn new(options: &RenderOptions) -> Self {
        let scale = Scale::new(options.character_unit, options.dpi);
        let ppp = scale.pixel_per_point;

        let border_px_widths = options
            .border_point_width_map
            .iter()
            .map(|(&style, &points)| (style, points * ppp))
            .collect();
        let border_px_segments = options
            .border_point_segments_map
            .iter()
            .map(|(&style, points)| (style, points.iter().map(|p| p * ppp).collect()))
            .collect();

        Self {
            scale,
            background_color: options.background_color.clone(),
            border_fallback_color: options.border_fallback_color.clone(),
            border_fallback_style: options.border_fallback_style,
            border_px_widths,
            border_px_segments,
            text_fallback_color: options.text_fallback_color.clone(),
            text_fallback_font_family_name: options.text_fallback_font_family_name.clone(),
            text_fallback_font_size: options.text_fallback_font_size,
            text_fallback_alignment: Alignment {
                horizontal: options.text_fallback_alignment_horizontal.clone(),
                vertical: options.text_fallback_alignment_vertical.clone(),
                wrap_text: options.text_fallback_alignment_wrap_text,
                shrink_to_fit: options.text_fallback_alignment_shrink_to_fit,
                indent: options.text_fallback_alignment_indent,
                text_direction: options.text_fallback_alignment_text_direction.clone(),
                text_rotation: options.text_fallback_alignment_text_rotation,
            },
            text_line_height: options.text_line_height,
            fallback_col_char_unit_width: options.fallback_col_char_unit_width,
            cell_px_padding: options.cell_point_padding * ppp,
        }
    }
}

/// Convert an ARGB hex string (no `#`) to `#RRGGBBAA`.
pub fn argb_to_rgba(argb: &str) -> Option<String> {
    if argb.len() != 8 || !argb.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let (alpha, rgb) = argb.split_at(2);
    Some(format!("#{rgb}{alpha}"))
}

/// Background color for a cell: pattern fills use their background color,
/// everything else (including no fill) uses the canvas background.
pub fn lower_background(fill: Option<&Fill>, params: &DrawParams) -> String {
    match fill {
        Some(fill) if fill.fill_type.as_deref() == Some("pattern") => fill
            .bg_color
            .as_deref()
            .and_then(argb_to_rgba)
            .unwrap_or_else(|| params.background_color.clone()),
        _ => params.background_color.clone(),
    }
}

/// One cell border side lowered to stroke parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LoweredBorder {
    pub color: String,
    pub style: BorderStyle,
    pub width: f64,
    pub segments: Vec<f64>,
}

impl LoweredBorder {
    pub fn is_none(&self) -> bool {
        self.style == BorderStyle::None
    }
}

/// Lower one border side, substituting the configured fallbacks for missing
/// color/style. A `None` style yields zero width and no segments.
pub fn lower_border(side: Option<&BorderSide>, params: &DrawParams) -> LoweredBorder {
    let color = side
        .and_then(|s| s.color.as_deref())
        .and_then(argb_to_rgba)
        .unwrap_or_else(|| params.border_fallback_color.clone());
    let style = side
        .and_then(|s| s.style)
        .unwrap_or(params.border_fallback_style);

    if style == BorderStyle::None {
        return LoweredBorder {
            color,
            style,
            width: 0.0,
            segments: Vec::new(),
        };
    }

    LoweredBorder {
        color,
        style,
        width: params.border_px_widths.get(&style).copied().unwrap_or(0.0),
        segments: params
            .border_px_segments
            .get(&style)
            .cloned()
            .unwrap_or_default(),
    }
}

/// Validated alignment in canvas vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// Canvas `textAlign` value.
    pub horizontal: String,
    /// Canvas `textBaseline` value.
    pub vertical: String,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    pub indent: u32,
    pub text_direction: String,
    pub text_rotation: i32,
}

/// Cell text lowered to draw parameters.
#[derive(Debug, Clone)]
pub struct LoweredText {
    pub color: String,
    /// CSS font shorthand for the canvas `font` property.
    pub font: String,
    pub alignment: Alignment,
    /// Pixels from one baseline to the next.
    pub line_height: f64,
}

/// Lower a cell's font and alignment, substituting fallbacks field by field.
pub fn lower_text(
    font: Option<&FontSpec>,
    alignment: Option<&AlignmentSpec>,
    params: &DrawParams,
) -> LoweredText {
    let color = font
        .and_then(|f| f.color.as_deref())
        .and_then(argb_to_rgba)
        .unwrap_or_else(|| params.text_fallback_color.clone());
    let size = font
        .and_then(|f| f.size)
        .unwrap_or(params.text_fallback_font_size);

    LoweredText {
        color,
        font: font_string(font, size, params),
        alignment: lower_alignment(alignment, params),
        line_height: size * params.scale.pixel_per_point * params.text_line_height,
    }
}

fn font_string(font: Option<&FontSpec>, size: f64, params: &DrawParams) -> String {
    let italic = if font.and_then(|f| f.italic).unwrap_or(false) {
        "italic "
    } else {
        ""
    };
    let bold = if font.and_then(|f| f.bold).unwrap_or(false) {
        "bold "
    } else {
        ""
    };
    let name = font
        .and_then(|f| f.name.as_deref())
        .unwrap_or(&params.text_fallback_font_family_name);
    let generic = match font.and_then(|f| f.family) {
        Some(1) => " serif",
        Some(2) => " sans-serif",
        Some(3) => " monospace",
        _ => "",
    };
    let px = size * params.scale.pixel_per_point;

    format!("{italic}{bold}{px}px {name}{generic}")
}

fn lower_alignment(alignment: Option<&AlignmentSpec>, params: &DrawParams) -> Alignment {
    let fallback = &params.text_fallback_alignment;

    let horizontal = alignment
        .and_then(|a| a.horizontal.as_deref())
        .filter(|h| HORIZONTAL_ALIGNMENTS.contains(h))
        .unwrap_or(&fallback.horizontal)
        .to_string();
    let vertical = alignment
        .and_then(|a| a.vertical.as_deref())
        .filter(|v| VERTICAL_ALIGNMENTS.contains(v))
        .unwrap_or(&fallback.vertical)
        .to_string();

    Alignment {
        horizontal,
        vertical,
        wrap_text: alignment
            .and_then(|a| a.wrap_text)
            .unwrap_or(fallback.wrap_text),
        shrink_to_fit: alignment
            .and_then(|a| a.shrink_to_fit)
            .unwrap_or(fallback.shrink_to_fit),
        indent: alignment.and_then(|a| a.indent).unwrap_or(fallback.indent),
        text_direction: alignment
            .and_then(|a| a.text_direction.clone())
            .unwrap_or_else(|| fallback.text_direction.clone()),
        text_rotation: alignment
            .and_then(|a| a.text_rotation)
            .unwrap_or(fallback.text_rotation),
    }
}
