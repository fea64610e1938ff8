//! Configuration surface: defaults and overrides for scale, colors and
//! fallbacks.
//!
//! Every field has a default, so `RenderOptions::default()` is a complete
//! configuration; callers override individual fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::BorderStyle;

/// All knobs recognised by the renderer.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Points per character unit of the document's reference font.
    pub character_unit: f64,
    /// Raster density; `pixel_per_point = dpi / 72`.
    pub dpi: f64,

    /// Border color when a side declares none.
    pub border_fallback_color: String,
    /// Border style when a side declares none.
    pub border_fallback_style: BorderStyle,
    /// Per-style line widths in points.
    pub border_point_width_map: HashMap<BorderStyle, f64>,
    /// Per-style dash patterns in points; absent or empty means solid.
    pub border_point_segments_map: HashMap<BorderStyle, Vec<f64>>,

    pub text_fallback_color: String,
    pub text_fallback_font_family_name: String,
    /// Points.
    pub text_fallback_font_size: f64,
    pub text_fallback_alignment_horizontal: String,
    pub text_fallback_alignment_vertical: String,
    pub text_fallback_alignment_wrap_text: bool,
    pub text_fallback_alignment_shrink_to_fit: bool,
    pub text_fallback_alignment_indent: u32,
    pub text_fallback_alignment_text_direction: String,
    pub text_fallback_alignment_text_rotation: i32,
    /// Line height as a multiple of the font size.
    pub text_line_height: f64,

    pub background_color: String,
    /// Column width in character units when neither the column nor the sheet
    /// declares one.
    pub fallback_col_char_unit_width: f64,
    /// Inset between the cell rect and its text, in points.
    pub cell_point_padding: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            character_unit: 5.85,
            dpi: 192.0,
            border_fallback_color: "lightgray".to_string(),
            border_fallback_style: BorderStyle::None,
            border_point_width_map: default_border_widths(),
            border_point_segments_map: default_border_segments(),
            text_fallback_color: "black".to_string(),
            text_fallback_font_family_name: "Arial".to_string(),
            text_fallback_font_size: 10.0,
            text_fallback_alignment_horizontal: "left".to_string(),
            text_fallback_alignment_vertical: "bottom".to_string(),
            text_fallback_alignment_wrap_text: false,
            text_fallback_alignment_shrink_to_fit: false,
            text_fallback_alignment_indent: 0,
            text_fallback_alignment_text_direction: "inherit".to_string(),
            text_fallback_alignment_text_rotation: 0,
            text_line_height: 1.2,
            background_color: "white".to_string(),
            fallback_col_char_unit_width: 13.0,
            cell_point_padding: 2.0,
        }
    }
}

fn default_border_widths() -> HashMap<BorderStyle, f64> {
    let mut map = HashMap::new();
    map.insert(BorderStyle::Hair, 0.5);
    map.insert(BorderStyle::Thin, 1.0);
    map.insert(BorderStyle::Double, 1.0);
    map.insert(BorderStyle::Dotted, 1.0);
    map.insert(BorderStyle::Dashed, 1.0);
    map.insert(BorderStyle::DashDot, 1.0);
    map.insert(BorderStyle::DashDotDot, 1.0);
    map.insert(BorderStyle::Medium, 2.0);
    map.insert(BorderStyle::MediumDashDot, 2.0);
    map.insert(BorderStyle::MediumDashDotDot, 2.0);
    map.insert(BorderStyle::MediumDashed, 2.0);
    map.insert(BorderStyle::SlantDashDot, 2.0);
    map.insert(BorderStyle::Thick, 3.0);
    map
}

fn default_border_segments() -> HashMap<BorderStyle, Vec<f64>> {
    let mut map = HashMap::new();
    map.insert(BorderStyle::DashDot, vec![4.0, 2.0, 2.0, 2.0]);
    map.insert(BorderStyle::MediumDashDot, vec![4.0, 2.0, 2.0, 2.0]);
    map.insert(BorderStyle::SlantDashDot, vec![4.0, 2.0, 2.0, 2.0]);
    map.insert(BorderStyle::DashDotDot, vec![4.0, 2.0, 2.0, 2.0, 2.0, 2.0]);
    map.insert(
        BorderStyle::MediumDashDotDot,
        vec![4.0, 2.0, 2.0, 2.0, 2.0, 2.0],
    );
    map.insert(BorderStyle::Dashed, vec![4.0]);
    map.insert(BorderStyle::MediumDashed, vec![4.0]);
    map.insert(BorderStyle::Dotted, vec![2.0]);
    map
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.character_unit, 5.85);
        assert_eq!(opts.dpi, 192.0);
        assert_eq!(opts.border_fallback_color, "lightgray");
        assert_eq!(opts.border_fallback_style, BorderStyle::None);
        assert_eq!(opts.text_fallback_font_size, 10.0);
        assert_eq!(opts.text_fallback_alignment_horizontal, "left");
        assert_eq!(opts.text_fallback_alignment_vertical, "bottom");
        assert_eq!(opts.text_line_height, 1.2);
        assert_eq!(opts.background_color, "white");
        assert_eq!(opts.fallback_col_char_unit_width, 13.0);
        assert_eq!(opts.cell_point_padding, 2.0);
    }

    #[test]
    fn test_width_map_covers_all_drawn_styles() {
        let opts = RenderOptions::default();
        for style in BorderStyle::DRAWN {
            assert!(
                opts.border_point_width_map.contains_key(&style),
                "missing width for {style:?}"
            );
        }
    }

    #[test]
    fn test_segment_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(
            opts.border_point_segments_map[&BorderStyle::Dashed],
            vec![4.0]
        );
        assert_eq!(
            opts.border_point_segments_map[&BorderStyle::Dotted],
            vec![2.0]
        );
        assert_eq!(
            opts.border_point_segments_map[&BorderStyle::DashDotDot],
            vec![4.0, 2.0, 2.0, 2.0, 2.0, 2.0]
        );
        // Solid styles carry no entry.
        assert!(!opts
            .border_point_segments_map
            .contains_key(&BorderStyle::Thin));
    }
}
