use serde::{Deserialize, Serialize};

/// Border line styles, per ECMA-376.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    #[default]
    None,
    Hair,
    Thin,
    Double,
    Dotted,
    Dashed,
    DashDot,
    DashDotDot,
    Medium,
    MediumDashDot,
    MediumDashDotDot,
    MediumDashed,
    SlantDashDot,
    Thick,
}

impl BorderStyle {
    /// All styles that actually draw a line (everything but `None`).
    pub const DRAWN: [BorderStyle; 13] = [
        BorderStyle::Hair,
        BorderStyle::Thin,
        BorderStyle::Double,
        BorderStyle::Dotted,
        BorderStyle::Dashed,
        BorderStyle::DashDot,
        BorderStyle::DashDotDot,
        BorderStyle::Medium,
        BorderStyle::MediumDashDot,
        BorderStyle::MediumDashDotDot,
        BorderStyle::MediumDashed,
        BorderStyle::SlantDashDot,
        BorderStyle::Thick,
    ];
}

/// One side of a cell border as declared in the workbook.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BorderSide {
    /// Line style; absent means the side inherits the configured fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    /// ARGB hex color without `#` (e.g. "FF0080C0").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The four directional borders of a cell.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Borders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderSide>,
}

/// Cell fill as declared in the workbook. Only pattern fills carry a color
/// the renderer uses; any other type falls back to the canvas background.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Fill type, e.g. "pattern" or "gradient".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_type: Option<String>,
    /// Pattern background color, ARGB hex without `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

/// Font attributes as declared in the workbook.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Font family class: 1 = serif, 2 = sans-serif, 3 = monospace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<u32>,
    /// Size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// ARGB hex color without `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Cell alignment attributes as declared in the workbook.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrink_to_fit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_direction: Option<String>,
    /// Rotation in degrees; recorded but not applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_rotation: Option<i32>,
}

/// Per-sheet defaults.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    /// Default column width in character units; absent means the configured
    /// fallback applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_col_width: Option<f64>,
    /// Default row height in points.
    pub default_row_height: f64,
}

/// Declared properties of one column.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProperties {
    pub number: u32,
    /// Width in character units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub collapsed: bool,
}
