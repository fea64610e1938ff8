//! Anchor and image-rect resolution.
//!
//! Embedded images are positioned by cell anchors with EMU offsets, or by a
//! plain range reference. An anchor names a cell corner; the top-left anchor
//! is shifted by +1 on both axes so it refers to the cell whose leading edge
//! is the anchored point.

use crate::cell_ref::{parse_cell_range, CellPos};
use crate::types::{AnchorSpec, ImagePlacement, SheetRow};
use crate::units::{Rect, Scale};

use super::SheetLayout;

/// An anchor lowered to canvas terms: a cell number plus pixel offsets
/// inside that cell.
#[derive(Debug, Clone, Copy)]
pub struct CanvasAnchor {
    pub col: u32,
    pub row: u32,
    pub pixel_offset_x: f64,
    pub pixel_offset_y: f64,
}

impl CanvasAnchor {
    /// Lower a bottom-right anchor: cell indices carried over as-is.
    pub fn bottom_right(spec: &AnchorSpec, scale: &Scale) -> Self {
        Self {
            col: spec.col,
            row: spec.row,
            pixel_offset_x: scale.emu_to_px(spec.col_off_emu),
            pixel_offset_y: scale.emu_to_px(spec.row_off_emu),
        }
    }

    /// Lower a top-left anchor: both indices incremented so the anchor
    /// refers to the cell to the right of/below the anchored corner.
    pub fn top_left(spec: &AnchorSpec, scale: &Scale) -> Self {
        Self {
            col: spec.col + 1,
            row: spec.row + 1,
            pixel_offset_x: scale.emu_to_px(spec.col_off_emu),
            pixel_offset_y: scale.emu_to_px(spec.row_off_emu),
        }
    }

    /// The anchored cell's rect shifted by the pixel offsets. `None` when
    /// the cell is hidden or out of range.
    pub fn resolve<R: SheetRow>(&self, layout: &SheetLayout<R>) -> Option<Rect> {
        let rect = layout.single_cell_rect(CellPos {
            col: self.col,
            row: self.row,
        })?;
        Some(Rect::new(
            rect.x + self.pixel_offset_x,
            rect.y + self.pixel_offset_y,
            rect.width,
            rect.height,
        ))
    }
}

/// Resolve an image placement to its canvas rect. `None` means the image is
/// skipped for this draw.
pub fn image_rect<R: SheetRow>(
    placement: &ImagePlacement,
    layout: &SheetLayout<R>,
    scale: &Scale,
) -> Option<Rect> {
    match placement {
        ImagePlacement::Range(range_ref) => {
            let range = parse_cell_range(range_ref)?;
            layout.range_rect(&range)
        }
        ImagePlacement::Anchored { tl, br, ext } => {
            let tl = tl
                .as_ref()
                .and_then(|spec| CanvasAnchor::top_left(spec, scale).resolve(layout));
            let br = br
                .as_ref()
                .and_then(|spec| CanvasAnchor::bottom_right(spec, scale).resolve(layout));

            match (tl, br) {
                (Some(tl), Some(br)) => Some(Rect::span(&tl, &br)),
                (Some(tl), None) => match ext {
                    Some(ext) => Some(Rect::new(
                        tl.x,
                        tl.y,
                        scale.ext_to_px(ext.width),
                        scale.ext_to_px(ext.height),
                    )),
                    None => Some(tl),
                },
                (None, Some(br)) => match ext {
                    Some(ext) => {
                        // Anchored by the bottom-right corner; the rect
                        // extends up and to the left.
                        let width = scale.ext_to_px(ext.width);
                        let height = scale.ext_to_px(ext.height);
                        Some(Rect::new(br.x - width, br.y - height, width, height))
                    }
                    None => Some(br),
                },
                (None, None) => None,
            }
        }
    }
}
