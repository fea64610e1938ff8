//! Image compositing: decode embedded image bytes and draw them stretched
//! to their resolved rects.
//!
//! All bitmap decodes are launched up front so they run concurrently; the
//! draw completes once every one has settled. A generation counter guards
//! against a newer draw on the same renderer: stale bitmaps are closed and
//! discarded instead of being painted over the fresh frame.

use std::cell::Cell;
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, CanvasRenderingContext2d, ImageBitmap};

use crate::error::Result;
use crate::layout::{image_rect, SheetLayout};
use crate::types::{ImageData, ImageFormat, Workbook, Worksheet};
use crate::units::{Rect, Scale};

/// Draw every image of `sheet`. Cells are already painted at this point;
/// this is the only part of a draw that suspends.
pub async fn draw_images<W, S>(
    ctx: &CanvasRenderingContext2d,
    workbook: &W,
    sheet: &S,
    layout: &SheetLayout<S::Row>,
    scale: &Scale,
    generation: &Rc<Cell<u64>>,
    drawn_generation: u64,
) -> Result<()>
where
    W: Workbook,
    S: Worksheet,
{
    // Launch all decodes first; awaiting happens after every bitmap is
    // already in flight.
    let mut pending: Vec<(Rect, JsFuture)> = Vec::new();
    for image in sheet.images() {
        let Some(rect) = image_rect(&image.placement, layout, scale) else {
            continue;
        };
        let Some(data) = workbook.image(image.image_id) else {
            continue;
        };
        let Some(promise) = decode_bitmap(&data) else {
            continue;
        };
        pending.push((rect, JsFuture::from(promise)));
    }

    for (rect, future) in pending {
        let bitmap: ImageBitmap = future.await?.unchecked_into();
        if generation.get() != drawn_generation {
            // A newer draw started while decoding; this frame is stale.
            bitmap.close();
            continue;
        }
        let drawn = ctx.draw_image_with_image_bitmap_and_dw_and_dh(
            &bitmap,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        );
        bitmap.close();
        drawn?;
    }

    Ok(())
}

/// Start decoding image bytes into a bitmap. `None` skips the image:
/// undecodable base64 or unrecognised magic bytes.
fn decode_bitmap(data: &ImageData) -> Option<Promise> {
    let bytes: Vec<u8> = match data {
        ImageData::Buffer(buffer) => buffer.clone(),
        ImageData::Base64(encoded) => BASE64.decode(encoded).ok()?,
    };

    let format = ImageFormat::from_magic_bytes(&bytes);
    if format == ImageFormat::Unknown {
        return None;
    }

    let parts = Array::of1(&Uint8Array::from(bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(format.mime_type());
    let blob = Blob::new_with_u8_array_sequence_and_options(parts.as_ref(), &options).ok()?;

    web_sys::window()?.create_image_bitmap_with_blob(&blob).ok()
}
