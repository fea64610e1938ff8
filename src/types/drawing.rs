use serde::{Deserialize, Serialize};

/// Image bytes as stored in the workbook model.
#[derive(Debug, Clone)]
pub enum ImageData {
    Buffer(Vec<u8>),
    Base64(String),
}

/// One anchored corner of an embedded drawing: a 0-based cell index plus an
/// EMU offset inside that cell.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnchorSpec {
    pub col: u32,
    pub row: u32,
    #[serde(default)]
    pub col_off_emu: i64,
    #[serde(default)]
    pub row_off_emu: i64,
}

/// Declared extent of a one-anchor drawing, in 96-DPI pixels.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Where an image sits on the sheet: either a textual range reference or an
/// anchor record with up to two corners and an optional extent.
#[derive(Debug, Clone)]
pub enum ImagePlacement {
    Range(String),
    Anchored {
        tl: Option<AnchorSpec>,
        br: Option<AnchorSpec>,
        ext: Option<Extent>,
    },
}

/// An image reference attached to a worksheet.
#[derive(Debug, Clone)]
pub struct SheetImage {
    pub image_id: u32,
    pub placement: ImagePlacement,
}

/// Image format detection from magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Webp,
    Unknown,
}

impl ImageFormat {
    /// Detect image format from magic bytes.
    #[must_use]
    pub fn from_magic_bytes(data: &[u8]) -> Self {
        if data.len() < 4 {
            return Self::Unknown;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Self::Png;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Self::Jpeg;
        }

        // GIF: GIF87a or GIF89a
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Self::Gif;
        }

        // BMP: BM
        if data.starts_with(b"BM") {
            return Self::Bmp;
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && data.starts_with(b"RIFF") && data.get(8..12) == Some(b"WEBP") {
            return Self::Webp;
        }

        Self::Unknown
    }

    /// MIME type for `createImageBitmap`.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Webp => "image/webp",
            Self::Unknown => "application/octet-stream",
        }
    }
}
