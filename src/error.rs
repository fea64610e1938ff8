//! Structured error types for sheetview.
//!
//! Per-item problems during a draw (malformed references, missing images,
//! unreadable cell text) are handled by skipping, not by error values; this
//! enum covers the failures that abort a draw or make the renderer unusable.

/// All errors that can occur while setting up or running a draw.
#[derive(Debug, thiserror::Error)]
pub enum SheetviewError {
    /// The shared text-measurement surface could not be created.
    /// Raised once; the renderer cannot be used without it.
    #[error("Measurement surface init failed: {0}")]
    MeasureSurface(String),

    /// The target canvas did not yield a 2d context.
    #[error("Canvas context: {0}")]
    Context(String),

    /// A drawing operation on the raster surface failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetviewError>;

impl From<String> for SheetviewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SheetviewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for SheetviewError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        let msg = v.as_string().unwrap_or_else(|| format!("{v:?}"));
        Self::Render(msg)
    }
}

impl From<SheetviewError> for wasm_bindgen::JsValue {
    fn from(e: SheetviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
