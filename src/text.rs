//! Text measurement and line breaking.
//!
//! Widths come from a process-wide measurement surface: an `OffscreenCanvas`
//! 2D context that is never displayed. The breaking algorithm itself is
//! generic over a [`TextMeasurer`] so it can run against a fake measurer in
//! native tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use wasm_bindgen::JsCast;
use web_sys::{OffscreenCanvas, OffscreenCanvasRenderingContext2d};

use crate::error::{Result, SheetviewError};

/// Measures the advance width of `text` rendered with the CSS `font`.
pub trait TextMeasurer {
    fn measure(&mut self, font: &str, text: &str) -> f64;
}

/// The shared measurement surface. One per process, created lazily on first
/// use and reused for the lifetime of the renderer.
pub struct MeasureSurface {
    ctx: OffscreenCanvasRenderingContext2d,
    last_font: String,
}

impl MeasureSurface {
    fn create() -> Result<Self> {
        let canvas = OffscreenCanvas::new(1, 1)
            .map_err(|e| SheetviewError::MeasureSurface(format!("{e:?}")))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SheetviewError::MeasureSurface(format!("{e:?}")))?
            .ok_or_else(|| SheetviewError::MeasureSurface("no 2d context".to_string()))?
            .dyn_into::<OffscreenCanvasRenderingContext2d>()
            .map_err(|_| {
                SheetviewError::MeasureSurface("context is not 2d".to_string())
            })?;

        Ok(Self {
            ctx,
            last_font: String::new(),
        })
    }
}

impl TextMeasurer for MeasureSurface {
    fn measure(&mut self, font: &str, text: &str) -> f64 {
        if font != self.last_font {
            self.ctx.set_font(font);
            self.last_font.clear();
            self.last_font.push_str(font);
        }
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }
}

thread_local! {
    static SURFACE: RefCell<Option<MeasureSurface>> = const { RefCell::new(None) };
}

/// Run `f` against the process-wide measurement surface, creating it on
/// first use. Fails only if the surface cannot be created; the renderer is
/// unusable in that case.
pub fn with_measurer<T>(f: impl FnOnce(&mut MeasureSurface) -> T) -> Result<T> {
    SURFACE.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(MeasureSurface::create()?);
        }
        match slot.as_mut() {
            Some(surface) => Ok(f(surface)),
            None => Err(SheetviewError::MeasureSurface(
                "surface unavailable".to_string(),
            )),
        }
    })
}

/// Break a cell value into the lines to draw.
///
/// The value is split on `\n` into hard lines. Without wrapping those are
/// returned verbatim. With wrapping, each hard line is tokenised (a token
/// ends at each whitespace or other non-word character) and tokens are
/// greedily packed into soft lines against `width`; a token too wide for an
/// empty line is re-queued as individual characters.
pub fn break_lines<M: TextMeasurer>(
    measurer: &mut M,
    font: &str,
    value: &str,
    width: f64,
    wrap: bool,
) -> Vec<String> {
    let hard_lines = value.split('\n');
    if !wrap {
        return hard_lines.map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for hard_line in hard_lines {
        wrap_hard_line(measurer, font, hard_line, width, &mut lines);
    }
    lines
}

fn wrap_hard_line<M: TextMeasurer>(
    measurer: &mut M,
    font: &str,
    hard_line: &str,
    width: f64,
    lines: &mut Vec<String>,
) {
    let mut queue: VecDeque<String> = tokenize(hard_line).map(str::to_string).collect();
    let emitted = lines.len();
    let mut current = String::new();

    while let Some(token) = queue.pop_front() {
        let mut candidate = current.clone();
        candidate.push_str(&token);

        if measurer.measure(font, &candidate) >= width {
            if current.is_empty() {
                if token.chars().count() > 1 {
                    // Token alone overflows an empty line: splice its
                    // characters back in and repack them.
                    for ch in token.chars().rev() {
                        queue.push_front(ch.to_string());
                    }
                } else {
                    // A single character wider than the line still gets
                    // drawn; it is never dropped.
                    current = candidate;
                }
            } else {
                lines.push(std::mem::take(&mut current));
                current = token;
            }
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() || lines.len() == emitted {
        lines.push(current);
    }
}

/// Split a line after every non-word character, keeping the separator at
/// the end of the preceding token ("alpha beta" -> ["alpha ", "beta"]).
fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, c) in line.char_indices() {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            let end = i + c.len_utf8();
            tokens.push(&line[start..end]);
            start = end;
        }
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }
    tokens.into_iter()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    /// Fake measurer: every character is 10px wide regardless of font.
    struct CharWidth;

    impl TextMeasurer for CharWidth {
        fn measure(&mut self, _font: &str, text: &str) -> f64 {
            text.chars().count() as f64 * 10.0
        }
    }

    const FONT: &str = "10px Arial";

    #[test]
    fn test_tokenize_keeps_separators() {
        let tokens: Vec<&str> = tokenize("alpha beta gamma").collect();
        assert_eq!(tokens, vec!["alpha ", "beta ", "gamma"]);

        let tokens: Vec<&str> = tokenize("a-b_c").collect();
        assert_eq!(tokens, vec!["a-", "b_c"]);

        let tokens: Vec<&str> = tokenize("word").collect();
        assert_eq!(tokens, vec!["word"]);

        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_no_wrap_returns_hard_lines() {
        let lines = break_lines(&mut CharWidth, FONT, "one\ntwo three\n", 1.0, false);
        assert_eq!(lines, vec!["one", "two three", ""]);
    }

    #[test]
    fn test_wrap_two_tokens_per_line() {
        // Two tokens fit ("alpha beta " = 11 chars); appending the next
        // crosses the limit.
        let lines = break_lines(&mut CharWidth, FONT, "alpha beta gamma", 120.0, true);
        assert_eq!(lines, vec!["alpha beta ", "gamma"]);
    }

    #[test]
    fn test_wrap_one_token_per_line() {
        let lines = break_lines(&mut CharWidth, FONT, "alpha beta gamma", 70.0, true);
        assert_eq!(lines, vec!["alpha ", "beta ", "gamma"]);
    }

    #[test]
    fn test_wrap_breaks_long_word_into_characters() {
        // Width of 3 chars; a 8-char word must split into ceil(8/3) pieces
        // of at most 2 chars (a 3-char piece measures 30 >= 30).
        let lines = break_lines(&mut CharWidth, FONT, "abcdefgh", 30.0, true);
        assert_eq!(lines, vec!["ab", "cd", "ef", "gh"]);
        let total: String = lines.concat();
        assert_eq!(total, "abcdefgh");
    }

    #[test]
    fn test_wrap_single_char_wider_than_line() {
        // Nothing fits, but characters are still emitted one per line.
        let lines = break_lines(&mut CharWidth, FONT, "xy", 5.0, true);
        assert_eq!(lines, vec!["x", "y"]);
    }

    #[test]
    fn test_wrap_preserves_empty_hard_lines() {
        let lines = break_lines(&mut CharWidth, FONT, "a\n\nb", 100.0, true);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_mixed_hard_and_soft() {
        let lines = break_lines(&mut CharWidth, FONT, "one two\nthree", 45.0, true);
        assert_eq!(lines, vec!["one ", "two", "three"]);
    }
}
