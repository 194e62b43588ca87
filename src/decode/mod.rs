//! Page-content decoding.
//!
//! This module is the engine's upstream collaborator: it turns a PDF into
//! a flat stream of per-page text lines with font metadata. The engine
//! only reads those records; it is not responsible for opening, decoding,
//! or closing the source document.

mod content;
mod span;

pub use content::LopdfSource;
pub use span::{PageText, RawLine, Span, FLAG_BOLD, FLAG_ITALIC};

use crate::error::Result;

/// Source of decoded per-page text content.
///
/// Implementations isolate the concrete PDF library from the inference
/// engine, which consumes plain [`PageText`] records.
pub trait PageSource {
    /// Decode all pages in document order.
    fn pages(&self) -> Result<Vec<PageText>>;
}
