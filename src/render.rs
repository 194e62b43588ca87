//! JSON output for inferred outlines.

use crate::error::{Error, Result};
use crate::model::{OutlineDocument, SectionChunk};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an outline document to JSON.
///
/// Key names and their order (`title` before `outline`; `level`, `text`,
/// `page` per heading) are part of the output contract.
pub fn to_json(doc: &OutlineDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize section chunks to JSON.
pub fn chunks_to_json(chunks: &[SectionChunk], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(chunks),
        JsonFormat::Compact => serde_json::to_string(chunks),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
