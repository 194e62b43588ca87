//! Line-level records produced by the aggregator.

use super::StyleKey;

/// One physical text line on one page, reduced to a single dominant style.
///
/// Records are derived in one pass per document and never mutated
/// afterwards. The vertical position is used only for ordering, never for
/// classification.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// Concatenated, trimmed text of all spans in the line
    pub text: String,
    /// The line's dominant style
    pub style: StyleKey,
    /// 1-based page number
    pub page: u32,
    /// Top-edge vertical coordinate in top-down page space
    pub y: f32,
    /// Number of whitespace-separated words in `text`
    pub word_count: usize,
}

impl LineRecord {
    /// Create a record, deriving the word count from the text.
    pub fn new(text: impl Into<String>, style: StyleKey, page: u32, y: f32) -> Self {
        let text = text.into();
        let word_count = text.split_whitespace().count();
        Self {
            text,
            style,
            page,
            y,
            word_count,
        }
    }
}
