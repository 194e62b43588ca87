//! Public outline types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Heading rank. The model supports exactly three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// The wire representation used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inferred heading.
///
/// The hierarchy is flat: headings are ordered by document position and
/// the level is metadata only. An H3 may appear without a preceding H2;
/// no nesting consistency is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading rank
    pub level: HeadingLevel,
    /// Heading text
    pub text: String,
    /// 1-based page number
    pub page: u32,
}

/// The inferred outline for one document.
///
/// Created once per input document and immutable after construction.
/// Field order matters: consumers of the JSON output depend on `title`
/// preceding `outline` and on these exact key names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineDocument {
    /// Document title
    pub title: String,
    /// Headings in reading order
    pub outline: Vec<Heading>,
}

impl OutlineDocument {
    /// Sentinel title for documents with no extractable text lines.
    pub const EMPTY_TITLE: &'static str = "Empty Document";

    /// Fallback title when page 1 has no lines.
    pub const UNTITLED: &'static str = "Untitled Document";

    /// The sentinel result for an empty document.
    pub fn empty() -> Self {
        Self {
            title: Self::EMPTY_TITLE.to_string(),
            outline: Vec::new(),
        }
    }

    /// A document with a title but no headings.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outline: Vec::new(),
        }
    }

    /// Check if the outline has no headings.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Number of headings in the outline.
    pub fn len(&self) -> usize {
        self.outline.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serialization() {
        let heading = Heading {
            level: HeadingLevel::H2,
            text: "Background".to_string(),
            page: 3,
        };
        let json = serde_json::to_string(&heading).unwrap();
        assert_eq!(json, r#"{"level":"H2","text":"Background","page":3}"#);
    }

    #[test]
    fn test_empty_sentinel() {
        let doc = OutlineDocument::empty();
        assert_eq!(doc.title, "Empty Document");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_field_order() {
        let doc = OutlineDocument::with_title("Report");
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"title":"Report","outline":[]}"#);
    }
}
