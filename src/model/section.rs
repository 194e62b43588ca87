//! Section chunks derived from the inferred outline.

use serde::{Deserialize, Serialize};

/// One line of text attributed to its enclosing section.
///
/// Chunks are the handoff format for downstream relevance pipelines that
/// aggregate text by section; the engine only provides the structural
/// attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionChunk {
    /// Title of the most recent heading at or before this line
    pub section_title: String,
    /// 1-based page number
    pub page: u32,
    /// Line text
    pub text: String,
}
