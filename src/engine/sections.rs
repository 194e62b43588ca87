//! Section chunking over the inferred outline.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::{LineRecord, OutlineDocument, SectionChunk};

/// Attribute every line to its enclosing section.
///
/// Walks the lines in reading order and switches the current section
/// whenever a line matches an outline heading by text and page. Lines
/// before the first heading fall under `default_title`.
pub fn chunk_sections(
    lines: &[LineRecord],
    outline: &OutlineDocument,
    default_title: &str,
) -> Vec<SectionChunk> {
    let heading_keys: HashSet<(u32, &str)> = outline
        .outline
        .iter()
        .map(|h| (h.page, h.text.as_str()))
        .collect();

    let mut ordered: Vec<&LineRecord> = lines.iter().collect();
    ordered.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    let mut current = default_title.to_string();
    let mut chunks = Vec::with_capacity(ordered.len());
    for line in ordered {
        if heading_keys.contains(&(line.page, line.text.as_str())) {
            current = line.text.clone();
        }
        chunks.push(SectionChunk {
            section_title: current.clone(),
            page: line.page,
            text: line.text.clone(),
        });
    }

    chunks
}
