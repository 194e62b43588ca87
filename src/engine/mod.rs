//! The style-based outline inference engine.
//!
//! Converts flat per-line typography records into a ranked heading
//! hierarchy using only statistical regularities: the most common style
//! is assumed to be body text, the title is the largest line on page 1,
//! and heading levels are ranked against a detected H1 reference style.
//!
//! Processing is a single forward pass (aggregation, statistics, title
//! selection, candidate filtering, level classification, assembly) over
//! immutable records. The engine is single-threaded, synchronous, and
//! deterministic: every tie breaks toward the first-seen value, so
//! identical input always yields byte-identical output. Nothing persists
//! across documents, which is what lets the batch driver fan documents
//! out across threads without locking.

mod aggregate;
mod assemble;
mod classify;
mod config;
mod sections;
mod stats;
mod title;

pub use aggregate::collect_lines;
pub use classify::is_numbered_top_level;
pub use config::EngineConfig;
pub use sections::chunk_sections;
pub use stats::{body_style, StyleCensus};
pub use title::select_title;

use crate::decode::PageText;
use crate::model::{LineRecord, OutlineDocument};

/// Infer a document outline from decoded page content.
pub fn infer_outline(pages: &[PageText], config: &EngineConfig) -> OutlineDocument {
    let lines = collect_lines(pages);
    outline_from_lines(&lines, config)
}

/// Infer an outline from pre-aggregated line records.
pub fn outline_from_lines(lines: &[LineRecord], config: &EngineConfig) -> OutlineDocument {
    if lines.is_empty() {
        return OutlineDocument::empty();
    }

    let body = match body_style(lines) {
        Some(style) => style,
        None => return OutlineDocument::empty(),
    };
    log::debug!("body style: {}", body);

    let title = select_title(lines).unwrap_or_else(|| OutlineDocument::UNTITLED.to_string());

    let candidates = classify::heading_candidates(lines, body, &title);
    let h1 = match classify::detect_h1_style(&candidates) {
        Some(style) => style,
        None => return OutlineDocument::with_title(title),
    };

    let groups = classify::group_by_style(&candidates, config);
    let levels = classify::rank_levels(&groups, h1);
    let outline = assemble::assemble(&groups, &levels);
    log::debug!("{} headings across {} styles", outline.len(), levels.len());

    OutlineDocument { title, outline }
}
