//! Heading candidate filtering and level classification.
//!
//! Classification works over two progressively filtered candidate sets.
//! The broad set (style differs from body, text differs from title) votes
//! for the H1 reference style, so a long numbered heading still counts
//! even when the shape filter would prune it. The narrow set (short,
//! not sentence-terminated) is what actually gets grouped into levels.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{HeadingLevel, LineRecord, StyleKey};

use super::config::EngineConfig;
use super::stats::StyleCensus;

/// Numbered top-level heading: digits, a period, then whitespace or an
/// uppercase letter ("3. Introduction").
static NUMBERED_TOP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.[\sA-Z]").unwrap());

/// Sub-numbered heading ("3.1 Overview"), excluded from top-level votes.
static NUMBERED_SUB: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+").unwrap());

/// The broad candidate set: every line whose style differs from the body
/// style and whose text differs from the title.
///
/// Title exclusion is exact string equality, so a running header that
/// repeats the title text elsewhere in the document is excluded too.
pub fn heading_candidates<'a>(
    lines: &'a [LineRecord],
    body: StyleKey,
    title: &str,
) -> Vec<&'a LineRecord> {
    lines
        .iter()
        .filter(|l| l.style != body && l.text != title)
        .collect()
}

/// Whether a line looks like a numbered top-level heading.
pub fn is_numbered_top_level(text: &str) -> bool {
    NUMBERED_TOP.is_match(text) && !NUMBERED_SUB.is_match(text)
}

/// Phase A: establish the H1 reference style.
///
/// Numbered top-level candidates are the stronger signal and take
/// precedence: when any exist, the majority style among them wins even if
/// a different style is more frequent overall. Otherwise the most
/// frequent candidate style is used. Returns `None` only when there are
/// no candidates at all.
pub fn detect_h1_style(candidates: &[&LineRecord]) -> Option<StyleKey> {
    let mut numbered = StyleCensus::new();
    for line in candidates {
        if is_numbered_top_level(&line.text) {
            numbered.observe(line.style);
        }
    }
    if let Some(style) = numbered.most_common() {
        log::debug!("h1 style {} chosen by numbered-heading vote", style);
        return Some(style);
    }

    let mut all = StyleCensus::new();
    for line in candidates {
        all.observe(line.style);
    }
    all.most_common()
}

/// Group the candidates that keep heading shape (short, not
/// sentence-terminated) by style, insertion-ordered.
///
/// Pruned lines are discarded permanently: a body-like heading sentence
/// ending in a period is never promoted, even if its style earns a level
/// elsewhere in the document.
pub fn group_by_style<'a>(
    candidates: &[&'a LineRecord],
    config: &EngineConfig,
) -> IndexMap<StyleKey, Vec<&'a LineRecord>> {
    let mut groups: IndexMap<StyleKey, Vec<&'a LineRecord>> = IndexMap::new();
    for &line in candidates {
        if line.word_count < config.max_heading_words && !config.ends_like_sentence(&line.text) {
            groups.entry(line.style).or_default().push(line);
        }
    }
    groups
}

/// Phase B: rank style groups against the H1 reference size.
///
/// Every group at or above the H1 size is H1; oversized decorative text
/// is promoted rather than given a level above the top. The two largest
/// remaining groups become H2 and H3; anything smaller is dropped, so
/// the outline never carries more than three levels.
pub fn rank_levels(
    groups: &IndexMap<StyleKey, Vec<&LineRecord>>,
    h1: StyleKey,
) -> IndexMap<StyleKey, HeadingLevel> {
    let mut levels = IndexMap::new();

    for &style in groups.keys() {
        if style.size >= h1.size {
            levels.insert(style, HeadingLevel::H1);
        }
    }

    let mut subordinate: Vec<StyleKey> = groups
        .keys()
        .copied()
        .filter(|s| s.size < h1.size)
        .collect();
    subordinate.sort_by(|a, b| b.size.cmp(&a.size));

    if let Some(&style) = subordinate.first() {
        levels.insert(style, HeadingLevel::H2);
    }
    if let Some(&style) = subordinate.get(1) {
        levels.insert(style, HeadingLevel::H3);
    }

    levels
}
