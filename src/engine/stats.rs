//! Style frequency statistics.

use indexmap::IndexMap;

use crate::model::{LineRecord, StyleKey};

/// Insertion-ordered frequency table over style keys.
///
/// Iteration order is first-seen order, which makes every majority pick
/// deterministic: ties resolve to the style observed earliest. All
/// style grouping in the engine goes through this table rather than an
/// unordered map.
#[derive(Debug, Clone, Default)]
pub struct StyleCensus {
    counts: IndexMap<StyleKey, usize>,
}

impl StyleCensus {
    /// Create an empty census.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a style.
    pub fn observe(&mut self, style: StyleKey) {
        self.add(style, 1);
    }

    /// Count a weighted occurrence, e.g. by character length.
    pub fn add(&mut self, style: StyleKey, weight: usize) {
        *self.counts.entry(style).or_insert(0) += weight;
    }

    /// The highest-count style; first-seen wins ties.
    pub fn most_common(&self) -> Option<StyleKey> {
        let mut best: Option<(StyleKey, usize)> = None;
        for (&style, &count) in &self.counts {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((style, count)),
            }
        }
        best.map(|(style, _)| style)
    }

    /// Whether no styles have been observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct styles observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Census over each line's dominant style, counted once per line.
    pub fn of_lines(lines: &[LineRecord]) -> Self {
        let mut census = Self::new();
        for line in lines {
            census.observe(line.style);
        }
        census
    }
}

/// The document's body style: the most frequent dominant style across all
/// lines, each line counted once.
///
/// This is the load-bearing assumption of the whole engine: paragraph
/// text is the most common visual class in a normal document, and every
/// style that differs from it is a candidate heading or decoration.
pub fn body_style(lines: &[LineRecord]) -> Option<StyleKey> {
    StyleCensus::of_lines(lines).most_common()
}
