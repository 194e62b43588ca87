//! Engine configuration.

/// Tunable heuristics for outline inference.
///
/// Thresholds are data, not global state: pass a config into the engine
/// to test variants without touching the algorithm.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Candidate lines with this many words or more are never headings.
    pub max_heading_words: usize,

    /// Trailing characters that mark a line as sentence-like rather than
    /// a heading.
    pub sentence_suffixes: Vec<char>,
}

impl EngineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word-count ceiling for heading candidates.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the trailing characters that disqualify a heading candidate.
    pub fn with_sentence_suffixes(mut self, suffixes: Vec<char>) -> Self {
        self.sentence_suffixes = suffixes;
        self
    }

    /// Whether a line's text ends like a sentence rather than a heading.
    pub(crate) fn ends_like_sentence(&self, text: &str) -> bool {
        text.chars()
            .last()
            .map(|c| self.sentence_suffixes.contains(&c))
            .unwrap_or(false)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_heading_words: 40,
            sentence_suffixes: vec!['.', ':'],
        }
    }
}
