//! Line aggregation: raw spans to single-style line records.

use crate::decode::PageText;
use crate::model::{LineRecord, StyleKey};

use super::stats::StyleCensus;

/// Reduce every raw line of every page to a [`LineRecord`] carrying one
/// dominant style.
///
/// The dominant style is the mode of the line's span styles weighted by
/// character count, so a single bolded word inside a plain sentence does
/// not reclassify the whole line. Ties keep the first-seen style. Lines
/// with no spans, or whose concatenated text trims to nothing, are
/// dropped; they carry no signal and would pollute the style statistics.
pub fn collect_lines(pages: &[PageText]) -> Vec<LineRecord> {
    let mut records = Vec::new();

    for page in pages {
        for line in &page.lines {
            let mut weights = StyleCensus::new();
            for span in &line.spans {
                let key = StyleKey::new(span.size, span.is_bold(), span.color);
                weights.add(key, span.text.chars().count());
            }
            let style = match weights.most_common() {
                Some(style) => style,
                None => continue,
            };

            let text = line
                .spans
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string();
            if text.is_empty() {
                continue;
            }

            records.push(LineRecord::new(text, style, page.number, line.y));
        }
    }

    records
}
