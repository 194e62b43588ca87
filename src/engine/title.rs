//! Title selection.

use crate::model::LineRecord;

/// Pick the document title: the largest line on page 1.
///
/// Page-1 lines are stable-sorted by rounded font size descending, so
/// among equally sized lines the one closest to the top wins (records
/// arrive in reading order). Vertical position is deliberately not
/// checked; size alone is the signal. Returns `None` when page 1 has no
/// lines.
pub fn select_title(lines: &[LineRecord]) -> Option<String> {
    let mut page_one: Vec<&LineRecord> = lines.iter().filter(|l| l.page == 1).collect();
    page_one.sort_by(|a, b| b.style.size.cmp(&a.style.size));
    page_one.first().map(|l| l.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleKey;

    fn line(text: &str, size: f32, page: u32, y: f32) -> LineRecord {
        LineRecord::new(text, StyleKey::new(size, false, 0), page, y)
    }

    #[test]
    fn test_largest_line_wins() {
        let lines = vec![
            line("Small print", 8.0, 1, 20.0),
            line("Annual Report", 28.0, 1, 60.0),
            line("Body text", 10.0, 1, 100.0),
        ];
        assert_eq!(select_title(&lines), Some("Annual Report".to_string()));
    }

    #[test]
    fn test_equal_sizes_prefer_earlier_line() {
        let lines = vec![
            line("First", 18.0, 1, 50.0),
            line("Second", 18.0, 1, 80.0),
        ];
        assert_eq!(select_title(&lines), Some("First".to_string()));
    }

    #[test]
    fn test_only_page_one_considered() {
        let lines = vec![
            line("Heading on page two", 30.0, 2, 50.0),
            line("Modest title", 12.0, 1, 50.0),
        ];
        assert_eq!(select_title(&lines), Some("Modest title".to_string()));
    }

    #[test]
    fn test_no_page_one_lines() {
        let lines = vec![line("Later text", 12.0, 2, 50.0)];
        assert_eq!(select_title(&lines), None);
    }
}
