//! Style keys for clustering visually similar lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The visual class of a text line: `(rounded font size, bold, color)`.
///
/// Two lines with an identical key belong to the same visual class
/// regardless of page or position. The font size is rounded to the
/// nearest whole point so that sub-pixel jitter in the source stream does
/// not split one logical style into many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleKey {
    /// Font size rounded to the nearest point
    pub size: i32,
    /// Whether the font is bold
    pub bold: bool,
    /// Packed RGB color (0xRRGGBB)
    pub color: u32,
}

impl StyleKey {
    /// Build a key from a raw font size, rounding to the nearest point.
    pub fn new(size: f32, bold: bool, color: u32) -> Self {
        Self {
            size: size.round() as i32,
            bold,
            color,
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}pt{} #{:06X}",
            self.size,
            if self.bold { " bold" } else { "" },
            self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_rounding() {
        assert_eq!(StyleKey::new(11.6, false, 0).size, 12);
        assert_eq!(StyleKey::new(12.4, false, 0).size, 12);
        assert_eq!(StyleKey::new(12.5, false, 0).size, 13);
    }

    #[test]
    fn test_jittered_sizes_collapse() {
        let a = StyleKey::new(10.02, false, 0);
        let b = StyleKey::new(9.98, false, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let key = StyleKey::new(14.0, true, 0x1A2B3C);
        assert_eq!(key.to_string(), "14pt bold #1A2B3C");
    }
}
