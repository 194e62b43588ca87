//! Outline assembly.

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::model::{Heading, HeadingLevel, LineRecord, StyleKey};

/// Materialize the final heading list: every line whose style received a
/// level, stable-sorted into physical reading order (page, then vertical
/// position) and projected to the public shape.
pub fn assemble(
    groups: &IndexMap<StyleKey, Vec<&LineRecord>>,
    levels: &IndexMap<StyleKey, HeadingLevel>,
) -> Vec<Heading> {
    let mut leveled: Vec<(HeadingLevel, &LineRecord)> = Vec::new();
    for (style, lines) in groups {
        if let Some(&level) = levels.get(style) {
            for &line in lines {
                leveled.push((level, line));
            }
        }
    }

    leveled.sort_by(|(_, a), (_, b)| {
        a.page
            .cmp(&b.page)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    leveled
        .into_iter()
        .map(|(level, line)| Heading {
            level,
            text: line.text.clone(),
            page: line.page,
        })
        .collect()
}
