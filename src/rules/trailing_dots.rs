//! Trailing-dot parity rule.
//!
//! If either side ends with a period, both must. The annotation marks the
//! trailing dot on whichever side has one, so the reviewer sees which side is
//! out of step.

use crate::{
    annotate::mark,
    row::Row,
    rules::{Check, RuleKind},
};

#[derive(Debug, Clone)]
pub struct TrailingDots;

fn mark_trailing_dot(text: &str) -> String {
    format!("{}{}", &text[..text.len() - 1], mark("."))
}

impl Check for TrailingDots {
    fn kind(&self) -> RuleKind {
        RuleKind::TrailingDots
    }

    fn check(&self, row: &Row) -> Option<Row> {
        let source_dot = row.source.ends_with('.');
        let translated_dot = row.translated.ends_with('.');
        if source_dot == translated_dot {
            return None;
        }
        Some(Row {
            source: if source_dot {
                mark_trailing_dot(&row.source)
            } else {
                row.source.clone()
            },
            translated: if translated_dot {
                mark_trailing_dot(&row.translated)
            } else {
                row.translated.clone()
            },
            ..row.clone()
        })
    }
}
