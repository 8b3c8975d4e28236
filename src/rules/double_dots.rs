//! Double-dot parity rule.
//!
//! A string whose only dots form a single `..` pair is a deliberate stylistic
//! device in the source sheets; the translation must carry the same pattern.
//! Strings with any other dot layout (single dots, `...`, several groups) are
//! outside this rule's shape and never match.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    annotate::mark,
    row::Row,
    rules::{Check, RuleKind},
};

static DOUBLE_DOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^.]*\.\.[^.]*$").unwrap());

#[derive(Debug, Clone)]
pub struct DoubleDots;

fn mark_double_dot(text: &str) -> String {
    text.replacen("..", &mark(".."), 1)
}

impl Check for DoubleDots {
    fn kind(&self) -> RuleKind {
        RuleKind::DoubleDots
    }

    fn check(&self, row: &Row) -> Option<Row> {
        let source_has = DOUBLE_DOT_RE.is_match(&row.source);
        let translated_has = DOUBLE_DOT_RE.is_match(&row.translated);
        if source_has == translated_has {
            return None;
        }
        Some(Row {
            source: if source_has {
                mark_double_dot(&row.source)
            } else {
                row.source.clone()
            },
            translated: if translated_has {
                mark_double_dot(&row.translated)
            } else {
                row.translated.clone()
            },
            ..row.clone()
        })
    }
}
