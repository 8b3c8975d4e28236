//! Double-space parity rule.
//!
//! Flags rows where the number of double-space runs differs between source
//! and translation. Historically too noisy for sheet exports, so the rule is
//! off by default and only runs when enabled in config or selected on the
//! command line.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    annotate::{mark, visible_spaces},
    row::Row,
    rules::{Check, RuleKind},
};

static DOUBLE_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2}").unwrap());

#[derive(Debug, Clone)]
pub struct DoubleSpaces;

fn annotate(text: &str) -> String {
    visible_spaces(text).replace("··", &mark("··"))
}

impl Check for DoubleSpaces {
    fn kind(&self) -> RuleKind {
        RuleKind::DoubleSpaces
    }

    fn check(&self, row: &Row) -> Option<Row> {
        let source_count = DOUBLE_SPACE_RE.find_iter(&row.source).count();
        let translated_count = DOUBLE_SPACE_RE.find_iter(&row.translated).count();
        if source_count != translated_count {
            return Some(Row {
                source: annotate(&row.source),
                translated: annotate(&row.translated),
                ..row.clone()
            });
        }
        None
    }
}
