//! Placeholder parity rule.
//!
//! `{identifier}` placeholders are substituted at runtime, so every one in the
//! source must survive into the translation. Order is free (grammar differs
//! across languages); the comparison is a sorted multiset match.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    annotate::{mark, mark_all, replace_nth},
    row::Row,
    rules::{Check, RuleKind},
};

static VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[A-Za-z_-]+\}").unwrap());

#[derive(Debug, Clone)]
pub struct Variables;

impl Check for Variables {
    fn kind(&self) -> RuleKind {
        RuleKind::Variables
    }

    fn check(&self, row: &Row) -> Option<Row> {
        let source_vars: Vec<&str> = VARIABLE_RE
            .find_iter(&row.source)
            .map(|m| m.as_str())
            .collect();
        let translated_vars: Vec<&str> = VARIABLE_RE
            .find_iter(&row.translated)
            .map(|m| m.as_str())
            .collect();

        if source_vars.is_empty() && translated_vars.is_empty() {
            return None;
        }
        if source_vars.is_empty() || translated_vars.is_empty() {
            return Some(Row {
                source: mark_all(&VARIABLE_RE, &row.source),
                translated: mark_all(&VARIABLE_RE, &row.translated),
                ..row.clone()
            });
        }

        let mut sorted_source = source_vars.clone();
        let mut sorted_translated = translated_vars.clone();
        sorted_source.sort_unstable();
        sorted_translated.sort_unstable();
        if sorted_source == sorted_translated {
            return None;
        }

        // Multisets differ: point at the first pairwise difference in
        // extraction order.
        for (nth, (source_var, translated_var)) in
            source_vars.iter().zip(&translated_vars).enumerate()
        {
            if source_var != translated_var {
                return Some(Row {
                    source: replace_nth(&VARIABLE_RE, &mark(source_var), &row.source, nth),
                    translated: replace_nth(
                        &VARIABLE_RE,
                        &mark(translated_var),
                        &row.translated,
                        nth,
                    ),
                    ..row.clone()
                });
            }
        }

        // Pairwise prefix agrees but counts differ. A longer source side
        // means a placeholder was dropped from the translation; mark the
        // first extra one. A longer translated side stays silent, matching
        // historical behavior.
        if source_vars.len() > translated_vars.len() {
            let nth = translated_vars.len();
            return Some(Row {
                source: replace_nth(&VARIABLE_RE, &mark(source_vars[nth]), &row.source, nth),
                ..row.clone()
            });
        }
        None
    }
}
