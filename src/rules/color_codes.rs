//! Color-code parity rule.
//!
//! In-game strings color text with `&` followed by one code character. A
//! translation with different codes, or the same codes in a different order,
//! renders wrong in the client.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    annotate::{mark, mark_all, replace_nth},
    row::Row,
    rules::{Check, RuleKind},
};

/// A color code is the marker char plus whatever single char follows it.
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&.").unwrap());

#[derive(Debug, Clone)]
pub struct ColorCodes;

impl Check for ColorCodes {
    fn kind(&self) -> RuleKind {
        RuleKind::ColorCodes
    }

    fn check(&self, row: &Row) -> Option<Row> {
        let source_codes: Vec<&str> = COLOR_RE.find_iter(&row.source).map(|m| m.as_str()).collect();
        let translated_codes: Vec<&str> = COLOR_RE
            .find_iter(&row.translated)
            .map(|m| m.as_str())
            .collect();

        if source_codes.len() != translated_codes.len() {
            return Some(Row {
                source: mark_all(&COLOR_RE, &row.source),
                translated: mark_all(&COLOR_RE, &row.translated),
                ..row.clone()
            });
        }

        for (nth, (source_code, translated_code)) in
            source_codes.iter().zip(&translated_codes).enumerate()
        {
            if source_code != translated_code {
                return Some(Row {
                    source: replace_nth(&COLOR_RE, &mark(source_code), &row.source, nth),
                    translated: replace_nth(
                        &COLOR_RE,
                        &mark(translated_code),
                        &row.translated,
                        nth,
                    ),
                    ..row.clone()
                });
            }
        }
        None
    }
}
