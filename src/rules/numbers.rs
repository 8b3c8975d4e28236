//! Numeral parity rule.
//!
//! Standalone digits must match in count and order between source and
//! translation. A digit that is part of a color code (`&1`) is not a numeral,
//! and digits inside `{...}` code spans can optionally be ignored, since
//! placeholder names are checked by the variables rule.

use std::{ops::Range, sync::LazyLock};

use regex::{Match, Regex};

use crate::{
    annotate::mark,
    row::Row,
    rules::{Check, RuleKind},
};

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]+\}").unwrap());

#[derive(Debug, Clone)]
pub struct Numbers {
    /// When set, digits inside `{...}` spans are not counted.
    pub strip_code_spans: bool,
}

impl Numbers {
    fn digits<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        let spans: Vec<Range<usize>> = if self.strip_code_spans {
            CODE_SPAN_RE.find_iter(text).map(|m| m.range()).collect()
        } else {
            Vec::new()
        };

        // A digit directly after the color marker is a color code, not a
        // numeral. The marker is ASCII, so the preceding-byte check is exact.
        DIGIT_RE
            .find_iter(text)
            .filter(|m| m.start() == 0 || text.as_bytes()[m.start() - 1] != b'&')
            .filter(|m| !spans.iter().any(|span| span.contains(&m.start())))
            .collect()
    }

    fn mark_digit_at(&self, text: &str, nth: usize) -> String {
        match self.digits(text).get(nth) {
            Some(m) => {
                let mut out = text.to_string();
                out.replace_range(m.range(), &mark(m.as_str()));
                out
            }
            None => text.to_string(),
        }
    }

    fn mark_all_digits(&self, text: &str) -> String {
        let mut out = text.to_string();
        for m in self.digits(text).into_iter().rev() {
            out.replace_range(m.range(), &mark(m.as_str()));
        }
        out
    }
}

impl Check for Numbers {
    fn kind(&self) -> RuleKind {
        RuleKind::Numbers
    }

    fn check(&self, row: &Row) -> Option<Row> {
        let source_digits = self.digits(&row.source);
        let translated_digits = self.digits(&row.translated);

        if source_digits.len() != translated_digits.len() {
            return Some(Row {
                source: self.mark_all_digits(&row.source),
                translated: self.mark_all_digits(&row.translated),
                ..row.clone()
            });
        }

        for (nth, (source_digit, translated_digit)) in
            source_digits.iter().zip(&translated_digits).enumerate()
        {
            if source_digit.as_str() != translated_digit.as_str() {
                return Some(Row {
                    source: self.mark_digit_at(&row.source, nth),
                    translated: self.mark_digit_at(&row.translated, nth),
                    ..row.clone()
                });
            }
        }
        None
    }
}
