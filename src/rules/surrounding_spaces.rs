//! Surrounding-whitespace rule.
//!
//! Translations must not gain leading or trailing whitespace; the client
//! concatenates strings and stray spaces show up in chat. Failures render
//! every space as a visible middle dot so the reviewer can see the edges.

use crate::{
    annotate::{VISIBLE_SPACE, mark, visible_spaces},
    row::Row,
    rules::{Check, RuleKind},
};

#[derive(Debug, Clone)]
pub struct SurroundingSpaces;

/// Make spaces visible and mark the leading/trailing dot, if any.
fn annotate_edges(text: &str) -> String {
    let mut out = visible_spaces(text);
    if out.starts_with(VISIBLE_SPACE) {
        out = format!(
            "{}{}",
            mark(&VISIBLE_SPACE.to_string()),
            &out[VISIBLE_SPACE.len_utf8()..]
        );
    }
    if out.ends_with(VISIBLE_SPACE) {
        let cut = out.len() - VISIBLE_SPACE.len_utf8();
        out = format!("{}{}", &out[..cut], mark(&VISIBLE_SPACE.to_string()));
    }
    out
}

impl Check for SurroundingSpaces {
    fn kind(&self) -> RuleKind {
        RuleKind::SurroundingSpaces
    }

    fn check(&self, row: &Row) -> Option<Row> {
        if row.translated != row.translated.trim() {
            return Some(Row {
                source: annotate_edges(&row.source),
                translated: annotate_edges(&row.translated),
                ..row.clone()
            });
        }
        None
    }
}
