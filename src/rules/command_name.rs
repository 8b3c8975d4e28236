//! Command-name consistency rule.
//!
//! Keys that name a chat command (`command_*_name`) carry the literal command
//! the player types, so the translation must be byte-identical to the source.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    annotate::mark,
    row::Row,
    rules::{Check, RuleKind},
};

static COMMAND_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"command_.*_name").unwrap());

#[derive(Debug, Clone)]
pub struct CommandName;

impl Check for CommandName {
    fn kind(&self) -> RuleKind {
        RuleKind::CommandName
    }

    fn check(&self, row: &Row) -> Option<Row> {
        if COMMAND_NAME_RE.is_match(&row.key) && row.source != row.translated {
            return Some(Row {
                source: mark(&row.source),
                translated: mark(&row.translated),
                ..row.clone()
            });
        }
        None
    }
}
