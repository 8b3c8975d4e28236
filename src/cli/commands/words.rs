use std::env;

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::super::exit_status::ExitStatus;
use crate::{config::load_config, rules::glossary};

/// Print the protected-term glossary, including user-configured categories.
pub fn words() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd)?.config;
    let categories = glossary::with_extra(&config.extra_words);

    // Pad by display width so non-ASCII category names from config line up.
    let name_width = categories
        .iter()
        .map(|category| UnicodeWidthStr::width(category.name.as_str()))
        .max()
        .unwrap_or(0);

    for category in &categories {
        let padding = name_width - UnicodeWidthStr::width(category.name.as_str());
        let gate_note = match &category.gate {
            Some(gate) => format!("  (only when key+source contains \"{}\")", gate),
            None => String::new(),
        };
        println!(
            "{}{:padding$}  {}{}",
            category.name.bold(),
            "",
            category.terms.join(", "),
            gate_note.dimmed(),
        );
    }

    Ok(ExitStatus::Success)
}
