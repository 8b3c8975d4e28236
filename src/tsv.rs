//! TSV export parsing.
//!
//! Sheet exports are tab-separated with a header line and the key, source and
//! translated columns at fixed ordinal positions. The first row whose key
//! column is empty ends the sheet; spreadsheet exports pad trailing lines with
//! empty cells.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{config::Config, row::Row};

/// Parse rows out of TSV content, using the column layout from `config`.
pub fn parse_rows(content: &str, config: &Config) -> Vec<Row> {
    let mut rows = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let columns: Vec<&str> = line.split('\t').collect();
        let key = columns.get(config.key_column).copied().unwrap_or("");
        if key.is_empty() {
            break;
        }
        if index == 0 {
            // Header line.
            continue;
        }
        rows.push(Row::new(
            index + 1,
            key,
            columns.get(config.source_column).copied().unwrap_or(""),
            columns.get(config.translated_column).copied().unwrap_or(""),
        ));
    }
    rows
}

/// Read a TSV export from disk and parse it into rows.
pub fn load_rows(path: &Path, config: &Config) -> Result<Vec<Row>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read TSV file: {}", path.display()))?;
    Ok(parse_rows(&content, config))
}
