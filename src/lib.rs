//! Sheetlint - structural consistency checker for translation-sheet exports
//!
//! Sheetlint is a CLI tool and library for validating localization strings
//! exported as tab-separated rows. It flags rows whose translated text diverges
//! from the source text in structural ways: mismatched color codes, numbers and
//! placeholders, stray whitespace, punctuation drift, and protected terms that
//! must never be translated.
//!
//! ## Module Structure
//!
//! - `annotate`: Danger-marker helpers for highlighting offending substrings
//! - `checker`: Runs every rule against every row and collects the report
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `report`: Categorized report of failing rows, keyed by rule
//! - `row`: The translation-unit value type rules operate on
//! - `rules`: The structural-consistency rules
//! - `tsv`: TSV export parsing

pub mod annotate;
pub mod checker;
pub mod cli;
pub mod config;
pub mod report;
pub mod row;
pub mod rules;
pub mod tsv;
