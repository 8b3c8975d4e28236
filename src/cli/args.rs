//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Sheetlint
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Validate a TSV translation export against the rule pipeline
//! - `words`: Print the protected-term glossary
//! - `init`: Initialize a sheetlint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::rules::RuleKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// TSV export to validate
    pub file: PathBuf,

    /// Rules to run (default: all rules enabled in config)
    /// Can be specified multiple times: --rule color-codes --rule numbers
    #[arg(long = "rule", value_enum)]
    pub rules: Vec<RuleKind>,

    /// Emit the report as JSON instead of the colored summary
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a TSV translation export for structural issues
    Check(CheckCommand),
    /// Print the protected-term glossary (terms that must not be translated)
    Words,
    /// Initialize a new .sheetlintrc.json configuration file
    Init,
}
