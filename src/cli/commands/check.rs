use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{CheckCommand, exit_status::ExitStatus, report::print_report};
use crate::{
    checker,
    config::{CONFIG_FILE_NAME, load_config},
    rules::Rule,
    tsv,
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let loaded = load_config(&cwd)?;

    if cmd.common.verbose {
        if loaded.from_file {
            eprintln!("{} loaded {}", "info:".bold(), CONFIG_FILE_NAME);
        } else {
            eprintln!("{} no {} found, using defaults", "info:".bold(), CONFIG_FILE_NAME);
        }
    }

    let rows = tsv::load_rows(&cmd.file, &loaded.config)?;
    if cmd.common.verbose {
        eprintln!("{} parsed {} rows from {}", "info:".bold(), rows.len(), cmd.file.display());
    }

    let rules = if cmd.rules.is_empty() {
        Rule::pipeline(&loaded.config)
    } else {
        Rule::for_kinds(&loaded.config, &cmd.rules)
    };

    let report = checker::check(&rows, &rules);

    if cmd.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print_report(&report, rows.len());
    }

    Ok(if report.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
