//! Report formatting and printing.
//!
//! This module is separate from the core library logic so sheetlint can be
//! used as a library without printing side effects. It translates the
//! checker's danger markers into terminal styling.

use colored::Colorize;

use crate::{
    annotate::{MARK_END, MARK_START},
    report::Report,
    row::Row,
};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Replace danger-marker spans with terminal styling.
///
/// Markers always come in balanced pairs; an unbalanced marker (which no rule
/// emits) degrades to printing the rest of the text unstyled.
pub fn render_marked(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(MARK_START) {
        out.push_str(&rest[..start]);
        let after = &rest[start + MARK_START.len_utf8()..];
        match after.find(MARK_END) {
            Some(end) => {
                out.push_str(&after[..end].red().bold().to_string());
                rest = &after[end + MARK_END.len_utf8()..];
            }
            None => {
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn print_row(row: &Row) {
    println!("  {} row {}  {}", "-->".blue(), row.line, row.key.dimmed());
    println!(
        "      {} {}",
        "source:    ".cyan(),
        render_marked(&row.source)
    );
    println!(
        "      {} {}",
        "translated:".cyan(),
        render_marked(&row.translated)
    );
}

/// Print the categorized report, one section per failed rule.
pub fn print_report(report: &Report, rows_checked: usize) {
    if report.is_empty() {
        print_success(rows_checked);
        return;
    }

    for (kind, rows) in report.iter() {
        println!(
            "{}: {} ({} {})",
            "failed".bold().red(),
            kind.title().bold(),
            rows.len(),
            if rows.len() == 1 { "row" } else { "rows" }
        );
        for row in rows {
            print_row(row);
        }
        println!();
    }

    let failed_rows = report.distinct_rows();
    println!(
        "{} {} {} in {} of {} rows",
        FAILURE_MARK.red(),
        report.total_violations(),
        if report.total_violations() == 1 {
            "violation"
        } else {
            "violations"
        },
        failed_rows,
        rows_checked
    );
}

/// Print a success message when no violations are found.
///
/// Displays the number of rows checked to give the user confidence that the
/// check actually ran and covered the expected scope.
pub fn print_success(rows_checked: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            rows_checked,
            if rows_checked == 1 { "row" } else { "rows" }
        )
        .green()
    );
}
