//! The checker: runs every rule against every row.

use crate::{
    report::Report,
    row::Row,
    rules::{Check, Rule},
};

/// Run `rules` over `rows` in a single synchronous pass.
///
/// Every rule sees the original, unannotated row; failures collect into the
/// rule's bucket in evaluation order. There is no early exit, so one row can
/// land in every bucket at once.
pub fn check(rows: &[Row], rules: &[Rule]) -> Report {
    let mut buckets: Vec<_> = rules.iter().map(|rule| (rule.kind(), Vec::new())).collect();

    for row in rows {
        for (bucket, rule) in buckets.iter_mut().zip(rules) {
            if let Some(annotated) = rule.check(row) {
                bucket.1.push(annotated);
            }
        }
    }

    Report::from_buckets(buckets)
}
