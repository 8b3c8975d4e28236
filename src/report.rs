//! Categorized report of failing rows.

use std::collections::HashSet;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{row::Row, rules::RuleKind};

/// The checker's output: an ordered mapping from rule to the annotated rows
/// that failed it. Bucket order is the pipeline's evaluation order; rows keep
/// their sheet order within a bucket. A row that fails several rules appears
/// in every matching bucket, each copy carrying only that rule's annotations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    buckets: Vec<(RuleKind, Vec<Row>)>,
}

impl Report {
    /// Build a report from per-rule buckets, dropping the empty ones.
    pub(crate) fn from_buckets(buckets: Vec<(RuleKind, Vec<Row>)>) -> Self {
        Self {
            buckets: buckets
                .into_iter()
                .filter(|(_, rows)| !rows.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of violations across all buckets.
    pub fn total_violations(&self) -> usize {
        self.buckets.iter().map(|(_, rows)| rows.len()).sum()
    }

    /// Number of distinct sheet rows that failed at least one rule.
    pub fn distinct_rows(&self) -> usize {
        self.buckets
            .iter()
            .flat_map(|(_, rows)| rows.iter().map(|row| row.line))
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleKind, &[Row])> {
        self.buckets.iter().map(|(kind, rows)| (*kind, rows.as_slice()))
    }

    /// Rows that failed the given rule, if any did.
    pub fn rows_for(&self, kind: RuleKind) -> Option<&[Row]> {
        self.buckets
            .iter()
            .find(|(bucket_kind, _)| *bucket_kind == kind)
            .map(|(_, rows)| rows.as_slice())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (kind, rows) in &self.buckets {
            map.serialize_entry(kind.id(), rows)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report::from_buckets(vec![
            (RuleKind::ColorCodes, vec![Row::new(2, "a", "&a", "&b")]),
            (RuleKind::TrailingDots, Vec::new()),
            (
                RuleKind::ProtectedTerms,
                vec![Row::new(2, "a", "PvP", ""), Row::new(5, "b", "FFA", "")],
            ),
        ])
    }

    #[test]
    fn test_empty_buckets_dropped() {
        let report = sample();
        assert!(report.rows_for(RuleKind::TrailingDots).is_none());
        assert_eq!(report.iter().count(), 2);
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.total_violations(), 3);
        // Line 2 failed two rules but counts once.
        assert_eq!(report.distinct_rows(), 2);
    }

    #[test]
    fn test_json_preserves_bucket_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let color_codes = json.find("color-codes").unwrap();
        let protected = json.find("protected-terms").unwrap();
        assert!(color_codes < protected);
        assert!(!json.contains("trailing-dots"));
    }
}
