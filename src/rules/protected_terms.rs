//! Protected-term rule.
//!
//! Game names, rank names, brand terms and other curated words must not be
//! translated away: every occurrence in the source has to survive verbatim in
//! the translation. Extra occurrences on the translated side are fine (the
//! grammar may need a repeat).

use crate::{
    annotate::mark,
    row::Row,
    rules::{Check, RuleKind, glossary::TermCategory},
};

#[derive(Debug, Clone)]
pub struct ProtectedTerms {
    categories: Vec<TermCategory>,
}

impl ProtectedTerms {
    pub fn new(categories: Vec<TermCategory>) -> Self {
        Self { categories }
    }
}

impl Check for ProtectedTerms {
    fn kind(&self) -> RuleKind {
        RuleKind::ProtectedTerms
    }

    fn check(&self, row: &Row) -> Option<Row> {
        for category in &self.categories {
            if !category.applies(row) {
                continue;
            }
            for term in &category.terms {
                let in_source = row.source.matches(term.as_str()).count();
                let in_translated = row.translated.matches(term.as_str()).count();
                if in_source > in_translated {
                    let marked = mark(term);
                    return Some(Row {
                        source: row.source.replace(term.as_str(), &marked),
                        translated: row.translated.replace(term.as_str(), &marked),
                        ..row.clone()
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::mark;
    use crate::rules::glossary;
    use pretty_assertions::assert_eq;

    fn rule() -> ProtectedTerms {
        ProtectedTerms::new(glossary::default_categories())
    }

    fn row(key: &str, source: &str, translated: &str) -> Row {
        Row::new(2, key, source, translated)
    }

    #[test]
    fn test_term_kept_passes() {
        assert!(
            rule()
                .check(&row("lobby_pvp", "PvP arena", "PvP aréna"))
                .is_none()
        );
    }

    #[test]
    fn test_term_translated_away_fails() {
        let failed = rule()
            .check(&row("lobby_pvp", "PvP arena", "JcJ aréna"))
            .unwrap();
        assert_eq!(failed.source, format!("{} arena", mark("PvP")));
        assert_eq!(failed.translated, "JcJ aréna");
    }

    #[test]
    fn test_extra_occurrences_in_translation_pass() {
        assert!(
            rule()
                .check(&row("lobby_pvp", "PvP!", "PvP, jen PvP!"))
                .is_none()
        );
    }

    #[test]
    fn test_all_occurrences_marked_on_failure() {
        let failed = rule()
            .check(&row("game_name", "EggWars and EggWars", "EggWars"))
            .unwrap();
        assert_eq!(
            failed.source,
            format!("{} and {}", mark("EggWars"), mark("EggWars"))
        );
        assert_eq!(failed.translated, mark("EggWars"));
    }

    #[test]
    fn test_gated_category_skipped_without_gate() {
        // "Spring" is in Maps, but the row never mentions maps.
        assert!(
            rule()
                .check(&row("lobby_title", "Spring sale!", "Jarní sleva!"))
                .is_none()
        );
    }

    #[test]
    fn test_gated_category_applies_with_gate() {
        assert!(
            rule()
                .check(&row("map_vote", "Vote for Spring", "Hlasuj pro Jaro"))
                .is_some()
        );
    }

    #[test]
    fn test_failed_gate_does_not_block_later_categories() {
        // Maps is gated off, but an Abbreviations violation in the same row
        // must still be caught.
        let failed = rule()
            .check(&row("lobby_title", "CTF opens soon", "Brzy otevře"))
            .unwrap();
        assert_eq!(failed.source, format!("{} opens soon", mark("CTF")));
    }

    #[test]
    fn test_extra_category_from_config() {
        let mut categories = glossary::default_categories();
        categories.push(TermCategory {
            name: "Items".to_string(),
            terms: vec!["Cubelet Machine".to_string()],
            gate: None,
        });
        let rule = ProtectedTerms::new(categories);
        assert!(
            rule.check(&row("shop", "Cubelet Machine", "Stroj na kostky"))
                .is_some()
        );
    }
}
