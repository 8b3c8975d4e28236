//! Protected-term glossary.
//!
//! Categories of terms that must appear verbatim in the translation at least
//! as often as in the source. A category may carry a gate: a substring that
//! has to occur in `key + source` before the category applies, which keeps
//! generic words like rank or map names from firing on unrelated rows.

use serde::{Deserialize, Serialize};

use crate::row::Row;

/// One named list of protected terms, with an optional applicability gate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermCategory {
    pub name: String,
    pub terms: Vec<String>,
    /// Substring that must appear in `key + source` for the category to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
}

impl TermCategory {
    fn new(name: &str, terms: &[&str], gate: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
            gate: gate.map(|g| g.to_string()),
        }
    }

    /// Whether this category applies to the given row.
    pub fn applies(&self, row: &Row) -> bool {
        match &self.gate {
            Some(needle) => {
                // The gate scans key and source as one haystack, including a
                // match that straddles the boundary.
                let haystack = format!("{}{}", row.key, row.source);
                haystack.contains(needle.as_str())
            }
            None => true,
        }
    }
}

/// The built-in glossary.
pub fn default_categories() -> Vec<TermCategory> {
    vec![
        TermCategory::new(
            "Games",
            &[
                "Lucky Islands",
                "EggWars",
                "SkyWars",
                "MinerWare",
                "Tower Defence",
                "SkyBlock",
                "BlockWars",
                "Quake Craft",
                "QuakeCraft",
                "Battle Zone",
                "BattleZone",
                "Paintball",
                "Layer Spleef",
                "Wing Rush",
                "Archer Assault",
                "Line Dash",
                "Survival Games",
                "Slime Survival",
            ],
            None,
        ),
        TermCategory::new(
            "Ranks",
            &[
                "Stone",
                "Iron",
                "Gold",
                "Lapiz",
                "Diamond",
                "Emerald",
                "Obsidian",
                "Plus",
                "Helper",
                "Moderator",
                "Developer",
                "Designer",
                "Translator",
            ],
            Some("rank"),
        ),
        TermCategory::new(
            "Brand Words",
            &["Cubelet", "CubeCraft", "CubeCraft Games"],
            None,
        ),
        TermCategory::new("Abbreviations", &["FFA", "MVP", "VIP", "PvP", "CTF"], None),
        TermCategory::new(
            "Maps",
            &[
                "Spring",
                "Carrots",
                "Hatch",
                "Chocolate",
                "Easter",
                "Bunny",
                "Hunt",
                "Rabbit",
                "Eggs",
            ],
            Some("map"),
        ),
    ]
}

/// Built-in glossary plus any categories configured by the user.
pub fn with_extra(extra: &[TermCategory]) -> Vec<TermCategory> {
    let mut categories = default_categories();
    categories.extend(extra.iter().cloned());
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ungated_category_always_applies() {
        let category = TermCategory::new("Abbreviations", &["PvP"], None);
        let row = Row::new(2, "some_key", "PvP arena", "aréna");
        assert!(category.applies(&row));
    }

    #[test]
    fn test_gate_matches_in_key() {
        let category = TermCategory::new("Ranks", &["Gold"], Some("rank"));
        let row = Row::new(2, "rank_gold_name", "Gold", "Zlato");
        assert!(category.applies(&row));
    }

    #[test]
    fn test_gate_matches_in_source() {
        let category = TermCategory::new("Maps", &["Easter"], Some("map"));
        let row = Row::new(2, "lobby_title", "Easter map vote", "hlasování");
        assert!(category.applies(&row));
    }

    #[test]
    fn test_gate_blocks_unrelated_rows() {
        let category = TermCategory::new("Maps", &["Spring"], Some("map"));
        let row = Row::new(2, "lobby_title", "Spring sale!", "Jarní sleva!");
        assert!(!category.applies(&row));
    }

    #[test]
    fn test_config_round_trip() {
        let json = r#"{ "name": "Items", "terms": ["Cubelet"], "gate": "item" }"#;
        let category: TermCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Items");
        assert_eq!(category.gate.as_deref(), Some("item"));
    }
}
