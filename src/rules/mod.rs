//! Structural-consistency rules.
//!
//! Each rule is a pure check over a single [`Row`](crate::row::Row): it either
//! stays silent (the row passes) or returns exactly one annotated copy with
//! danger markers around the offending tokens (the row fails). Rules never see
//! each other's annotations, so they are independent and order-insensitive for
//! correctness; the pipeline order only affects report presentation.
//!
//! ## Module Structure
//!
//! - `command_name`: Command-name strings must not be translated at all
//! - `color_codes`: `&x` color codes must match in count and order
//! - `numbers`: Standalone digits must match in count and order
//! - `variables`: `{placeholder}` tokens must match as a multiset
//! - `surrounding_spaces`: No leading/trailing whitespace in translations
//! - `double_spaces`: No drift in double-space runs (off by default)
//! - `trailing_dots`: Trailing-period presence must match
//! - `double_dots`: Lone `..` pairs must match in cardinality
//! - `protected_terms`: Curated terms must survive translation verbatim

pub mod color_codes;
pub mod command_name;
pub mod double_dots;
pub mod double_spaces;
pub mod glossary;
pub mod numbers;
pub mod protected_terms;
pub mod surrounding_spaces;
pub mod trailing_dots;
pub mod variables;

use std::fmt;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;

use crate::{config::Config, row::Row};

pub use color_codes::ColorCodes;
pub use command_name::CommandName;
pub use double_dots::DoubleDots;
pub use double_spaces::DoubleSpaces;
pub use glossary::TermCategory;
pub use numbers::Numbers;
pub use protected_terms::ProtectedTerms;
pub use surrounding_spaces::SurroundingSpaces;
pub use trailing_dots::TrailingDots;
pub use variables::Variables;

/// Identifier for a rule, used for report buckets and CLI selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum RuleKind {
    CommandName,
    ColorCodes,
    Numbers,
    Variables,
    SurroundingSpaces,
    DoubleSpaces,
    TrailingDots,
    DoubleDots,
    ProtectedTerms,
}

impl RuleKind {
    /// Fixed evaluation order of the pipeline.
    pub const ALL: [RuleKind; 9] = [
        RuleKind::CommandName,
        RuleKind::ColorCodes,
        RuleKind::Numbers,
        RuleKind::Variables,
        RuleKind::SurroundingSpaces,
        RuleKind::DoubleSpaces,
        RuleKind::TrailingDots,
        RuleKind::DoubleDots,
        RuleKind::ProtectedTerms,
    ];

    /// Stable identifier used for JSON report keys and CLI values.
    pub fn id(&self) -> &'static str {
        match self {
            RuleKind::CommandName => "command-name",
            RuleKind::ColorCodes => "color-codes",
            RuleKind::Numbers => "numbers",
            RuleKind::Variables => "variables",
            RuleKind::SurroundingSpaces => "surrounding-spaces",
            RuleKind::DoubleSpaces => "double-spaces",
            RuleKind::TrailingDots => "trailing-dots",
            RuleKind::DoubleDots => "double-dots",
            RuleKind::ProtectedTerms => "protected-terms",
        }
    }

    /// Human-facing report heading.
    pub fn title(&self) -> &'static str {
        match self {
            RuleKind::CommandName => "Command Name",
            RuleKind::ColorCodes => "Colour Codes",
            RuleKind::Numbers => "Numbers",
            RuleKind::Variables => "Variables",
            RuleKind::SurroundingSpaces => "Surrounding Spaces",
            RuleKind::DoubleSpaces => "Double Spaces",
            RuleKind::TrailingDots => "Trailing Dots",
            RuleKind::DoubleDots => "Double Dots",
            RuleKind::ProtectedTerms => "Should Not Be Translated",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A structural-consistency check over a single row.
#[enum_dispatch]
pub trait Check {
    /// Report bucket this rule files failures under.
    fn kind(&self) -> RuleKind;

    /// Run the check. Returns an annotated copy of the row on failure.
    fn check(&self, row: &Row) -> Option<Row>;
}

/// A configured rule instance. Uses `enum_dispatch` for zero-cost dispatch
/// over the fixed rule set.
#[enum_dispatch(Check)]
#[derive(Debug, Clone)]
pub enum Rule {
    CommandName,
    ColorCodes,
    Numbers,
    Variables,
    SurroundingSpaces,
    DoubleSpaces,
    TrailingDots,
    DoubleDots,
    ProtectedTerms,
}

impl Rule {
    /// Build the pipeline of rules enabled by `config`, in evaluation order.
    pub fn pipeline(config: &Config) -> Vec<Rule> {
        let enabled: Vec<RuleKind> = RuleKind::ALL
            .into_iter()
            .filter(|kind| config.rules.is_enabled(*kind))
            .collect();
        Self::for_kinds(config, &enabled)
    }

    /// Build rules for an explicit selection of kinds, in evaluation order.
    ///
    /// The selection overrides the config's enable toggles but still honors
    /// its per-rule options (code-span stripping, extra word lists).
    pub fn for_kinds(config: &Config, kinds: &[RuleKind]) -> Vec<Rule> {
        RuleKind::ALL
            .into_iter()
            .filter(|kind| kinds.contains(kind))
            .map(|kind| match kind {
                RuleKind::CommandName => CommandName.into(),
                RuleKind::ColorCodes => ColorCodes.into(),
                RuleKind::Numbers => Numbers {
                    strip_code_spans: config.rules.strip_code_spans,
                }
                .into(),
                RuleKind::Variables => Variables.into(),
                RuleKind::SurroundingSpaces => SurroundingSpaces.into(),
                RuleKind::DoubleSpaces => DoubleSpaces.into(),
                RuleKind::TrailingDots => TrailingDots.into(),
                RuleKind::DoubleDots => DoubleDots.into(),
                RuleKind::ProtectedTerms => {
                    ProtectedTerms::new(glossary::with_extra(&config.extra_words)).into()
                }
            })
            .collect()
    }
}
