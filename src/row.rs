//! The translation-unit value type.

use serde::Serialize;

/// One translation unit from a sheet export.
///
/// `Row` is an immutable value: rules never mutate a shared instance. A failing
/// rule returns a fresh annotated copy, so the annotations of one rule are
/// never visible to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// 1-based line number in the source file.
    pub line: usize,
    /// Localization key (e.g. `command_kick_name`).
    pub key: String,
    /// Canonical-language text.
    pub source: String,
    /// Localized text being validated.
    pub translated: String,
}

impl Row {
    pub fn new(line: usize, key: &str, source: &str, translated: &str) -> Self {
        Self {
            line,
            key: key.to_string(),
            source: source.to_string(),
            translated: translated.to_string(),
        }
    }
}
