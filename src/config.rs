use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::rules::{RuleKind, TermCategory};

pub const CONFIG_FILE_NAME: &str = ".sheetlintrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub rules: RuleToggles,
    /// Extra protected-term categories appended to the built-in glossary.
    #[serde(default)]
    pub extra_words: Vec<TermCategory>,
    /// Zero-based TSV column holding the localization key.
    #[serde(default = "default_key_column")]
    pub key_column: usize,
    /// Zero-based TSV column holding the source text.
    #[serde(default = "default_source_column")]
    pub source_column: usize,
    /// Zero-based TSV column holding the translated text.
    #[serde(default = "default_translated_column")]
    pub translated_column: usize,
}

/// Per-rule enable flags plus rule options.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleToggles {
    #[serde(default = "enabled")]
    pub command_name: bool,
    #[serde(default = "enabled")]
    pub color_codes: bool,
    #[serde(default = "enabled")]
    pub numbers: bool,
    /// Ignore digits inside `{...}` code spans when counting numerals.
    #[serde(default = "enabled")]
    pub strip_code_spans: bool,
    #[serde(default = "enabled")]
    pub variables: bool,
    #[serde(default = "enabled")]
    pub surrounding_spaces: bool,
    /// Historically too noisy; off unless explicitly enabled.
    #[serde(default)]
    pub double_spaces: bool,
    #[serde(default = "enabled")]
    pub trailing_dots: bool,
    #[serde(default = "enabled")]
    pub double_dots: bool,
    #[serde(default = "enabled")]
    pub protected_terms: bool,
}

fn enabled() -> bool {
    true
}

fn default_key_column() -> usize {
    2
}

fn default_source_column() -> usize {
    3
}

fn default_translated_column() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: RuleToggles::default(),
            extra_words: Vec::new(),
            key_column: default_key_column(),
            source_column: default_source_column(),
            translated_column: default_translated_column(),
        }
    }
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self {
            command_name: true,
            color_codes: true,
            numbers: true,
            strip_code_spans: true,
            variables: true,
            surrounding_spaces: true,
            double_spaces: false,
            trailing_dots: true,
            double_dots: true,
            protected_terms: true,
        }
    }
}

impl RuleToggles {
    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::CommandName => self.command_name,
            RuleKind::ColorCodes => self.color_codes,
            RuleKind::Numbers => self.numbers,
            RuleKind::Variables => self.variables,
            RuleKind::SurroundingSpaces => self.surrounding_spaces,
            RuleKind::DoubleSpaces => self.double_spaces,
            RuleKind::TrailingDots => self.trailing_dots,
            RuleKind::DoubleDots => self.double_dots,
            RuleKind::ProtectedTerms => self.protected_terms,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error on overlapping TSV columns or empty glossary entries.
    pub fn validate(&self) -> Result<()> {
        if self.key_column == self.source_column
            || self.key_column == self.translated_column
            || self.source_column == self.translated_column
        {
            bail!(
                "TSV columns must be distinct (key: {}, source: {}, translated: {})",
                self.key_column,
                self.source_column,
                self.translated_column
            );
        }

        for category in &self.extra_words {
            if category.name.is_empty() {
                bail!("'extraWords' contains a category with an empty name");
            }
            if category.terms.iter().any(|term| term.is_empty()) {
                bail!(
                    "'extraWords' category \"{}\" contains an empty term",
                    category.name
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
