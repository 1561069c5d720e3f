//! JSON configuration for building a [`TextNormalizer`].
//!
//! ```json
//! {
//!   "language": "uk",
//!   "dictionaries": { "ru": ["extra/ru-units.json"] },
//!   "stages": { "standalone_numbers": false }
//! }
//! ```
//!
//! Every field is optional.  Relative dictionary paths are resolved against
//! the directory of the config file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::language::Language;
use crate::morph::DeclensionTable;
use crate::preprocess::PreprocessorConfig;
use crate::processor::{LanguageProcessor, TextNormalizer};

// ─────────────────────────────────────────────────────────────────────────────
// Schema
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Language used when the caller does not name one.
    pub language: String,

    /// Extra declension dictionaries per language code, merged over the
    /// built-in ones in order.
    pub dictionaries: HashMap<String, Vec<PathBuf>>,

    /// Pipeline toggles shared by every language.
    pub stages: PreprocessorConfig,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            language: Language::Russian.code().to_string(),
            dictionaries: HashMap::new(),
            stages: PreprocessorConfig::default(),
        }
    }
}

impl NormalizerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse normalizer config")
    }

    pub fn default_language(&self) -> Result<Language> {
        self.language
            .parse()
            .with_context(|| format!("Invalid default language '{}'", self.language))
    }

    /// Build a processor for every built-in language.
    pub fn build(&self) -> Result<TextNormalizer> {
        self.default_language()?;
        for code in self.dictionaries.keys() {
            if let Err(e) = code.parse::<Language>() {
                bail!("Dictionaries listed for {e}");
            }
        }

        let mut normalizer = TextNormalizer::default();
        for language in Language::ALL {
            let mut table = DeclensionTable::builtin(language)
                .with_context(|| format!("Built-in dictionary for '{}' is invalid", language))?;
            for path in self.dictionaries_for(language) {
                extend_from_file(&mut table, path)?;
            }
            debug!(%language, lexemes = table.len(), "dictionary ready");

            let processor = LanguageProcessor::with_morphology(language, Arc::new(table))
                .with_config(self.stages.clone());
            normalizer.insert(processor);
        }
        Ok(normalizer)
    }

    fn dictionaries_for(&self, language: Language) -> impl Iterator<Item = &PathBuf> {
        self.dictionaries
            .iter()
            .filter(move |(code, _)| code.parse::<Language>().ok() == Some(language))
            .flat_map(|(_, paths)| paths)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for paths in self.dictionaries.values_mut() {
            for path in paths.iter_mut() {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────────────

fn extend_from_file(table: &mut DeclensionTable, path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read dictionary: {}", path.display()))?;
    table
        .extend_from_json(&json)
        .with_context(|| format!("Invalid dictionary: {}", path.display()))?;
    info!(path = %path.display(), language = %table.language(), "dictionary merged");
    Ok(())
}

/// Read a config file.
pub fn load_config(path: &Path) -> Result<NormalizerConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;
    let mut config = NormalizerConfig::from_json(&json)
        .with_context(|| format!("In {}", path.display()))?;
    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    Ok(config)
}

/// Read a config file and build the normalizer it describes.
pub fn load_normalizer(path: &Path) -> Result<TextNormalizer> {
    load_config(path)?.build()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
