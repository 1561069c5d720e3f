//! Language processors: the public entry point that runs the whole pipeline.
//!
//! ```text
//! text ─► temperature ─► percentage ─► number + word ─► standalone numbers
//!      ─► transliteration ─► whitespace collapse ─► text
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::agree::{agreeing_form_of, fraction_form_of};
use crate::error::{Error, Result};
use crate::inflect::Inflector;
use crate::language::{Language, LanguageProfile};
use crate::morph::{DeclensionTable, Morphology};
use crate::preprocess::{remove_extra_whitespace, PreprocessorConfig, Rewriter};
use crate::translit::{LatinTransliterator, Transliterate};

// ─────────────────────────────────────────────────────────────────────────────
// LanguageProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Everything needed to normalize text in one language.
///
/// Immutable once built, so a processor can be shared between threads.
#[derive(Clone)]
pub struct LanguageProcessor {
    profile: LanguageProfile,
    morph: Arc<dyn Morphology>,
    transliterator: Arc<dyn Transliterate>,
    config: PreprocessorConfig,
}

impl fmt::Debug for LanguageProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProcessor")
            .field("language", &self.profile.language)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LanguageProcessor {
    /// Processor backed by the bundled declension dictionary.
    pub fn new(language: Language) -> Result<Self> {
        let table = DeclensionTable::builtin(language)?;
        Ok(Self::with_morphology(language, Arc::new(table)))
    }

    /// Processor backed by any [`Morphology`] implementation.
    pub fn with_morphology(language: Language, morph: Arc<dyn Morphology>) -> Self {
        Self {
            profile: LanguageProfile::new(language),
            morph,
            transliterator: Arc::new(LatinTransliterator::new()),
            config: PreprocessorConfig::default(),
        }
    }

    pub fn with_transliterator(mut self, transliterator: Arc<dyn Transliterate>) -> Self {
        self.transliterator = transliterator;
        self
    }

    pub fn with_config(mut self, config: PreprocessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn language(&self) -> Language {
        self.profile.language
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    pub fn morphology(&self) -> &dyn Morphology {
        self.morph.as_ref()
    }

    pub fn inflector(&self) -> Inflector<'_> {
        Inflector::new(&self.profile, self.morph.as_ref())
    }

    pub fn integer_to_words(&self, n: i64, governing: Option<&str>) -> Result<Vec<String>> {
        self.inflector().integer_to_words(n, governing)
    }

    pub fn float_to_words(&self, integer: u64, fraction: u64, digits: usize) -> Result<Vec<String>> {
        self.inflector().float_to_words(integer, fraction, digits)
    }

    pub fn agreeing_form_of(&self, count: u64, phrase: &str) -> String {
        agreeing_form_of(self.morph.as_ref(), count, phrase)
    }

    pub fn fraction_form_of(&self, phrase: &str) -> String {
        fraction_form_of(self.morph.as_ref(), phrase)
    }

    /// Normalize `text` for speech.  Never fails: literals that cannot be
    /// spelled stay as written.
    pub fn preprocess(&self, text: &str) -> String {
        let rewriter = Rewriter::new(&self.profile, self.morph.as_ref());
        let mut text = rewriter.rewrite(text, &self.config);

        if self.config.transliterate {
            text = self.transliterator.transliterate(&text, self.profile.language);
            trace!(%text, "transliterated");
        }
        if self.config.collapse_whitespace {
            text = remove_extra_whitespace(&text);
        }
        text
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TextNormalizer
// ─────────────────────────────────────────────────────────────────────────────

/// One processor per supported language, selected by language code.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    processors: HashMap<Language, LanguageProcessor>,
}

impl TextNormalizer {
    /// Processors for every built-in language.
    pub fn new() -> Result<Self> {
        let mut normalizer = Self::default();
        for language in Language::ALL {
            normalizer.insert(LanguageProcessor::new(language)?);
        }
        Ok(normalizer)
    }

    /// Add or replace the processor for its language.
    pub fn insert(&mut self, processor: LanguageProcessor) {
        self.processors.insert(processor.language(), processor);
    }

    pub fn processor(&self, language: Language) -> Option<&LanguageProcessor> {
        self.processors.get(&language)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.processors.keys().copied()
    }

    /// Normalize `text` with the processor for `language_code` (`"ru"`, `"uk"`).
    pub fn preprocess(&self, text: &str, language_code: &str) -> Result<String> {
        let language: Language = language_code.parse()?;
        let processor = self
            .processor(language)
            .ok_or_else(|| Error::UnsupportedLanguage(language_code.to_string()))?;
        Ok(processor.preprocess(text))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::{Analysis, GrammemeSet};

    struct Blank;

    impl Morphology for Blank {
        fn parse(&self, _word: &str) -> Option<Analysis> {
            None
        }
        fn inflect(&self, _analysis: &Analysis, _grammemes: &GrammemeSet) -> Option<Analysis> {
            None
        }
    }

    struct Upper;

    impl Transliterate for Upper {
        fn transliterate(&self, text: &str, _language: Language) -> String {
            text.to_uppercase()
        }
    }

    fn ru() -> LanguageProcessor {
        LanguageProcessor::new(Language::Russian).unwrap()
    }

    #[test]
    fn test_end_to_end_temperature() {
        let out = ru().preprocess("22.5°C");
        assert_eq!(out, "двадцать две целых и пять десятых градуса Цельсия");
        assert!(!out.contains(|c: char| c.is_ascii_digit() || c == '°'), "got: {}", out);
    }

    #[test]
    fn test_stage_ordering() {
        let out = ru().preprocess("-5.5°C and 10% and 3 яблока");
        assert_eq!(
            out,
            "минус пять целых и пять десятых градуса Цельсия анд десять процентов анд три яблока"
        );
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let p = ru();
        for text in [
            "Завтра +3°C, влажность 85%, до вокзала 2 километра.",
            "Куплю 21 книгу за 1500 рублей",
            "Version 2.0 of Python",
        ] {
            let once = p.preprocess(text);
            assert_eq!(p.preprocess(&once), once, "input: {}", text);
        }
    }

    #[test]
    fn test_mixed_sentence() {
        let out = ru().preprocess("Через 5 минута   начнётся  встреча");
        assert_eq!(out, "Через пять минут начнётся встреча");
    }

    #[test]
    fn test_ukrainian_sentence() {
        let p = LanguageProcessor::new(Language::Ukrainian).unwrap();
        let out = p.preprocess("Зараз -2,5°C, а через 2 хвилина буде 3 градус");
        assert_eq!(
            out,
            "Зараз мінус дві цілих і п'ять десятих градуса Цельсія, а через дві хвилини буде три градуси"
        );
    }

    #[test]
    fn test_fallback_without_morphology() {
        let p = LanguageProcessor::with_morphology(Language::Russian, Arc::new(Blank));
        let out = p.preprocess("5 минута и 2 яблоко");
        assert_eq!(out, "пять минута и два яблоко");
        let out = p.preprocess("2000°");
        assert!(out.starts_with("две тысяча"), "got: {}", out);
    }

    #[test]
    fn test_custom_transliterator_and_config() {
        let config = PreprocessorConfig { collapse_whitespace: false, ..Default::default() };
        let p = ru().with_transliterator(Arc::new(Upper)).with_config(config);
        assert_eq!(p.preprocess(" 1 книга "), " ОДНА КНИГА ");
    }

    #[test]
    fn test_transliteration_can_be_disabled() {
        let config = PreprocessorConfig { transliterate: false, ..Default::default() };
        let p = ru().with_config(config);
        assert_eq!(p.preprocess("Rust 2 раза"), "Rust два раза");
    }

    #[test]
    fn test_normalizer_dispatch() {
        let n = TextNormalizer::new().unwrap();
        assert_eq!(n.preprocess("5 минут", "ru").unwrap(), "пять минут");
        assert_eq!(n.preprocess("5 хвилин", "uk-UA").unwrap(), "п'ять хвилин");
        assert!(matches!(
            n.preprocess("5 minutes", "en"),
            Err(Error::UnsupportedLanguage(code)) if code == "en"
        ));
        let mut languages: Vec<_> = n.languages().map(Language::code).collect();
        languages.sort_unstable();
        assert_eq!(languages, ["ru", "uk"]);
    }

    #[test]
    fn test_normalizer_without_processor() {
        let mut n = TextNormalizer::default();
        n.insert(ru());
        assert!(n.preprocess("1", "ru").is_ok());
        assert!(matches!(n.preprocess("1", "uk"), Err(Error::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_processor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageProcessor>();
        assert_send_sync::<TextNormalizer>();
    }
}
