//! # chislo
//!
//! Russian and Ukrainian text normalization for speech synthesis: numbers,
//! percentages and temperatures are spelled out as words, and the noun after
//! a number is put into the form the number demands.
//!
//! ## Quick start
//!
//! ```no_run
//! use chislo::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//!
//! let ru = normalizer.preprocess("Сейчас -5.5°C, влажность 10%, осталось 3 яблока", "ru").unwrap();
//! // "Сейчас минус пять целых и пять десятых градуса Цельсия, влажность
//! //  десять процентов, осталось три яблока"
//!
//! let uk = normalizer.preprocess("Через 2 хвилина", "uk").unwrap();
//! // "Через дві хвилини"
//! ```
//!
//! A single language can be driven directly, with its own analyzer:
//!
//! ```no_run
//! use std::sync::Arc;
//! use chislo::{DeclensionTable, Language, LanguageProcessor};
//!
//! let mut table = DeclensionTable::builtin(Language::Russian).unwrap();
//! table.extend_from_json(&std::fs::read_to_string("units.json").unwrap()).unwrap();
//!
//! let ru = LanguageProcessor::with_morphology(Language::Russian, Arc::new(table));
//! let words = ru.integer_to_words(2_500_000, None).unwrap();
//! // ["два", "миллиона", "пятьсот", "тысяч"]
//! ```
//!
//! ## Pipeline
//! 1. **Temperature**: `22.5°C` → numeral words, "degree", Celsius/Fahrenheit.
//! 2. **Percentage**: `10%` → numeral words and an agreed "percent".
//! 3. **Number + word**: `3 яблока` → numeral in the noun's gender, agreed noun.
//! 4. **Standalone numbers**: any number still left.
//! 5. **Transliteration**: remaining Latin words → Cyrillic.
//! 6. **Whitespace collapse**.
//!
//! Grammar comes from a [`Morphology`] implementation.  The crate ships
//! [`DeclensionTable`], backed by JSON declension dictionaries; when a word
//! is unknown the word is kept as written.

pub mod agree;
pub mod config;
pub mod error;
pub mod inflect;
pub mod language;
pub mod lexicon;
pub mod morph;
pub mod preprocess;
pub mod processor;
pub mod translit;

// C FFI for embedding: chislo_normalizer_new / preprocess / free.
pub mod ffi;

// ─── Re-exports for convenience ─────────────────────────────────────────────

pub use config::{load_config, load_normalizer, NormalizerConfig};
pub use error::{Error, Result};
pub use inflect::{is_singular_form, Inflector};
pub use language::{Language, LanguageProfile};
pub use morph::{Analysis, DeclensionTable, GrammemeSet, Morphology};
pub use preprocess::PreprocessorConfig;
pub use processor::{LanguageProcessor, TextNormalizer};
pub use translit::{LatinTransliterator, Transliterate};
