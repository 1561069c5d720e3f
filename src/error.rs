//! Error type shared by the lexicon, the inflection engine and the facade.
//!
//! Morphology and transliteration failures are absent: those collaborators
//! fall back to the unmodified word instead of failing.

use thiserror::Error;

/// Errors raised by the numeral engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A decimal fraction had a digit count other than 1, 2 or 3.
    #[error("unsupported fraction length: {0} digits (expected 1, 2 or 3)")]
    UnsupportedFractionDigits(usize),

    /// A magnitude outside the canonical lexicon set was looked up.
    #[error("no lexicon entry for magnitude {0}")]
    UnknownMagnitude(u64),

    /// No scale word is configured for the digit group at `10^exponent`.
    #[error("no scale word for 10^{0}")]
    UnknownScale(u32),

    /// The language code does not name a supported language.
    #[error("unsupported language '{0}' (expected 'ru' or 'uk')")]
    UnsupportedLanguage(String),

    /// A numeric literal does not fit the engine's integer range.
    #[error("number '{0}' is out of range")]
    NumberOutOfRange(String),

    /// A declension dictionary could not be parsed.
    #[error("malformed declension dictionary: {0}")]
    Dictionary(#[from] serde_json::Error),

    /// A dictionary entry has the wrong number of forms for its paradigm.
    #[error("lexeme '{lemma}': expected {expected} forms in '{paradigm}', found {found}")]
    ParadigmShape {
        lemma: String,
        paradigm: &'static str,
        expected: usize,
        found: usize,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
