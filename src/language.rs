//! Supported languages and the word constants each one contributes.
//!
//! A [`LanguageProfile`] is selected once when a processor is built and then
//! read by the inflection engine and the rewriter; neither branches on the
//! language anywhere else.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::lexicon::Lexicon;

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Russian,
    Ukrainian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Russian, Language::Ukrainian];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::Ukrainian => "uk",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts `ru`/`uk`, case-insensitively, with an optional region suffix
    /// (`ru-RU`, `uk_UA`).
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let base = code.split(['-', '_']).next().unwrap_or_default();
        match base.to_ascii_lowercase().as_str() {
            "ru" => Ok(Language::Russian),
            "uk" => Ok(Language::Ukrainian),
            _ => Err(Error::UnsupportedLanguage(code.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────────────────

/// Singular and plural surface forms of a connector word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingularPlural {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl SingularPlural {
    pub fn pick(&self, singular: bool) -> &'static str {
        if singular {
            self.singular
        } else {
            self.plural
        }
    }
}

/// Everything language-specific the engine needs, owned by one processor.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub language: Language,
    pub lexicon: Lexicon,
    /// Feminine cardinals for 1 and 2 (`одна`, `две` / `дві`).
    pub feminine: [(u64, &'static str); 2],
    pub minus: &'static str,
    pub plus: &'static str,
    /// `целая`/`целых` after the integer part of a decimal.
    pub whole: SingularPlural,
    /// Connector between integer and fractional parts.
    pub and: &'static str,
    /// Noun that governs the gender of both parts of a decimal.
    pub fraction_noun: &'static str,
    /// Order suffixes for 1, 2 and 3 fractional digits.
    pub fraction_orders: [SingularPlural; 3],
    pub degree: &'static str,
    pub percent: &'static str,
    /// Fixed form of "percent" after a decimal.
    pub percent_genitive: &'static str,
    pub celsius: &'static str,
    pub fahrenheit: &'static str,
    /// Scale words for 10^9, 10^12, 10^15 and 10^18.
    pub large_scales: [(u32, &'static str); 4],
}

impl LanguageProfile {
    pub fn new(language: Language) -> Self {
        let lexicon = Lexicon::new(language);
        match language {
            Language::Russian => Self {
                language,
                lexicon,
                feminine: [(1, "одна"), (2, "две")],
                minus: "минус",
                plus: "плюс",
                whole: SingularPlural { singular: "целая", plural: "целых" },
                and: "и",
                fraction_noun: "часть",
                fraction_orders: [
                    SingularPlural { singular: "десятая", plural: "десятых" },
                    SingularPlural { singular: "сотая", plural: "сотых" },
                    SingularPlural { singular: "тысячная", plural: "тысячных" },
                ],
                degree: "градус",
                percent: "процент",
                percent_genitive: "процента",
                celsius: "Цельсия",
                fahrenheit: "Фаренгейта",
                large_scales: [
                    (9, "миллиард"),
                    (12, "триллион"),
                    (15, "квадриллион"),
                    (18, "квинтиллион"),
                ],
            },
            Language::Ukrainian => Self {
                language,
                lexicon,
                feminine: [(1, "одна"), (2, "дві")],
                minus: "мінус",
                plus: "плюс",
                whole: SingularPlural { singular: "ціла", plural: "цілих" },
                and: "і",
                fraction_noun: "частина",
                fraction_orders: [
                    SingularPlural { singular: "десята", plural: "десятих" },
                    SingularPlural { singular: "сота", plural: "сотих" },
                    SingularPlural { singular: "тисячна", plural: "тисячних" },
                ],
                degree: "градус",
                percent: "відсоток",
                percent_genitive: "відсотка",
                celsius: "Цельсія",
                fahrenheit: "Фаренгейта",
                large_scales: [
                    (9, "мільярд"),
                    (12, "трильйон"),
                    (15, "квадрильйон"),
                    (18, "квінтильйон"),
                ],
            },
        }
    }

    /// Feminine form of 1 or 2.
    pub fn feminine_of(&self, ones: u64) -> Option<&'static str> {
        self.feminine.iter().find(|(n, _)| *n == ones).map(|(_, w)| *w)
    }

    /// Nominative scale word for the digit group at `10^exponent`.
    pub fn scale_word(&self, exponent: u32) -> Option<&'static str> {
        match exponent {
            3 => self.lexicon.cardinal(1_000).ok(),
            6 => self.lexicon.cardinal(1_000_000).ok(),
            _ => self.large_scales.iter().find(|(e, _)| *e == exponent).map(|(_, w)| *w),
        }
    }

    pub fn sign_word(&self, sign: char) -> Option<&'static str> {
        match sign {
            '+' => Some(self.plus),
            '-' | '\u{2212}' => Some(self.minus),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Russian);
        assert_eq!("UK".parse::<Language>().unwrap(), Language::Ukrainian);
        assert_eq!("uk_UA".parse::<Language>().unwrap(), Language::Ukrainian);
        assert_eq!("ru-RU".parse::<Language>().unwrap(), Language::Russian);
        assert!(matches!("de".parse::<Language>(), Err(Error::UnsupportedLanguage(_))));
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_code_roundtrip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_scale_words() {
        let ru = LanguageProfile::new(Language::Russian);
        assert_eq!(ru.scale_word(3), Some("тысяча"));
        assert_eq!(ru.scale_word(6), Some("миллион"));
        assert_eq!(ru.scale_word(9), Some("миллиард"));
        assert_eq!(ru.scale_word(21), None);

        let uk = LanguageProfile::new(Language::Ukrainian);
        assert_eq!(uk.scale_word(6), Some("мільйон"));
        assert_eq!(uk.scale_word(18), Some("квінтильйон"));
    }

    #[test]
    fn test_feminine_overrides() {
        let uk = LanguageProfile::new(Language::Ukrainian);
        assert_eq!(uk.feminine_of(2), Some("дві"));
        assert_eq!(uk.feminine_of(3), None);
    }

    #[test]
    fn test_sign_words() {
        let ru = LanguageProfile::new(Language::Russian);
        assert_eq!(ru.sign_word('+'), Some("плюс"));
        assert_eq!(ru.sign_word('\u{2212}'), Some("минус"));
        assert_eq!(ru.sign_word('x'), None);
    }
}
