//! Per-language magnitude tables.
//!
//! Each table maps the canonical magnitudes (0–20, tens, hundreds, 1000 and
//! 1 000 000) to their cardinal and ordinal words.  Composite numbers are
//! assembled from these entries by [`crate::inflect`]; they are never looked
//! up directly.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::language::Language;

// ─────────────────────────────────────────────────────────────────────────────
// Raw tables: (magnitude, cardinal, ordinal)
// ─────────────────────────────────────────────────────────────────────────────

const RUSSIAN: &[(u64, &str, &str)] = &[
    (0, "ноль", "нулевой"),
    (1, "один", "первый"),
    (2, "два", "второй"),
    (3, "три", "третий"),
    (4, "четыре", "четвертый"),
    (5, "пять", "пятый"),
    (6, "шесть", "шестой"),
    (7, "семь", "седьмой"),
    (8, "восемь", "восьмой"),
    (9, "девять", "девятый"),
    (10, "десять", "десятый"),
    (11, "одиннадцать", "одиннадцатый"),
    (12, "двенадцать", "двенадцатый"),
    (13, "тринадцать", "тринадцатый"),
    (14, "четырнадцать", "четырнадцатый"),
    (15, "пятнадцать", "пятнадцатый"),
    (16, "шестнадцать", "шестнадцатый"),
    (17, "семнадцать", "семнадцатый"),
    (18, "восемнадцать", "восемнадцатый"),
    (19, "девятнадцать", "девятнадцатый"),
    (20, "двадцать", "двадцатый"),
    (30, "тридцать", "тридцатый"),
    (40, "сорок", "сороковой"),
    (50, "пятьдесят", "пятидесятый"),
    (60, "шестьдесят", "шестидесятый"),
    (70, "семьдесят", "семидесятый"),
    (80, "восемьдесят", "восьмидесятый"),
    (90, "девяносто", "девяностый"),
    (100, "сто", "сотый"),
    (200, "двести", "двухсотый"),
    (300, "триста", "трехсотый"),
    (400, "четыреста", "четырехсотый"),
    (500, "пятьсот", "пятисотый"),
    (600, "шестьсот", "шестисотый"),
    (700, "семьсот", "семисотый"),
    (800, "восемьсот", "восьмисотый"),
    (900, "девятьсот", "девятисотый"),
    (1_000, "тысяча", "тысячный"),
    (1_000_000, "миллион", "миллионный"),
];

const UKRAINIAN: &[(u64, &str, &str)] = &[
    (0, "нуль", "нульовий"),
    (1, "один", "перший"),
    (2, "два", "другий"),
    (3, "три", "третій"),
    (4, "чотири", "четвертий"),
    (5, "п'ять", "п'ятий"),
    (6, "шість", "шостий"),
    (7, "сім", "сьомий"),
    (8, "вісім", "восьмий"),
    (9, "дев'ять", "дев'ятий"),
    (10, "десять", "десятий"),
    (11, "одинадцять", "одинадцятий"),
    (12, "дванадцять", "дванадцятий"),
    (13, "тринадцять", "тринадцятий"),
    (14, "чотирнадцять", "чотирнадцятий"),
    (15, "п'ятнадцять", "п'ятнадцятий"),
    (16, "шістнадцять", "шістнадцятий"),
    (17, "сімнадцять", "сімнадцятий"),
    (18, "вісімнадцять", "вісімнадцятий"),
    (19, "дев'ятнадцять", "дев'ятнадцятий"),
    (20, "двадцять", "двадцятий"),
    (30, "тридцять", "тридцятий"),
    (40, "сорок", "сороковий"),
    (50, "п'ятдесят", "п'ятдесятий"),
    (60, "шістдесят", "шістдесятий"),
    (70, "сімдесят", "сімдесятий"),
    (80, "вісімдесят", "вісімдесятий"),
    (90, "дев'яносто", "дев'яностий"),
    (100, "сто", "сотий"),
    (200, "двісті", "двохсотий"),
    (300, "триста", "трьохсотий"),
    (400, "чотириста", "чотирьохсотий"),
    (500, "п'ятсот", "п'ятисотий"),
    (600, "шістсот", "шестисотий"),
    (700, "сімсот", "семисотий"),
    (800, "вісімсот", "восьмисотий"),
    (900, "дев'ятсот", "дев'ятисотий"),
    (1_000, "тисяча", "тисячний"),
    (1_000_000, "мільйон", "мільйонний"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Lexicon
// ─────────────────────────────────────────────────────────────────────────────

/// Cardinal and ordinal words for one magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnitudeEntry {
    pub cardinal: &'static str,
    pub ordinal: &'static str,
}

/// Magnitude → words table for a single language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<u64, MagnitudeEntry>,
}

impl Lexicon {
    /// Build the table for `language`.
    pub fn new(language: Language) -> Self {
        let raw = match language {
            Language::Russian => RUSSIAN,
            Language::Ukrainian => UKRAINIAN,
        };
        let entries = raw
            .iter()
            .map(|&(magnitude, cardinal, ordinal)| (magnitude, MagnitudeEntry { cardinal, ordinal }))
            .collect();
        Self { entries }
    }

    /// Look up the words for a canonical magnitude.
    pub fn word_for(&self, magnitude: u64) -> Result<&MagnitudeEntry> {
        self.entries
            .get(&magnitude)
            .ok_or(Error::UnknownMagnitude(magnitude))
    }

    pub fn cardinal(&self, magnitude: u64) -> Result<&'static str> {
        self.word_for(magnitude).map(|e| e.cardinal)
    }

    pub fn ordinal(&self, magnitude: u64) -> Result<&'static str> {
        self.word_for(magnitude).map(|e| e.ordinal)
    }

    /// All magnitudes in the table, in no particular order.
    pub fn magnitudes(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
