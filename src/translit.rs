//! Latin → Cyrillic transliteration of the words a normalized text still
//! carries in Latin script (brand names, English loans).
//!
//! Each Latin run is read left to right, taking the longest letter group in
//! the language table at every step (`shch` before `sh` before `s`).  The
//! result is a phonetic approximation only.  Anything not in a table passes
//! through unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::language::Language;

/// Turns foreign-script runs into the target alphabet.
pub trait Transliterate: Send + Sync {
    fn transliterate(&self, text: &str, language: Language) -> String;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables (lowercase keys)
// ─────────────────────────────────────────────────────────────────────────────

const RUSSIAN: &[(&str, &str)] = &[
    ("shch", "щ"),
    ("sch", "щ"),
    ("zh", "ж"),
    ("kh", "х"),
    ("ts", "ц"),
    ("ch", "ч"),
    ("sh", "ш"),
    ("th", "т"),
    ("ph", "ф"),
    ("ck", "к"),
    ("qu", "кв"),
    ("ee", "и"),
    ("oo", "у"),
    ("yo", "ё"),
    ("yu", "ю"),
    ("ya", "я"),
    ("a", "а"),
    ("b", "б"),
    ("c", "к"),
    ("d", "д"),
    ("e", "е"),
    ("f", "ф"),
    ("g", "г"),
    ("h", "х"),
    ("i", "и"),
    ("j", "дж"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("p", "п"),
    ("q", "к"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("v", "в"),
    ("w", "в"),
    ("x", "кс"),
    ("y", "и"),
    ("z", "з"),
];

const UKRAINIAN: &[(&str, &str)] = &[
    ("shch", "щ"),
    ("sch", "щ"),
    ("zh", "ж"),
    ("kh", "х"),
    ("ts", "ц"),
    ("ch", "ч"),
    ("sh", "ш"),
    ("th", "т"),
    ("ph", "ф"),
    ("ck", "к"),
    ("qu", "кв"),
    ("ee", "і"),
    ("oo", "у"),
    ("ye", "є"),
    ("yi", "ї"),
    ("yo", "йо"),
    ("yu", "ю"),
    ("ya", "я"),
    ("a", "а"),
    ("b", "б"),
    ("c", "к"),
    ("d", "д"),
    ("e", "е"),
    ("f", "ф"),
    ("g", "ґ"),
    ("h", "г"),
    ("i", "і"),
    ("j", "дж"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("p", "п"),
    ("q", "к"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("v", "в"),
    ("w", "в"),
    ("x", "кс"),
    ("y", "и"),
    ("z", "з"),
];

const LONGEST_KEY: usize = 4;

static RUSSIAN_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| RUSSIAN.iter().copied().collect());
static UKRAINIAN_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| UKRAINIAN.iter().copied().collect());

static RE_LATIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());

fn table(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::Russian => &RUSSIAN_TABLE,
        Language::Ukrainian => &UKRAINIAN_TABLE,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in transliterator
// ─────────────────────────────────────────────────────────────────────────────

/// Table-driven transliterator for ASCII Latin letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinTransliterator;

impl LatinTransliterator {
    pub fn new() -> Self {
        Self
    }

    /// Transliterate one ASCII word, keeping the case of its first letter.
    pub fn word(&self, word: &str, language: Language) -> String {
        let table = table(language);
        let lower = word.to_ascii_lowercase();
        let mut out = String::with_capacity(word.len() * 2);
        let mut pos = 0;
        while pos < lower.len() {
            let longest = LONGEST_KEY.min(lower.len() - pos);
            let hit = (1..=longest)
                .rev()
                .find_map(|len| table.get(&lower[pos..pos + len]).map(|cyr| (len, *cyr)));
            match hit {
                Some((len, cyr)) => {
                    out.push_str(cyr);
                    pos += len;
                }
                None => {
                    out.push_str(&lower[pos..pos + 1]);
                    pos += 1;
                }
            }
        }

        if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            let mut chars = out.chars();
            if let Some(first) = chars.next() {
                return first.to_uppercase().chain(chars).collect();
            }
        }
        out
    }
}

impl Transliterate for LatinTransliterator {
    fn transliterate(&self, text: &str, language: Language) -> String {
        RE_LATIN
            .replace_all(text, |caps: &regex::Captures| self.word(&caps[0], language))
            .into_owned()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
