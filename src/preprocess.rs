//! Pattern rewriting: numeric literals in text → spelled-out words.
//!
//! Literals are rewritten by an ordered list of [`Stage`]s.  Each stage
//! reads the string the previous one produced and emits a new one; none of
//! them emits digits, so a later stage never re-reads an earlier rewrite.
//! The order is part of the contract:
//!
//! 1. temperature (`-5,5°C`)
//! 2. percentage (`10%`)
//! 3. number followed by a word (`3 яблока`)
//! 4. any number still left (`в 2024`)
//!
//! A literal that cannot be spelled (too many fractional digits, an integer
//! beyond `u64`) is left exactly as written.

use fancy_regex::{Captures, Regex};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::agree::{agreeing_form_of, fraction_form_of};
use crate::error::{Error, Result};
use crate::inflect::Inflector;
use crate::language::{Language, LanguageProfile};
use crate::morph::Morphology;

// ─────────────────────────────────────────────────────────────────────────────
// Compiled regexes (lazily initialised once)
// ─────────────────────────────────────────────────────────────────────────────

/// Optional sign, integer part, optional fractional part after `.` or `,`.
/// Never starts inside a word or in the middle of another decimal.
const NUMBER: &str = r"(?<!\w)(?<!\d[.,])([-+−])?(\d+)(?:[.,](\d+))?";

const RUSSIAN_WORD: &str = r"[а-яА-ЯёЁ]+";
const UKRAINIAN_WORD: &str = r"[а-яА-ЯіїєґІЇЄҐ]+(?:['’ʼ][а-яА-ЯіїєґІЇЄҐ]+)*";

static RE_TEMPERATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{NUMBER}\s*°(?:\s*([CcFfСсФф])(?!\w))?")).unwrap()
});
static RE_PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"{NUMBER}\s?%")).unwrap());
static RE_NUMBER_WORD_RU: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"{NUMBER}\s+({RUSSIAN_WORD})")).unwrap());
static RE_NUMBER_WORD_UK: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"{NUMBER}\s+({UKRAINIAN_WORD})")).unwrap());
static RE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(NUMBER).unwrap());
static RE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn number_word_regex(language: Language) -> &'static Regex {
    match language {
        Language::Russian => &RE_NUMBER_WORD_RU,
        Language::Ukrainian => &RE_NUMBER_WORD_UK,
    }
}

pub fn remove_extra_whitespace(text: &str) -> String {
    RE_SPACES.replace_all(text.trim(), " ").into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric literal
// ─────────────────────────────────────────────────────────────────────────────

/// A number as it was written: sign, integer part and fractional part with
/// its digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericLiteral {
    pub sign: Option<char>,
    pub integer: u64,
    pub fraction: Option<(u64, usize)>,
}

impl NumericLiteral {
    /// Read groups 1–3 of a match built on [`NUMBER`].
    fn from_captures(caps: &Captures) -> Result<Self> {
        let sign = caps.get(1).and_then(|m| m.as_str().chars().next());
        let integer = parse_digits(&caps[2])?;
        let fraction = match caps.get(3) {
            Some(m) => {
                let digits = m.as_str().len();
                if !(1..=3).contains(&digits) {
                    return Err(Error::UnsupportedFractionDigits(digits));
                }
                Some((parse_digits(m.as_str())?, digits))
            }
            None => None,
        };
        Ok(Self { sign, integer, fraction })
    }
}

fn parse_digits(digits: &str) -> Result<u64> {
    digits
        .parse()
        .map_err(|_| Error::NumberOutOfRange(digits.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Stages
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Temperature,
    Percentage,
    NumberWord,
    StandaloneNumber,
}

impl Stage {
    /// Order in which the stages run.
    pub const ORDER: [Stage; 4] = [
        Stage::Temperature,
        Stage::Percentage,
        Stage::NumberWord,
        Stage::StandaloneNumber,
    ];

    fn enabled(self, config: &PreprocessorConfig) -> bool {
        match self {
            Stage::Temperature => config.temperature,
            Stage::Percentage => config.percentage,
            Stage::NumberWord => config.number_word,
            Stage::StandaloneNumber => config.standalone_numbers,
        }
    }
}

/// Which steps of the pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    pub temperature: bool,
    pub percentage: bool,
    pub number_word: bool,
    pub standalone_numbers: bool,
    pub transliterate: bool,
    pub collapse_whitespace: bool,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            temperature: true,
            percentage: true,
            number_word: true,
            standalone_numbers: true,
            transliterate: true,
            collapse_whitespace: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rewriter
// ─────────────────────────────────────────────────────────────────────────────

/// Runs the rewriting stages for one language.
#[derive(Clone, Copy)]
pub struct Rewriter<'a> {
    profile: &'a LanguageProfile,
    morph: &'a dyn Morphology,
}

impl<'a> Rewriter<'a> {
    pub fn new(profile: &'a LanguageProfile, morph: &'a dyn Morphology) -> Self {
        Self { profile, morph }
    }

    /// Run every enabled stage in [`Stage::ORDER`].
    pub fn rewrite(&self, text: &str, config: &PreprocessorConfig) -> String {
        let mut text = text.to_string();
        for stage in Stage::ORDER {
            if stage.enabled(config) {
                text = self.apply(stage, &text);
                trace!(?stage, %text, "stage done");
            }
        }
        text
    }

    pub fn apply(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::Temperature => self.expand_temperatures(text),
            Stage::Percentage => self.expand_percentages(text),
            Stage::NumberWord => self.expand_number_words(text),
            Stage::StandaloneNumber => self.expand_numbers(text),
        }
    }

    /// `-5,5°C` → `минус пять целых и пять десятых градуса Цельсия`.
    ///
    /// The degree noun always takes the form used after a decimal.
    pub fn expand_temperatures(&self, text: &str) -> String {
        self.replace_literals(Stage::Temperature, &RE_TEMPERATURE, text, |literal, caps| {
            let mut words = self.spell(literal, None)?;
            words.push(fraction_form_of(self.morph, self.profile.degree));
            if let Some(unit) = caps.get(4).and_then(|m| m.as_str().chars().next()) {
                words.push(self.unit_word(unit).to_string());
            }
            Ok(words)
        })
    }

    /// `10%` → `десять процентов`; `2,5%` → `два пять десятых процента`.
    ///
    /// A decimal reads the integer part plainly, then the fractional part,
    /// then the fixed genitive of "percent".
    pub fn expand_percentages(&self, text: &str) -> String {
        let percent = self.profile.percent;
        self.replace_literals(Stage::Percentage, &RE_PERCENT, text, |literal, _| {
            if let Some((fraction, digits)) = literal.fraction {
                let inflector = self.inflector();
                let fraction_words = inflector.fraction_to_words(fraction, digits)?;
                let mut words = self.sign_words(literal);
                words.extend(inflector.cardinal_to_words(literal.integer, None)?);
                words.extend(fraction_words);
                words.push(self.profile.percent_genitive.to_string());
                return Ok(words);
            }
            let mut words = self.spell(literal, Some(percent))?;
            words.push(agreeing_form_of(self.morph, literal.integer, percent));
            Ok(words)
        })
    }

    /// `3 яблока` → `три яблока`; `21 минута` → `двадцать одна минута`.
    pub fn expand_number_words(&self, text: &str) -> String {
        let re = number_word_regex(self.profile.language);
        self.replace_literals(Stage::NumberWord, re, text, |literal, caps| {
            let noun = &caps[4];
            if literal.fraction.is_some() {
                let mut words = self.spell(literal, None)?;
                words.push(fraction_form_of(self.morph, noun));
                return Ok(words);
            }
            let mut words = self.spell(literal, Some(noun))?;
            words.push(agreeing_form_of(self.morph, literal.integer, noun));
            Ok(words)
        })
    }

    /// Any number left over, read without a governing noun.
    pub fn expand_numbers(&self, text: &str) -> String {
        self.replace_literals(Stage::StandaloneNumber, &RE_NUMBER, text, |literal, _| {
            self.spell(literal, None)
        })
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn inflector(&self) -> Inflector<'a> {
        Inflector::new(self.profile, self.morph)
    }

    /// Sign word, then the words for the literal's magnitude.
    fn spell(&self, literal: &NumericLiteral, governing: Option<&str>) -> Result<Vec<String>> {
        let mut words = self.sign_words(literal);
        let inflector = self.inflector();
        match literal.fraction {
            Some((fraction, digits)) => {
                words.extend(inflector.float_to_words(literal.integer, fraction, digits)?)
            }
            None => words.extend(inflector.cardinal_to_words(literal.integer, governing)?),
        }
        Ok(words)
    }

    fn sign_words(&self, literal: &NumericLiteral) -> Vec<String> {
        literal
            .sign
            .and_then(|sign| self.profile.sign_word(sign))
            .map(String::from)
            .into_iter()
            .collect()
    }

    fn unit_word(&self, unit: char) -> &'static str {
        match unit {
            'F' | 'f' | 'Ф' | 'ф' => self.profile.fahrenheit,
            _ => self.profile.celsius,
        }
    }

    fn replace_literals<F>(&self, stage: Stage, re: &Regex, text: &str, expand: F) -> String
    where
        F: Fn(&NumericLiteral, &Captures) -> Result<Vec<String>>,
    {
        re.replace_all(text, |caps: &Captures| {
            match NumericLiteral::from_captures(caps).and_then(|literal| expand(&literal, caps)) {
                Ok(words) => words.join(" "),
                Err(err) => {
                    warn!(?stage, literal = &caps[0], %err, "literal left unexpanded");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::DeclensionTable;

    struct Fixture {
        profile: LanguageProfile,
        morph: DeclensionTable,
    }

    impl Fixture {
        fn new(language: Language) -> Self {
            Self {
                profile: LanguageProfile::new(language),
                morph: DeclensionTable::builtin(language).unwrap(),
            }
        }

        fn rewriter(&self) -> Rewriter<'_> {
            Rewriter::new(&self.profile, &self.morph)
        }

        fn run(&self, stage: Stage, text: &str) -> String {
            self.rewriter().apply(stage, text)
        }

        fn all(&self, text: &str) -> String {
            self.rewriter().rewrite(text, &PreprocessorConfig::default())
        }
    }

    fn ru() -> Fixture {
        Fixture::new(Language::Russian)
    }

    fn uk() -> Fixture {
        Fixture::new(Language::Ukrainian)
    }

    #[test]
    fn test_temperature_decimal_celsius() {
        let out = ru().run(Stage::Temperature, "22.5°C");
        assert_eq!(out, "двадцать две целых и пять десятых градуса Цельсия");
    }

    #[test]
    fn test_temperature_signs_and_units() {
        let f = ru();
        assert_eq!(f.run(Stage::Temperature, "+3°"), "плюс три градуса");
        assert_eq!(f.run(Stage::Temperature, "-10 °F"), "минус десять градуса Фаренгейта");
        assert_eq!(f.run(Stage::Temperature, "\u{2212}1°с"), "минус один градуса Цельсия");
        assert_eq!(f.run(Stage::Temperature, "0,5°С"), "ноль целых и пять десятых градуса Цельсия");
    }

    #[test]
    fn test_temperature_ukrainian() {
        let out = uk().run(Stage::Temperature, "-2,5°C");
        assert_eq!(out, "мінус дві цілих і п'ять десятих градуса Цельсія");
    }

    #[test]
    fn test_temperature_unit_letter_must_stand_alone() {
        let out = ru().run(Stage::Temperature, "5° Сибирь");
        assert_eq!(out, "пять градуса Сибирь");
    }

    #[test]
    fn test_percent_integer() {
        let f = ru();
        assert_eq!(f.run(Stage::Percentage, "10%"), "десять процентов");
        assert_eq!(f.run(Stage::Percentage, "21%"), "двадцать один процент");
        assert_eq!(f.run(Stage::Percentage, "3 %"), "три процента");
        assert_eq!(uk().run(Stage::Percentage, "2%"), "два відсотки");
    }

    #[test]
    fn test_percent_decimal() {
        let f = ru();
        assert_eq!(f.run(Stage::Percentage, "скидка 2,5%"), "скидка два пять десятых процента");
        assert_eq!(f.run(Stage::Percentage, "1.5%"), "один пять десятых процента");
        assert_eq!(f.run(Stage::Percentage, "-0,01%"), "минус ноль одна сотая процента");
        let out = uk().run(Stage::Percentage, "1.25%");
        assert_eq!(out, "один двадцять п'ять сотих відсотка");
    }

    #[test]
    fn test_percent_decimal_bad_digits_left_verbatim() {
        assert_eq!(ru().run(Stage::Percentage, "1,2345%"), "1,2345%");
    }

    #[test]
    fn test_number_word_integer() {
        let f = ru();
        assert_eq!(f.run(Stage::NumberWord, "3 яблока"), "три яблока");
        assert_eq!(f.run(Stage::NumberWord, "5 минута"), "пять минут");
        assert_eq!(f.run(Stage::NumberWord, "21 минута"), "двадцать одна минута");
        assert_eq!(f.run(Stage::NumberWord, "2 яблоко"), "два яблока");
        assert_eq!(f.run(Stage::NumberWord, "1000 рублей"), "одна тысяча рублей");
        assert_eq!(f.run(Stage::NumberWord, "-2 минуты"), "минус две минуты");
    }

    #[test]
    fn test_number_word_decimal() {
        let out = ru().run(Stage::NumberWord, "1,5 метр");
        assert_eq!(out, "одна целая и пять десятых метра");
    }

    #[test]
    fn test_number_word_ukrainian() {
        let f = uk();
        assert_eq!(f.run(Stage::NumberWord, "2 хвилина"), "дві хвилини");
        assert_eq!(f.run(Stage::NumberWord, "5 хвилин"), "п'ять хвилин");
        assert_eq!(f.run(Stage::NumberWord, "1 яблуко"), "одне яблуко");
    }

    #[test]
    fn test_number_word_unknown_noun() {
        let out = ru().run(Stage::NumberWord, "7 котиков");
        assert_eq!(out, "семь котиков");
    }

    #[test]
    fn test_standalone_numbers() {
        let f = ru();
        assert_eq!(f.run(Stage::StandaloneNumber, "в 2024."), "в две тысячи двадцать четыре.");
        assert_eq!(f.run(Stage::StandaloneNumber, "-7"), "минус семь");
        assert_eq!(f.run(Stage::StandaloneNumber, "3.14"), "три целых и четырнадцать сотых");
    }

    #[test]
    fn test_digits_inside_words_are_untouched() {
        let out = ru().run(Stage::StandaloneNumber, "mp3 и A-5");
        assert_eq!(out, "mp3 и A-пять");
    }

    #[test]
    fn test_unsupported_fraction_left_verbatim() {
        let f = ru();
        assert_eq!(f.run(Stage::Percentage, "3.14159%"), "3.14159%");
        assert_eq!(f.run(Stage::Temperature, "1.0001°C"), "1.0001°C");
        assert_eq!(f.run(Stage::StandaloneNumber, "pi 3.14159"), "pi 3.14159");
    }

    #[test]
    fn test_overflow_left_verbatim() {
        let huge = "123456789012345678901234567890";
        assert_eq!(ru().run(Stage::StandaloneNumber, huge), huge);
    }

    #[test]
    fn test_stage_ordering() {
        let out = ru().all("-5.5°C и 10% и 3 яблока");
        assert_eq!(
            out,
            "минус пять целых и пять десятых градуса Цельсия и десять процентов и три яблока"
        );
    }

    #[test]
    fn test_disabled_stages_are_skipped() {
        let f = ru();
        let config = PreprocessorConfig {
            temperature: false,
            standalone_numbers: false,
            ..PreprocessorConfig::default()
        };
        let out = f.rewriter().rewrite("5°C и 5%", &config);
        assert!(out.contains("5°C"), "got: {}", out);
        assert!(out.contains("пять процентов"), "got: {}", out);
    }

    #[test]
    fn test_output_has_no_digits() {
        let out = ru().all("Сегодня 12 марта, 14:30, курс 92,35 и 1000000 человек");
        assert!(!out.chars().any(|c| c.is_ascii_digit()), "got: {}", out);
        assert_eq!(
            out,
            "Сегодня двенадцать марта, четырнадцать:тридцать, \
             курс девяносто две целых и тридцать пять сотых и один миллион человек"
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let f = ru();
        let once = f.all("Было -5.5°C, стало 10% и 3 яблока");
        assert_eq!(f.all(&once), once);
    }

    #[test]
    fn test_remove_extra_whitespace() {
        assert_eq!(remove_extra_whitespace("  a \n\t b  "), "a b");
    }

    #[test]
    fn test_preprocessor_config_from_json() {
        let config: PreprocessorConfig = serde_json::from_str(r#"{"percentage": false}"#).unwrap();
        assert!(!config.percentage);
        assert!(config.temperature);
        assert!(config.transliterate);
    }
}
