//! Numeral inflection engine: integers and decimals → word sequences.
//!
//! Digits are walked from the most significant one and read in triads
//! (ones, thousands, millions, …).  Teens collapse into one lexicon word,
//! `1`/`2` take the feminine form before "thousand", and in the units triad
//! they follow the gender and case of the governing noun.  Each non-units
//! triad is closed by its scale word inflected to agree with the triad.

use tracing::debug;

use crate::error::{Error, Result};
use crate::language::LanguageProfile;
use crate::morph::{GrammemeSet, Morphology, Quantity};

/// `true` when `n` ends in 1 but not in 11 (the Slavic singular class).
pub fn is_singular_form(n: u64) -> bool {
    n % 10 == 1 && n % 100 != 11
}

/// Spells numbers for one language.
#[derive(Clone, Copy)]
pub struct Inflector<'a> {
    profile: &'a LanguageProfile,
    morph: &'a dyn Morphology,
}

impl<'a> Inflector<'a> {
    pub fn new(profile: &'a LanguageProfile, morph: &'a dyn Morphology) -> Self {
        Self { profile, morph }
    }

    /// Words for a signed integer.
    ///
    /// `governing` is the text that follows the number; its last token picks
    /// the gender and case of a final `1` or `2`.
    pub fn integer_to_words(&self, n: i64, governing: Option<&str>) -> Result<Vec<String>> {
        if n < 0 {
            let mut words = vec![self.profile.minus.to_string()];
            words.extend(self.cardinal_to_words(n.unsigned_abs(), governing)?);
            return Ok(words);
        }
        self.cardinal_to_words(n.unsigned_abs(), governing)
    }

    /// Words for a non-negative integer.
    pub fn cardinal_to_words(&self, n: u64, governing: Option<&str>) -> Result<Vec<String>> {
        let lexicon = &self.profile.lexicon;
        if n == 0 {
            return Ok(vec![lexicon.cardinal(0)?.to_string()]);
        }

        let digits: Vec<u64> = n.to_string().bytes().map(|b| u64::from(b - b'0')).collect();
        let mut words = Vec::new();
        let (mut hundreds, mut tens) = (0, 0);

        for (i, &digit) in digits.iter().enumerate() {
            let position = digits.len() - 1 - i;
            match position % 3 {
                2 => {
                    if digit > 0 {
                        words.push(lexicon.cardinal(digit * 100)?.to_string());
                    }
                    hundreds = digit;
                }
                1 => {
                    if digit > 1 {
                        words.push(lexicon.cardinal(digit * 10)?.to_string());
                    }
                    tens = digit;
                }
                _ => {
                    let ones = if tens == 1 { digit + 10 } else { digit };
                    if ones > 0 {
                        words.push(self.ones_word(ones, position, governing, n)?);
                    }
                    if position > 0 && hundreds + tens + ones > 0 {
                        words.push(self.scale_word(position, ones)?);
                    }
                    hundreds = 0;
                    tens = 0;
                }
            }
        }
        Ok(words)
    }

    /// Words for `integer`.`fraction`, where `fraction` had `digits` digits.
    ///
    /// Both parts are read as feminine (they count "parts"), followed by the
    /// whole-word, the connector and the tenths/hundredths/thousandths word.
    pub fn float_to_words(&self, integer: u64, fraction: u64, digits: usize) -> Result<Vec<String>> {
        let fraction_words = self.fraction_to_words(fraction, digits)?;

        let mut words = self.cardinal_to_words(integer, Some(self.profile.fraction_noun))?;
        words.push(self.profile.whole.pick(is_singular_form(integer)).to_string());
        words.push(self.profile.and.to_string());
        words.extend(fraction_words);
        Ok(words)
    }

    /// Fractional part alone: `5`, 1 digit → `пять десятых`.
    pub fn fraction_to_words(&self, fraction: u64, digits: usize) -> Result<Vec<String>> {
        let order = match digits {
            1..=3 => self.profile.fraction_orders[digits - 1],
            _ => return Err(Error::UnsupportedFractionDigits(digits)),
        };
        let mut words = self.cardinal_to_words(fraction, Some(self.profile.fraction_noun))?;
        words.push(order.pick(is_singular_form(fraction)).to_string());
        Ok(words)
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn ones_word(&self, ones: u64, position: usize, governing: Option<&str>, count: u64) -> Result<String> {
        let cardinal = self.profile.lexicon.cardinal(ones)?;
        if ones <= 2 {
            if position == 3 {
                if let Some(feminine) = self.profile.feminine_of(ones) {
                    return Ok(feminine.to_string());
                }
            } else if position == 0 {
                if let Some(text) = governing {
                    return Ok(self.agreeing_numeral(cardinal, text, count));
                }
            }
        }
        Ok(cardinal.to_string())
    }

    /// `один`/`два` in the gender and case of the governing noun.
    fn agreeing_numeral(&self, cardinal: &str, governing: &str, count: u64) -> String {
        let last = governing.split_whitespace().last().unwrap_or(governing);
        let Some(noun) = self.morph.parse_counted(last, Quantity::Count(count)) else {
            debug!(word = last, "governing word not analyzed, using default numeral");
            return cardinal.to_string();
        };

        let mut grammemes = GrammemeSet::new();
        if let Some(gender) = noun.gender {
            grammemes = grammemes.with_gender(gender);
        }
        if let Some(case) = noun.case {
            grammemes = grammemes.with_case(case);
        }

        self.morph
            .parse(cardinal)
            .and_then(|numeral| self.morph.inflect(&numeral, &grammemes))
            .map(|a| a.word)
            .unwrap_or_else(|| {
                debug!(numeral = cardinal, %grammemes, "numeral not inflected");
                cardinal.to_string()
            })
    }

    fn scale_word(&self, position: usize, ones: u64) -> Result<String> {
        let exponent = position as u32;
        let word = self
            .profile
            .scale_word(exponent)
            .ok_or(Error::UnknownScale(exponent))?;
        Ok(self.morph.scale_word_agreeing_with(word, ones).unwrap_or_else(|| {
            debug!(scale = word, count = ones, "scale word not inflected");
            word.to_string()
        }))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
