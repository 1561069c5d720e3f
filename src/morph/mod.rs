//! Morphological service interface.
//!
//! The numeral engine never inspects words itself.  It asks a [`Morphology`]
//! implementation to analyze a surface word, to inflect an analysis into a
//! requested [`GrammemeSet`], and to say which grammemes a noun needs after a
//! given count.  [`table::DeclensionTable`] is the implementation shipped with
//! the crate; any other analyzer can be plugged in behind the same trait.

use std::fmt;

use serde::Deserialize;

pub mod table;

pub use table::DeclensionTable;

// ─────────────────────────────────────────────────────────────────────────────
// Grammemes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Case {
    #[serde(rename = "nomn")]
    Nominative,
    #[serde(rename = "gent")]
    Genitive,
    #[serde(rename = "datv")]
    Dative,
    #[serde(rename = "accs")]
    Accusative,
    #[serde(rename = "ablt")]
    Instrumental,
    #[serde(rename = "loct")]
    Locative,
}

impl Case {
    /// Paradigm order used by dictionaries: nomn, gent, datv, accs, ablt, loct.
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Locative,
    ];

    pub fn index(self) -> usize {
        match self {
            Case::Nominative => 0,
            Case::Genitive => 1,
            Case::Dative => 2,
            Case::Accusative => 3,
            Case::Instrumental => 4,
            Case::Locative => 5,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Case::Nominative => "nomn",
            Case::Genitive => "gent",
            Case::Dative => "datv",
            Case::Accusative => "accs",
            Case::Instrumental => "ablt",
            Case::Locative => "loct",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Gender {
    #[serde(rename = "masc")]
    Masculine,
    #[serde(rename = "femn")]
    Feminine,
    #[serde(rename = "neut")]
    Neuter,
}

impl Gender {
    pub fn tag(self) -> &'static str {
        match self {
            Gender::Masculine => "masc",
            Gender::Feminine => "femn",
            Gender::Neuter => "neut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Number {
    #[serde(rename = "sing")]
    Singular,
    #[serde(rename = "plur")]
    Plural,
}

impl Number {
    pub fn tag(self) -> &'static str {
        match self {
            Number::Singular => "sing",
            Number::Plural => "plur",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum PartOfSpeech {
    #[default]
    #[serde(rename = "noun")]
    Noun,
    #[serde(rename = "numr")]
    Numeral,
}

/// A set of requested grammemes.  Unset slots leave the analysis unchanged.
///
/// Equality is set equality: `{sing, accs}` is the same set however it was
/// built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GrammemeSet {
    pub number: Option<Number>,
    pub case: Option<Case>,
    pub gender: Option<Gender>,
}

impl GrammemeSet {
    pub const fn new() -> Self {
        Self { number: None, case: None, gender: None }
    }

    pub const fn with_number(mut self, number: Number) -> Self {
        self.number = Some(number);
        self
    }

    pub const fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.case.is_none() && self.gender.is_none()
    }
}

impl fmt::Display for GrammemeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = [
            self.number.map(Number::tag),
            self.case.map(Case::tag),
            self.gender.map(Gender::tag),
        ]
        .into_iter()
        .flatten()
        .collect();
        write!(f, "{{{}}}", tags.join(","))
    }
}

/// `{sing, gent}`: what a Russian noun takes after 2, 3, 4.
pub const SINGULAR_GENITIVE: GrammemeSet = GrammemeSet::new()
    .with_number(Number::Singular)
    .with_case(Case::Genitive);

/// `{plur, nomn}`: what a Ukrainian noun takes after 2, 3, 4.
pub const PLURAL_NOMINATIVE: GrammemeSet = GrammemeSet::new()
    .with_number(Number::Plural)
    .with_case(Case::Nominative);

/// `{sing, accs}`: the set the agreement resolver treats specially.
pub const SINGULAR_ACCUSATIVE: GrammemeSet = GrammemeSet::new()
    .with_number(Number::Singular)
    .with_case(Case::Accusative);

// ─────────────────────────────────────────────────────────────────────────────
// Analysis
// ─────────────────────────────────────────────────────────────────────────────

/// Grammatical reading of one surface word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Surface form this analysis describes (lowercase).
    pub word: String,
    /// Dictionary form of the lexeme.
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub case: Option<Case>,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Agreement buckets
// ─────────────────────────────────────────────────────────────────────────────

/// Slavic count classes: ends in 1 (not 11), ends in 2–4 (not 12–14), rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountBucket {
    One,
    Few,
    Many,
}

impl CountBucket {
    pub fn of(count: u64) -> Self {
        let (last, last_two) = (count % 10, count % 100);
        if last == 1 && last_two != 11 {
            CountBucket::One
        } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
            CountBucket::Few
        } else {
            CountBucket::Many
        }
    }
}

/// What a noun is being agreed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// A whole count, e.g. the `5` in `5 минут`.
    Count(u64),
    /// A decimal quantity, e.g. `2,5`; always takes the genitive singular.
    Fraction,
}

/// Grammemes a noun needs after `count`.
///
/// Nouns already in an oblique case keep that case and only switch number.
/// In nominative/accusative context the count bucket decides: `One` keeps
/// the singular, `Few` takes the language's `few` set and `Many` takes the
/// plural genitive.  Non-nouns get the empty set (no change), so adjectives
/// in the phrase keep their written form unless an analyzer overrides
/// [`Morphology::agreement_grammemes`] for them.
pub fn numeral_agreement(analysis: &Analysis, count: u64, few: GrammemeSet) -> GrammemeSet {
    if analysis.pos != PartOfSpeech::Noun {
        return GrammemeSet::new();
    }
    let bucket = CountBucket::of(count);
    match analysis.case {
        Some(case) if !matches!(case, Case::Nominative | Case::Accusative) => {
            let number = if bucket == CountBucket::One { Number::Singular } else { Number::Plural };
            GrammemeSet::new().with_number(number).with_case(case)
        }
        case => match bucket {
            CountBucket::One if case == Some(Case::Nominative) => {
                GrammemeSet::new().with_number(Number::Singular).with_case(Case::Nominative)
            }
            CountBucket::One => SINGULAR_ACCUSATIVE,
            CountBucket::Few => few,
            CountBucket::Many => GrammemeSet::new().with_number(Number::Plural).with_case(Case::Genitive),
        },
    }
}

/// Lowercase a word and unify apostrophe variants (`’`, `ʼ` → `'`).
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            '\u{2019}' | '\u{02BC}' => '\'',
            c => c,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Service trait
// ─────────────────────────────────────────────────────────────────────────────

/// A morphological analyzer for one language.
///
/// Failures are reported as `None` and callers fall back to the original
/// word, so an analyzer only needs to know the words it is asked about.
///
/// The default agreement only touches nouns.  [`DeclensionTable`] knows
/// nouns and numerals, so adjectives before a counted noun pass through
/// unchanged (`5 новая минута` → `пять новая минут`).
pub trait Morphology: Send + Sync {
    /// Analyze `word`, preferring a nominative reading when several exist.
    fn parse(&self, word: &str) -> Option<Analysis>;

    /// Re-form `analysis` so it carries `grammemes`.
    fn inflect(&self, analysis: &Analysis, grammemes: &GrammemeSet) -> Option<Analysis>;

    /// Grammemes a noun needs to agree with `count`.
    fn agreement_grammemes(&self, analysis: &Analysis, count: u64) -> GrammemeSet {
        numeral_agreement(analysis, count, SINGULAR_GENITIVE)
    }

    /// Grammemes a noun needs after a decimal quantity.
    fn fraction_agreement_grammemes(&self, analysis: &Analysis) -> GrammemeSet {
        self.agreement_grammemes(analysis, 2)
    }

    fn grammemes_for(&self, analysis: &Analysis, quantity: Quantity) -> GrammemeSet {
        match quantity {
            Quantity::Count(count) => self.agreement_grammemes(analysis, count),
            Quantity::Fraction => self.fraction_agreement_grammemes(analysis),
        }
    }

    /// Inflect a scale word (`тысяча`, `миллион`) to agree with `count`.
    fn scale_word_agreeing_with(&self, scale_word: &str, count: u64) -> Option<String> {
        let analysis = self.parse(scale_word)?;
        let grammemes = self.agreement_grammemes(&analysis, count);
        self.inflect(&analysis, &grammemes).map(|a| a.word)
    }

    /// Analyze a word that follows a number.
    ///
    /// Input such as `3 яблока` or `5 минут` is already agreed with its
    /// count, so the genitive there reflects the number and not the
    /// sentence.  When the word equals the form the quantity demands of its
    /// nominative lemma, the nominative reading is returned instead.
    fn parse_counted(&self, word: &str, quantity: Quantity) -> Option<Analysis> {
        let analysis = self.parse(word)?;
        if analysis.pos != PartOfSpeech::Noun || analysis.case == Some(Case::Nominative) {
            return Some(analysis);
        }
        let lemma = GrammemeSet::new().with_number(Number::Singular).with_case(Case::Nominative);
        let Some(nominative) = self.inflect(&analysis, &lemma) else {
            return Some(analysis);
        };
        let agreed = self.grammemes_for(&nominative, quantity);
        match self.inflect(&nominative, &agreed) {
            Some(form) if form.word == analysis.word => Some(nominative),
            _ => Some(analysis),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(case: Case) -> Analysis {
        Analysis {
            word: String::new(),
            lemma: String::new(),
            pos: PartOfSpeech::Noun,
            case: Some(case),
            gender: Some(Gender::Masculine),
            number: Some(Number::Singular),
        }
    }

    #[test]
    fn test_count_buckets() {
        for n in [1, 21, 101, 1_001] {
            assert_eq!(CountBucket::of(n), CountBucket::One, "{}", n);
        }
        for n in [2, 3, 4, 22, 34, 102] {
            assert_eq!(CountBucket::of(n), CountBucket::Few, "{}", n);
        }
        for n in [0, 5, 11, 12, 13, 14, 19, 20, 111, 112] {
            assert_eq!(CountBucket::of(n), CountBucket::Many, "{}", n);
        }
    }

    #[test]
    fn test_agreement_in_nominative_context() {
        let n = noun(Case::Nominative);
        let one = GrammemeSet::new().with_number(Number::Singular).with_case(Case::Nominative);
        let many = GrammemeSet::new().with_number(Number::Plural).with_case(Case::Genitive);
        assert_eq!(numeral_agreement(&n, 1, SINGULAR_GENITIVE), one);
        assert_eq!(numeral_agreement(&n, 3, SINGULAR_GENITIVE), SINGULAR_GENITIVE);
        assert_eq!(numeral_agreement(&n, 3, PLURAL_NOMINATIVE), PLURAL_NOMINATIVE);
        assert_eq!(numeral_agreement(&n, 7, SINGULAR_GENITIVE), many);
    }

    #[test]
    fn test_agreement_keeps_oblique_case() {
        let n = noun(Case::Instrumental);
        assert_eq!(
            numeral_agreement(&n, 1, SINGULAR_GENITIVE),
            GrammemeSet::new().with_number(Number::Singular).with_case(Case::Instrumental)
        );
        assert_eq!(
            numeral_agreement(&n, 5, SINGULAR_GENITIVE),
            GrammemeSet::new().with_number(Number::Plural).with_case(Case::Instrumental)
        );
    }

    #[test]
    fn test_accusative_one_yields_singular_accusative() {
        assert_eq!(numeral_agreement(&noun(Case::Accusative), 21, SINGULAR_GENITIVE), SINGULAR_ACCUSATIVE);
    }

    #[test]
    fn test_non_noun_gets_empty_set() {
        let mut n = noun(Case::Nominative);
        n.pos = PartOfSpeech::Numeral;
        assert!(numeral_agreement(&n, 5, SINGULAR_GENITIVE).is_empty());
    }

    #[test]
    fn test_grammeme_set_display() {
        assert_eq!(SINGULAR_ACCUSATIVE.to_string(), "{sing,accs}");
        assert_eq!(GrammemeSet::new().to_string(), "{}");
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("П’ять"), "п'ять");
        assert_eq!(normalize_word("МінутА"), "мінута");
    }
}
