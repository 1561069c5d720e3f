//! Dictionary-driven analyzer: every known lexeme lists its full paradigm.
//!
//! Dictionaries are JSON arrays.  Nouns list six singular and (optionally)
//! six plural forms; gendered numerals list six forms per gender.  Forms are
//! in case order nomn, gent, datv, accs, ablt, loct.
//!
//! ```json
//! [
//!   { "lemma": "минута", "gender": "femn",
//!     "singular": ["минута", "минуты", "минуте", "минуту", "минутой", "минуте"],
//!     "plural":   ["минуты", "минут", "минутам", "минуты", "минутами", "минутах"] },
//!   { "lemma": "два", "pos": "numr",
//!     "masculine": ["два", "двух", "двум", "два", "двумя", "двух"],
//!     "feminine":  ["две", "двух", "двум", "две", "двумя", "двух"],
//!     "neuter":    ["два", "двух", "двум", "два", "двумя", "двух"] }
//! ]
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use super::{
    normalize_word, numeral_agreement, Analysis, Case, Gender, GrammemeSet, Morphology, Number,
    PartOfSpeech, PLURAL_NOMINATIVE, SINGULAR_GENITIVE,
};
use crate::error::{Error, Result};
use crate::language::Language;

const RUSSIAN_DICTIONARY: &str = include_str!("../../data/ru.json");
const UKRAINIAN_DICTIONARY: &str = include_str!("../../data/uk.json");

// ─────────────────────────────────────────────────────────────────────────────
// Dictionary schema
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LexemeEntry {
    lemma: String,
    #[serde(default)]
    pos: PartOfSpeech,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    singular: Vec<String>,
    #[serde(default)]
    plural: Vec<String>,
    #[serde(default)]
    masculine: Vec<String>,
    #[serde(default)]
    feminine: Vec<String>,
    #[serde(default)]
    neuter: Vec<String>,
}

#[derive(Debug, Clone)]
enum Paradigm {
    Noun {
        singular: Vec<String>,
        plural: Option<Vec<String>>,
    },
    Gendered {
        masculine: Vec<String>,
        feminine: Vec<String>,
        neuter: Vec<String>,
    },
}

#[derive(Debug, Clone)]
struct Lexeme {
    lemma: String,
    gender: Option<Gender>,
    paradigm: Paradigm,
}

impl Lexeme {
    fn pos(&self) -> PartOfSpeech {
        match self.paradigm {
            Paradigm::Noun { .. } => PartOfSpeech::Noun,
            Paradigm::Gendered { .. } => PartOfSpeech::Numeral,
        }
    }
}

fn normalized_forms(lemma: &str, paradigm: &'static str, forms: Vec<String>) -> Result<Vec<String>> {
    if forms.len() != Case::ALL.len() {
        return Err(Error::ParadigmShape {
            lemma: lemma.to_string(),
            paradigm,
            expected: Case::ALL.len(),
            found: forms.len(),
        });
    }
    Ok(forms.iter().map(|f| normalize_word(f)).collect())
}

impl TryFrom<LexemeEntry> for Lexeme {
    type Error = Error;

    fn try_from(entry: LexemeEntry) -> Result<Self> {
        let lemma = normalize_word(&entry.lemma);
        let paradigm = match entry.pos {
            PartOfSpeech::Noun => Paradigm::Noun {
                singular: normalized_forms(&lemma, "singular", entry.singular)?,
                plural: if entry.plural.is_empty() {
                    None
                } else {
                    Some(normalized_forms(&lemma, "plural", entry.plural)?)
                },
            },
            PartOfSpeech::Numeral => Paradigm::Gendered {
                masculine: normalized_forms(&lemma, "masculine", entry.masculine)?,
                feminine: normalized_forms(&lemma, "feminine", entry.feminine)?,
                neuter: normalized_forms(&lemma, "neuter", entry.neuter)?,
            },
        };
        Ok(Self { lemma, gender: entry.gender, paradigm })
    }
}

/// Where a surface form sits inside a lexeme's paradigm.
#[derive(Debug, Clone, Copy)]
struct FormRef {
    lexeme: usize,
    case: Case,
    number: Option<Number>,
    gender: Option<Gender>,
}

// ─────────────────────────────────────────────────────────────────────────────
// DeclensionTable
// ─────────────────────────────────────────────────────────────────────────────

/// [`Morphology`] backed by explicit declension tables.
#[derive(Debug, Clone)]
pub struct DeclensionTable {
    language: Language,
    lexemes: Vec<Lexeme>,
    by_lemma: HashMap<String, usize>,
    by_form: HashMap<String, Vec<FormRef>>,
}

impl DeclensionTable {
    /// An empty table with the agreement rules of `language`.
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            lexemes: Vec::new(),
            by_lemma: HashMap::new(),
            by_form: HashMap::new(),
        }
    }

    /// The dictionary bundled with the crate for `language`.
    pub fn builtin(language: Language) -> Result<Self> {
        let json = match language {
            Language::Russian => RUSSIAN_DICTIONARY,
            Language::Ukrainian => UKRAINIAN_DICTIONARY,
        };
        Self::from_json(language, json)
    }

    pub fn from_json(language: Language, json: &str) -> Result<Self> {
        let mut table = Self::empty(language);
        table.extend_from_json(json)?;
        Ok(table)
    }

    /// Merge more lexemes in.  An entry whose lemma is already known replaces
    /// the earlier paradigm.
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let entries: Vec<LexemeEntry> = serde_json::from_str(json)?;
        for entry in entries {
            let lexeme = Lexeme::try_from(entry)?;
            match self.by_lemma.get(&lexeme.lemma) {
                Some(&idx) => self.lexemes[idx] = lexeme,
                None => {
                    self.by_lemma.insert(lexeme.lemma.clone(), self.lexemes.len());
                    self.lexemes.push(lexeme);
                }
            }
        }
        self.reindex();
        Ok(())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    fn reindex(&mut self) {
        let mut by_form: HashMap<String, Vec<FormRef>> = HashMap::new();
        for (idx, lexeme) in self.lexemes.iter().enumerate() {
            let mut add = |forms: &[String], number: Option<Number>, gender: Option<Gender>| {
                for (form, case) in forms.iter().zip(Case::ALL) {
                    by_form
                        .entry(form.clone())
                        .or_default()
                        .push(FormRef { lexeme: idx, case, number, gender });
                }
            };
            match &lexeme.paradigm {
                Paradigm::Noun { singular, plural } => {
                    add(singular.as_slice(), Some(Number::Singular), lexeme.gender);
                    if let Some(plural) = plural {
                        add(plural.as_slice(), Some(Number::Plural), lexeme.gender);
                    }
                }
                Paradigm::Gendered { masculine, feminine, neuter } => {
                    add(masculine.as_slice(), None, Some(Gender::Masculine));
                    add(feminine.as_slice(), None, Some(Gender::Feminine));
                    add(neuter.as_slice(), None, Some(Gender::Neuter));
                }
            }
        }
        self.by_form = by_form;
    }

    fn analysis(&self, word: String, form: &FormRef) -> Analysis {
        let lexeme = &self.lexemes[form.lexeme];
        Analysis {
            word,
            lemma: lexeme.lemma.clone(),
            pos: lexeme.pos(),
            case: Some(form.case),
            gender: form.gender,
            number: form.number,
        }
    }
}

impl Morphology for DeclensionTable {
    fn parse(&self, word: &str) -> Option<Analysis> {
        let key = normalize_word(word);
        let forms = self.by_form.get(&key)?;
        let form = forms
            .iter()
            .find(|f| f.case == Case::Nominative)
            .or_else(|| forms.first())?;
        Some(self.analysis(key, form))
    }

    fn inflect(&self, analysis: &Analysis, grammemes: &GrammemeSet) -> Option<Analysis> {
        let &idx = self.by_lemma.get(&analysis.lemma)?;
        let lexeme = &self.lexemes[idx];
        let case = grammemes.case.or(analysis.case).unwrap_or(Case::Nominative);

        match &lexeme.paradigm {
            Paradigm::Noun { singular, plural } => {
                if grammemes.gender.is_some() && grammemes.gender != lexeme.gender {
                    return None;
                }
                let number = grammemes.number.or(analysis.number).unwrap_or(Number::Singular);
                let forms = match number {
                    Number::Singular => singular,
                    Number::Plural => plural.as_ref()?,
                };
                Some(Analysis {
                    word: forms[case.index()].clone(),
                    lemma: lexeme.lemma.clone(),
                    pos: PartOfSpeech::Noun,
                    case: Some(case),
                    gender: lexeme.gender,
                    number: Some(number),
                })
            }
            Paradigm::Gendered { masculine, feminine, neuter } => {
                if grammemes.number == Some(Number::Plural) {
                    return None;
                }
                let gender = grammemes.gender.or(analysis.gender).unwrap_or(Gender::Masculine);
                let forms = match gender {
                    Gender::Masculine => masculine,
                    Gender::Feminine => feminine,
                    Gender::Neuter => neuter,
                };
                Some(Analysis {
                    word: forms[case.index()].clone(),
                    lemma: lexeme.lemma.clone(),
                    pos: PartOfSpeech::Numeral,
                    case: Some(case),
                    gender: Some(gender),
                    number: None,
                })
            }
        }
    }

    fn agreement_grammemes(&self, analysis: &Analysis, count: u64) -> GrammemeSet {
        let few = match self.language {
            Language::Russian => SINGULAR_GENITIVE,
            Language::Ukrainian => PLURAL_NOMINATIVE,
        };
        numeral_agreement(analysis, count, few)
    }

    fn fraction_agreement_grammemes(&self, analysis: &Analysis) -> GrammemeSet {
        numeral_agreement(analysis, 2, SINGULAR_GENITIVE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::{Quantity, SINGULAR_ACCUSATIVE};

    fn ru() -> DeclensionTable {
        DeclensionTable::builtin(Language::Russian).unwrap()
    }

    fn uk() -> DeclensionTable {
        DeclensionTable::builtin(Language::Ukrainian).unwrap()
    }

    fn agree(table: &DeclensionTable, word: &str, count: u64) -> String {
        let a = table.parse(word).unwrap();
        let g = table.agreement_grammemes(&a, count);
        table.inflect(&a, &g).unwrap().word
    }

    #[test]
    fn test_builtin_dictionaries_load() {
        assert!(ru().len() > 20);
        assert!(uk().len() > 20);
    }

    #[test]
    fn test_parse_prefers_nominative() {
        let a = ru().parse("минуты").unwrap();
        assert_eq!(a.case, Some(Case::Nominative));
        assert_eq!(a.number, Some(Number::Plural));
        assert_eq!(a.gender, Some(Gender::Feminine));
        assert_eq!(a.lemma, "минута");
    }

    #[test]
    fn test_parse_falls_back_to_first_reading() {
        let a = ru().parse("минуту").unwrap();
        assert_eq!(a.case, Some(Case::Accusative));
    }

    #[test]
    fn test_parse_unknown_word() {
        assert!(ru().parse("квазар").is_none());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ru().parse("Градус").unwrap().word, "градус");
    }

    #[test]
    fn test_inflect_numeral_gender() {
        let t = ru();
        let one = t.parse("один").unwrap();
        let fem = GrammemeSet::new().with_gender(Gender::Feminine).with_case(Case::Nominative);
        assert_eq!(t.inflect(&one, &fem).unwrap().word, "одна");
        let two = t.parse("два").unwrap();
        assert_eq!(t.inflect(&two, &fem).unwrap().word, "две");
        let neut = GrammemeSet::new().with_gender(Gender::Neuter);
        assert_eq!(t.inflect(&one, &neut).unwrap().word, "одно");

        let u = uk();
        let two = u.parse("два").unwrap();
        assert_eq!(u.inflect(&two, &fem).unwrap().word, "дві");
    }

    #[test]
    fn test_inflect_rejects_gender_change_on_noun() {
        let t = ru();
        let a = t.parse("градус").unwrap();
        assert!(t.inflect(&a, &GrammemeSet::new().with_gender(Gender::Feminine)).is_none());
    }

    #[test]
    fn test_russian_agreement() {
        let t = ru();
        assert_eq!(agree(&t, "яблоко", 1), "яблоко");
        assert_eq!(agree(&t, "яблоко", 22), "яблока");
        assert_eq!(agree(&t, "яблоко", 5), "яблок");
        assert_eq!(agree(&t, "год", 5), "лет");
        assert_eq!(agree(&t, "человек", 3), "человека");
    }

    #[test]
    fn test_ukrainian_few_takes_plural_nominative() {
        let t = uk();
        assert_eq!(agree(&t, "градус", 2), "градуси");
        assert_eq!(agree(&t, "хвилина", 3), "хвилини");
        assert_eq!(agree(&t, "хвилина", 5), "хвилин");
        assert_eq!(agree(&t, "відсоток", 21), "відсоток");
    }

    #[test]
    fn test_fraction_agreement_is_genitive_singular() {
        for (t, word, expected) in [(ru(), "градус", "градуса"), (uk(), "градус", "градуса")] {
            let a = t.parse(word).unwrap();
            let g = t.fraction_agreement_grammemes(&a);
            assert_eq!(t.inflect(&a, &g).unwrap().word, expected);
        }
    }

    #[test]
    fn test_scale_word_agreement() {
        let t = ru();
        assert_eq!(t.scale_word_agreeing_with("тысяча", 1).unwrap(), "тысяча");
        assert_eq!(t.scale_word_agreeing_with("тысяча", 3).unwrap(), "тысячи");
        assert_eq!(t.scale_word_agreeing_with("тысяча", 0).unwrap(), "тысяч");
        assert_eq!(t.scale_word_agreeing_with("миллион", 2).unwrap(), "миллиона");
        assert_eq!(t.scale_word_agreeing_with("миллиард", 11).unwrap(), "миллиардов");

        let u = uk();
        assert_eq!(u.scale_word_agreeing_with("тисяча", 4).unwrap(), "тисячі");
        assert_eq!(u.scale_word_agreeing_with("мільйон", 7).unwrap(), "мільйонів");
    }

    #[test]
    fn test_parse_counted_rereads_agreed_genitive() {
        let t = ru();
        let a = t.parse_counted("часа", Quantity::Count(2)).unwrap();
        assert_eq!(a.case, Some(Case::Nominative));
        assert_eq!(a.word, "час");

        let a = t.parse_counted("минут", Quantity::Count(5)).unwrap();
        assert_eq!(a.word, "минута");

        // Instrumental is not a count form, so it is kept.
        let a = t.parse_counted("минутами", Quantity::Count(5)).unwrap();
        assert_eq!(a.case, Some(Case::Instrumental));

        let a = t.parse_counted("часа", Quantity::Fraction).unwrap();
        assert_eq!(a.word, "час");
    }

    #[test]
    fn test_accusative_only_word() {
        let t = ru();
        let a = t.parse("минуту").unwrap();
        assert_eq!(t.agreement_grammemes(&a, 1), SINGULAR_ACCUSATIVE);
    }

    #[test]
    fn test_extension_replaces_lemma() {
        let mut t = ru();
        let before = t.len();
        t.extend_from_json(
            r#"[{"lemma":"балл","gender":"masc",
                 "singular":["балл","балла","баллу","балл","баллом","балле"],
                 "plural":["баллы","баллов","баллам","баллы","баллами","баллах"]}]"#,
        )
        .unwrap();
        assert_eq!(t.len(), before + 1);
        assert_eq!(agree(&t, "балл", 5), "баллов");

        t.extend_from_json(
            r#"[{"lemma":"балл","gender":"masc",
                 "singular":["балл","балла","баллу","балл","баллом","балле"]}]"#,
        )
        .unwrap();
        assert_eq!(t.len(), before + 1);
        let a = t.parse("балл").unwrap();
        assert!(t.inflect(&a, &GrammemeSet::new().with_number(Number::Plural)).is_none());
    }

    #[test]
    fn test_malformed_paradigm() {
        let err = DeclensionTable::from_json(
            Language::Russian,
            r#"[{"lemma":"кот","singular":["кот","кота"]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ParadigmShape { expected: 6, found: 2, .. }));
    }
}
