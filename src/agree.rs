//! Noun agreement: put the words after a number into the form the number
//! demands (`5 минута` → `5 минут`).

use tracing::debug;

use crate::morph::{GrammemeSet, Morphology, Quantity, SINGULAR_ACCUSATIVE};

/// Agree every token of `phrase` with the whole count `count`.
pub fn agreeing_form_of(morph: &dyn Morphology, count: u64, phrase: &str) -> String {
    agree_phrase(morph, phrase, Quantity::Count(count))
}

/// Agree every token of `phrase` with a decimal quantity.
pub fn fraction_form_of(morph: &dyn Morphology, phrase: &str) -> String {
    agree_phrase(morph, phrase, Quantity::Fraction)
}

fn agree_phrase(morph: &dyn Morphology, phrase: &str, quantity: Quantity) -> String {
    phrase
        .split_whitespace()
        .map(|token| agree_token(morph, token, quantity))
        .collect::<Vec<_>>()
        .join(" ")
}

fn agree_token(morph: &dyn Morphology, token: &str, quantity: Quantity) -> String {
    let Some(analysis) = morph.parse_counted(token, quantity) else {
        debug!(token, "no analysis, keeping token");
        return token.to_string();
    };

    let mut grammemes = morph.grammemes_for(&analysis, quantity);
    // A bare count never governs the accusative; keep the sentence's case.
    if grammemes == SINGULAR_ACCUSATIVE {
        grammemes = GrammemeSet { case: analysis.case, ..grammemes };
    }

    match morph.inflect(&analysis, &grammemes) {
        Some(form) => match_capitalization(token, form.word),
        None => {
            debug!(token, %grammemes, "inflection failed, keeping token");
            token.to_string()
        }
    }
}

/// Re-apply an uppercase first letter from `original` onto `word`.
fn match_capitalization(original: &str, word: String) -> String {
    if !original.chars().next().is_some_and(char::is_uppercase) {
        return word;
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => word,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
