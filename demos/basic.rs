//! Basic chislo example: normalizes a few sentences in both languages.
//!
//! Usage:
//!   cargo run --example basic
//!   cargo run --example basic -- --lang uk --text "Надворі +3°C"

use chislo::{Language, LanguageProcessor, TextNormalizer};

fn main() -> anyhow::Result<()> {
    // ── Parse simple CLI arguments ───────────────────────────────────────────
    let mut args = std::env::args().skip(1);

    let mut lang = None;
    let mut text = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => { if let Some(v) = args.next() { lang = Some(v); } }
            "--text" => { if let Some(v) = args.next() { text = Some(v); } }
            "--help" => {
                println!("Usage: basic [--lang ru|uk] [--text TEXT]");
                return Ok(());
            }
            _ => {}
        }
    }

    let normalizer = TextNormalizer::new()?;

    // ── Single input ─────────────────────────────────────────────────────────
    if let Some(text) = text {
        let lang = lang.unwrap_or_else(|| "ru".to_string());
        println!("{}", normalizer.preprocess(&text, &lang)?);
        return Ok(());
    }

    // ── Built-in samples ─────────────────────────────────────────────────────
    let samples = [
        ("ru", "Сегодня -5.5°C, влажность 10%, а в корзине 3 яблока."),
        ("ru", "Поезд прибудет через 21 минуту, билет стоит 1500 рублей."),
        ("ru", "Население: 2500000 человек, рост 2,5%."),
        ("uk", "Зараз +3°C, через 2 хвилина почнеться дощ."),
        ("uk", "Ціна зросла на 1,25% за 5 днів."),
    ];
    for (code, sample) in samples {
        println!("[{code}] {sample}");
        println!("     {}", normalizer.preprocess(sample, code)?);
    }

    // ── Engine pieces ────────────────────────────────────────────────────────
    let ru = LanguageProcessor::new(Language::Russian)?;
    println!();
    println!("1 000 001 000 → {}", ru.integer_to_words(1_000_001_000, None)?.join(" "));
    println!("22,5          → {}", ru.float_to_words(22, 5, 1)?.join(" "));
    println!("5 + минута    → {}", ru.agreeing_form_of(5, "минута"));

    Ok(())
}
