//! chislo CLI - normalize Russian / Ukrainian text for speech synthesis
//!
//! Usage:
//!   chislo --text "Сейчас -5°C"
//!   echo "Через 2 хвилина" | chislo --lang uk
//!   chislo --config chislo.json < input.txt

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use chislo::{load_config, NormalizerConfig};

#[derive(Parser)]
#[command(name = "chislo")]
#[command(version)]
#[command(about = "Spell out numbers in Russian and Ukrainian text", long_about = None)]
struct Cli {
    /// Text to normalize (reads stdin line by line when omitted)
    #[arg(short, long)]
    text: Option<String>,

    /// Language code (ru, uk); overrides the config file
    #[arg(short, long)]
    lang: Option<String>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose output (log skipped literals and morphology fallbacks)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match cli.config.as_deref() {
        Some(path) => load_config(Path::new(path))?,
        None => NormalizerConfig::default(),
    };
    let language = cli.lang.unwrap_or_else(|| config.language.clone());
    let normalizer = config.build()?;

    if let Some(text) = cli.text {
        println!("{}", normalizer.preprocess(&text, &language)?);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        writeln!(stdout, "{}", normalizer.preprocess(&line, &language)?)?;
    }
    Ok(())
}
