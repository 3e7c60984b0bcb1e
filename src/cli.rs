//! Command-line interface components.

use crate::config::LocalizationConfig;
use crate::constants::DEFAULT_KEY_HEADER;
use crate::reader;
use crate::source::load_sheet_file;
use crate::table::LanguageTable;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lingua-table")]
#[command(about = "Inspect a CSV translation sheet: list languages, dump entries, look up keys")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the translation sheet
    #[arg(value_name = "SHEET_PATH")]
    pub sheet_path: PathBuf,

    /// Key to look up; prints the translation in the selected language
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    /// Language column to serve (defaults to the first one in the sheet)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Header of the column holding the language-independent keys
    #[arg(long, default_value = DEFAULT_KEY_HEADER)]
    pub key_header: String,

    /// List the languages the sheet supports and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Dump every key/value pair for the selected language
    #[arg(long)]
    pub all: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Load the sheet named by the arguments and run the requested query
pub fn run(args: &Args) -> Result<()> {
    let text = load_sheet_file(&args.sheet_path)
        .with_context(|| format!("Failed to read {}", args.sheet_path.display()))?;

    let config = LocalizationConfig::default().with_key_header(&args.key_header);
    let mut table = LanguageTable::build(&reader::read(&text), &config)
        .with_context(|| format!("Failed to build table from {}", args.sheet_path.display()))?;

    // An explicit --language must exist in the sheet; unlike a startup
    // hint there is nothing sensible to fall back to.
    if let Some(language) = &args.language {
        table.set_language(language)?;
    }

    if args.list_languages {
        print_languages(&table);
        return Ok(());
    }

    if let Some(key) = &args.key {
        println!("{}", table.get(key)?);
        return Ok(());
    }

    if args.all {
        print_entries(&table);
        return Ok(());
    }

    print_summary(&args.sheet_path, &table);
    Ok(())
}

fn print_languages(table: &LanguageTable) {
    for language in table.supported_languages() {
        let mut markers = Vec::new();
        if Some(language.as_str()) == table.default_language() {
            markers.push("default");
        }
        if Some(language.as_str()) == table.current_language() {
            markers.push("current");
        }
        if markers.is_empty() {
            println!("  {}", language.bright_cyan());
        } else {
            println!(
                "  {} {}",
                language.bright_cyan(),
                format!("({})", markers.join(", ")).bright_black()
            );
        }
    }
}

fn print_entries(table: &LanguageTable) {
    let mut keys: Vec<&str> = table.keys().collect();
    keys.sort_unstable();
    for key in keys {
        // Keys come straight from the entries map, so the lookup
        // cannot miss.
        let value = table.get(key).unwrap_or_default();
        println!("{} = {}", key.bright_yellow(), value);
    }
}

fn print_summary(path: &std::path::Path, table: &LanguageTable) {
    println!(
        "{} {}",
        "Sheet:".bright_green().bold(),
        path.display().to_string().bright_cyan()
    );
    println!(
        "  {} entries in '{}' ({} languages)",
        table.len(),
        table.current_language().unwrap_or("<none>"),
        table.supported_languages().len()
    );
    print_languages(table);
}
