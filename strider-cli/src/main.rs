//! Strider CLI
//!
//! Command-line interface for the strider string matching automaton.

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use strider_dfa::{build, DfaConfig, Symbol};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::render::SearchOutcome;

#[derive(Parser)]
#[command(name = "strider")]
#[command(about = "Strider - find every occurrence of a pattern with a full-alphabet DFA", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the alphabet size
    #[arg(long, global = true)]
    alphabet_size: Option<usize>,

    /// Build tables with the naive longest-suffix scan
    #[arg(long, global = true)]
    naive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every occurrence of a pattern in a text
    Search {
        /// Pattern to look for
        #[arg(short, long)]
        pattern: String,

        /// Text to scan
        #[arg(short, long, required_unless_present = "text_file", conflicts_with = "text_file")]
        text: Option<String>,

        /// Read the text to scan from a file
        #[arg(long)]
        text_file: Option<PathBuf>,

        /// Stop after this many matches
        #[arg(long)]
        limit: Option<usize>,

        /// How text is split into symbols
        #[arg(short, long, value_enum, default_value_t = Unit::Char)]
        unit: Unit,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Show the transition table built for a pattern
    Table {
        /// Pattern to build the automaton for
        #[arg(short, long)]
        pattern: String,

        /// How the pattern is split into symbols
        #[arg(short, long, value_enum, default_value_t = Unit::Char)]
        unit: Unit,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

/// Symbol unit for patterns and texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unit {
    /// Unicode scalar values; positions count characters
    Char,
    /// Raw UTF-8 bytes; positions count bytes
    Byte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config = config::load_config(cli.config.as_deref())?;
    let config = config::apply_overrides(config, cli.alphabet_size, cli.naive)?;

    match cli.command {
        Commands::Search {
            pattern,
            text,
            text_file,
            limit,
            unit,
            format,
        } => {
            let text = read_text(text, text_file.as_deref())?;
            let outcome = match unit {
                Unit::Char => {
                    let pattern_symbols: Vec<char> = pattern.chars().collect();
                    let text_symbols: Vec<char> = text.chars().collect();
                    run_search(&config, &pattern, &pattern_symbols, &text_symbols, limit)?
                }
                Unit::Byte => run_search(&config, &pattern, pattern.as_bytes(), text.as_bytes(), limit)?,
            };
            print_output(format, &outcome, render::render_search)?;
        }
        Commands::Table {
            pattern,
            unit,
            format,
        } => {
            let compiled = match unit {
                Unit::Char => {
                    let symbols: Vec<char> = pattern.chars().collect();
                    build(&symbols, &config)
                }
                Unit::Byte => build(pattern.as_bytes(), &config),
            }
            .with_context(|| format!("Failed to build automaton for '{}'", pattern))?;

            let report = compiled.describe()?;
            print_output(format, &report, render::render_report)?;
        }
    }

    Ok(())
}

fn setup_logging(level: &str) -> Result<()> {
    let level = level.parse::<Level>().unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}

fn read_text(text: Option<String>, text_file: Option<&Path>) -> Result<String> {
    match (text, text_file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file {}", path.display())),
        (None, None) => anyhow::bail!("No text supplied; use --text or --text-file"),
    }
}

fn run_search<S: Symbol>(
    config: &DfaConfig,
    label: &str,
    pattern: &[S],
    text: &[S],
    limit: Option<usize>,
) -> Result<SearchOutcome> {
    let compiled = build(pattern, config)
        .with_context(|| format!("Failed to build automaton for '{}'", label))?;

    let matches = match limit {
        Some(max) => compiled.search_limit(text, max),
        None => compiled.search(text),
    }
    .context("Search failed")?;

    info!(
        pattern_len = pattern.len(),
        text_len = text.len(),
        matches = matches.len(),
        "Search complete"
    );

    Ok(SearchOutcome::new(
        label.to_string(),
        pattern.len(),
        text.len(),
        &matches,
        limit,
    ))
}

fn print_output<T: serde::Serialize>(
    format: Format,
    value: &T,
    render: fn(&T) -> String,
) -> Result<()> {
    match format {
        Format::Text => print!("{}", render(value)),
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
