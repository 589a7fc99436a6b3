//! CLI for parsing provider answers
//!
//! Reads a file (or stdin), runs one of the parsers and prints JSON on
//! stdout. Logs go to stderr.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use answer_structure::{
    AnswerParser, Deduplicator, DisplayLimits, GraphSummaryParser, ParserConfig,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "answer")]
#[command(about = "Turn free-form LLM answers into structured JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a challenges/solutions answer
    ParseAnswer {
        /// Input file, stdin when omitted
        file: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
        /// Apply display limits to the result
        #[arg(long)]
        capped: bool,
    },

    /// Parse a keyword/paper graph summary
    ParseGraph {
        /// Input file, stdin when omitted
        file: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
        /// Apply display limits to the result
        #[arg(long)]
        capped: bool,
        /// Similarity threshold for near-duplicate fragments (overrides
        /// ANSWER_SIMILARITY_THRESHOLD)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Drop near-duplicate lines, keeping first occurrences
    Dedupe {
        /// Input file, stdin when omitted
        file: Option<PathBuf>,
        /// Similarity threshold (overrides ANSWER_SIMILARITY_THRESHOLD)
        #[arg(long)]
        threshold: Option<f64>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,answer_structure=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ParseAnswer {
            file,
            pretty,
            capped,
        } => {
            let raw = read_input(file.as_deref())?;
            let mut parse = AnswerParser::new().parse(&raw);
            if capped {
                parse = parse.capped(&load_limits()?);
            }
            print_json(&parse, pretty)
        }
        Commands::ParseGraph {
            file,
            pretty,
            capped,
            threshold,
        } => {
            let config = load_config(threshold)?;
            let raw = read_input(file.as_deref())?;
            let mut summary = GraphSummaryParser::with_config(config).parse(&raw);
            if capped {
                summary = summary.capped(&load_limits()?);
            }
            print_json(&summary, pretty)
        }
        Commands::Dedupe { file, threshold } => {
            let config = load_config(threshold)?;
            let raw = read_input(file.as_deref())?;
            let kept = Deduplicator::from_config(&config).dedupe(raw.lines());
            for line in kept {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Environment config with the `--threshold` flag applied on top.
fn load_config(threshold: Option<f64>) -> Result<ParserConfig> {
    let mut config = ParserConfig::from_env().context("Invalid parser configuration")?;
    if let Some(threshold) = threshold {
        config = config.with_similarity_threshold(threshold);
        config.validate().context("Invalid --threshold value")?;
    }
    tracing::debug!(?config, "Loaded parser config");
    Ok(config)
}

fn load_limits() -> Result<DisplayLimits> {
    DisplayLimits::from_env().context("Invalid display limits")
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize result")?;
    println!("{json}");
    Ok(())
}
