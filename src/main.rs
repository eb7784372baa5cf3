use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

use flatpick::candidates::Candidates;
use flatpick::config::Config;
use flatpick::logging::init_logging;
use flatpick::{PickOutcome, Picker};

#[derive(Parser)]
#[command(name = "flatpick")]
#[command(about = "Pick the flat date to use for a light frame with no exact flat match")]
struct Cli {
    /// Light frame date (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    target: NaiveDate,
    /// Available flat dates (YYYY-MM-DD), in any order
    #[arg(value_parser = parse_date)]
    candidates: Vec<NaiveDate>,
    /// Filter name shown in the header
    #[arg(long, short = 'f', default_value = "unknown")]
    filter: String,
    /// Max older/newer dates to show [default: from config, else 5]
    #[arg(long, short = 'n')]
    limit: Option<usize>,
    /// Use numbered input instead of arrow keys
    #[arg(long)]
    simple: bool,
    /// Config file [default: ~/.flatpick/config.toml]
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,
    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::new()?,
    };

    let log_level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_file = cli.log_file.as_ref().or(config.logging.file.as_ref());
    init_logging(log_level, log_file.map(|p| p.as_path()))?;

    let candidates = Candidates::classify(cli.target, cli.candidates);
    if candidates.exact {
        tracing::debug!("Exact flat found for {}", cli.target);
        println!("{}", cli.target.format("%Y-%m-%d"));
        return Ok(());
    }

    let limit = cli.limit.unwrap_or(config.picker.limit);
    let mut picker = if cli.simple || config.tui_simple() {
        Picker::simple()
    } else {
        Picker::terminal()
    };

    match picker.pick_outcome(cli.target, &cli.filter, &candidates.older, &candidates.newer, limit) {
        PickOutcome::Selected(date) => println!("{}", date.format("%Y-%m-%d")),
        PickOutcome::Declined => eprintln!("{}", "No flat selected (rig changed)".yellow()),
        PickOutcome::NoCandidates => eprintln!(
            "{}",
            format!("No candidate flats for {} (filter: {})", cli.target, cli.filter)
                .as_str()
                .yellow()
        ),
    }

    Ok(())
}
