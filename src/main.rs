//! CLI entry point for the bikeshare explorer.
//!
//! Without `--city` the tool runs the interactive prompt loop. With `--city` it performs a single
//! run and prints the reports as text or JSON.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bikeshare_stats::console::{Prompter, interactive, render};
use bikeshare_stats::ingestion::{IngestionOptions, TracingObserver};
use bikeshare_stats::pipeline::{self, Reports};
use bikeshare_stats::selectors::{City, Month, Selection, UserDay};
use bikeshare_stats::trips::LoadOptions;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bike-share trip data", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Log level or filter directive (e.g. "debug", "bikeshare_stats=trace")
    #[arg(long, env = "BIKESHARE_LOG", default_value = "warn")]
    log_level: String,

    /// Output format for a single run
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Analyse this city once instead of prompting
    #[arg(long)]
    city: Option<City>,

    /// Only trips in this month (january through june)
    #[arg(long, requires = "city")]
    month: Option<Month>,

    /// Only trips on this day, 1 = Sunday ... 7 = Saturday
    #[arg(long, requires = "city")]
    day: Option<UserDay>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    selection: &'a Selection,
    loaded_rows: usize,
    filtered_rows: usize,
    reports: &'a Reports,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let options = LoadOptions {
        data_dir: cli.data_dir.clone(),
        ingestion: IngestionOptions {
            observer: Some(Arc::new(TracingObserver)),
            ..Default::default()
        },
    };
    info!(data_dir = %options.data_dir.display(), "starting");

    match cli.city {
        Some(city) => {
            let selection = Selection {
                city,
                month: cli.month,
                day: cli.day,
            };
            run_once(&selection, &options, cli.format)
        }
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            interactive(&mut prompter, &options).context("console session failed")
        }
    }
}

fn run_once(selection: &Selection, options: &LoadOptions, format: OutputFormat) -> Result<()> {
    let run = pipeline::run(selection, options)?;
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => render::write_reports(&mut out, &run.reports)?,
        OutputFormat::Json => {
            let summary = RunSummary {
                selection: &run.selection,
                loaded_rows: run.loaded_rows,
                filtered_rows: run.filtered_rows,
                reports: &run.reports,
            };
            serde_json::to_writer_pretty(&mut out, &summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
