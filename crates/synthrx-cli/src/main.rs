mod config;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use synthrx_core::DateWindow;
use synthrx_generate::{GenerateOptions, GenerationEngine, GenerationError};

use config::{ConfigError, FileConfig, load_config, parse_range};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "synthrx", version, about = "Synthetic patient cohort generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the patients, dispenses, and diagnoses tables.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of patient rows to synthesize.
    #[arg(long)]
    rows: Option<usize>,
    /// Output directory for the delimited files.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Seed for the run's random streams.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML config file; flags take precedence over file values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Patient birth-date window, e.g. 1940-01-01..1949-12-31.
    #[arg(long, value_name = "RANGE")]
    birth_dates: Option<String>,
    /// Dispense-history date window.
    #[arg(long, value_name = "RANGE")]
    dispense_dates: Option<String>,
    /// Diagnosis-history date window.
    #[arg(long, value_name = "RANGE")]
    diagnosis_dates: Option<String>,
}

fn main() -> Result<(), CliError> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let file = match &args.config {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };
    let options = merge_options(&args, file)?;
    tracing::info!(
        rows = options.rows,
        out_dir = %options.out_dir.display(),
        seed = options.seed,
        "options resolved"
    );

    let engine = GenerationEngine::new(options);
    let result = engine.run()?;

    for table in &result.report.tables {
        println!(
            "{}: {} rows -> {}",
            table.table,
            table.rows,
            result.out_dir.join(&table.file).display()
        );
    }
    println!(
        "run {} wrote {} bytes in {} ms (seed {})",
        result.report.run_id,
        result.report.bytes_written,
        result.report.duration_ms,
        result.report.seed
    );

    Ok(())
}

fn merge_options(args: &GenerateArgs, file: FileConfig) -> Result<GenerateOptions, ConfigError> {
    let defaults = GenerateOptions::default();
    Ok(GenerateOptions {
        rows: args.rows.or(file.rows).unwrap_or(defaults.rows),
        out_dir: args
            .out_dir
            .clone()
            .or(file.out_dir)
            .unwrap_or(defaults.out_dir),
        seed: args.seed.or(file.seed),
        patient_window: pick_window(
            args.birth_dates.as_deref(),
            file.patient_window,
            defaults.patient_window,
        )?,
        dispense_window: pick_window(
            args.dispense_dates.as_deref(),
            file.dispense_window,
            defaults.dispense_window,
        )?,
        diagnosis_window: pick_window(
            args.diagnosis_dates.as_deref(),
            file.diagnosis_window,
            defaults.diagnosis_window,
        )?,
    })
}

fn pick_window(
    flag: Option<&str>,
    file: Option<DateWindow>,
    default: DateWindow,
) -> Result<DateWindow, ConfigError> {
    match flag {
        Some(raw) => parse_range(raw),
        None => Ok(file.unwrap_or(default)),
    }
}
