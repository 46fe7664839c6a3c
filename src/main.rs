use analyzer::{Analyzer, summary_table, write_evaluations};
use anyhow::{Context, Result};
use clap::Parser;
use configuration::ExecutionMode;
use dataset::{DatasetDriver, RandomTradeGenerator};
use std::path::PathBuf;
use std::process::ExitCode;

/// The main entry point for the trade statistics generator.
fn main() -> ExitCode {
    // Parse command-line arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // A wrong argument count is a usage error (exit 1); --help and
            // --version print to stdout and succeed.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = configuration::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match handle_generate(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Run failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Synthesizes random trade sequences and writes their performance metrics as CSV.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the CSV file to write (overwritten if it exists).
    output: PathBuf,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random generator, for reproducible datasets.
    #[arg(long)]
    seed: Option<u64>,

    /// How to schedule the per-sequence calculations.
    #[arg(long, value_enum)]
    execution: Option<ExecutionMode>,

    /// Also grade every strategy and write the evaluation CSV here.
    #[arg(long)]
    evaluation: Option<PathBuf>,
}

// ==============================================================================
// Generate Command Logic
// ==============================================================================

/// Handles the orchestration of one generate-compute-report run.
fn handle_generate(cli: Cli) -> Result<()> {
    let mut config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.generator.seed = Some(seed);
    }
    if let Some(mode) = cli.execution {
        config.execution = mode;
    }

    // Build the analyzer up front so bad overrides fail before any work is done.
    let analyzer = match &cli.evaluation {
        Some(_) => Some(Analyzer::new(config.analysis.clone())?),
        None => None,
    };

    let count = config.generator.sequence_count;
    let mut generator = RandomTradeGenerator::new(config.generator)?;
    let driver = DatasetDriver::new(config.execution);

    tracing::info!(sequences = count, output = %cli.output.display(), "Starting run");
    let records = driver.run(&mut generator, count)?;

    reporter::write_csv(&cli.output, &records)
        .with_context(|| format!("Failed to write metrics to {}", cli.output.display()))?;

    if let (Some(analyzer), Some(path)) = (analyzer, &cli.evaluation) {
        let report = analyzer.run(&records)?;
        write_evaluations(path, &report)?;
        println!("{}", summary_table(&report));
    }

    Ok(())
}
