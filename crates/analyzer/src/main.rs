use analyzer::{Analyzer, format_strategy, summary_table, write_evaluations};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Grades every strategy in a metrics CSV as GOOD, MEDIUM or BAD.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Metrics CSV produced by `tradestat`.
    input: PathBuf,

    /// Where to write the per-metric grades.
    output: PathBuf,

    /// Optional TOML file with grading thresholds and range overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Usage errors exit 1; --help and --version are not errors.
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

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Analysis failed");
            eprintln!("Error during analysis: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let analyzer = Analyzer::new(config.analysis)?;

    let records = reporter::read_csv(&cli.input)
        .with_context(|| format!("Failed to read metrics from {}", cli.input.display()))?;
    let report = analyzer.run(&records)?;
    write_evaluations(&cli.output, &report)?;

    for (i, evaluation) in report.evaluations.iter().enumerate() {
        println!("{}", format_strategy(i + 1, evaluation));
    }
    println!("{}", summary_table(&report));

    for (label, ranked) in [("Best", report.best), ("Worst", report.worst)] {
        let evaluation = &report.evaluations[ranked.number - 1];
        println!(
            "{} strategy: {}. Good - {:.2}%, Medium - {:.2}%, Bad - {:.2}%, bad metrics: {}",
            label,
            ranked.number,
            evaluation.good_pct(),
            evaluation.medium_pct(),
            evaluation.bad_pct(),
            evaluation.bad
        );
    }

    Ok(())
}
