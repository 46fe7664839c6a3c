use crate::error::AnalyzerError;
use crate::{AnalysisReport, Evaluation};
use analytics::FIELD_NAMES;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use std::fmt::Write as _;
use std::path::Path;

/// Renders the grade of every metric plus a trailing `Suitability` column.
pub fn render_evaluations(report: &AnalysisReport) -> Result<String, AnalyzerError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = FIELD_NAMES.to_vec();
    header.push("Suitability");
    wtr.write_record(&header)?;

    for evaluation in &report.evaluations {
        let mut row: Vec<String> = evaluation.grades.iter().map(|g| g.to_string()).collect();
        row.push(evaluation.suitability.to_string());
        wtr.write_record(&row)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| AnalyzerError::Flush(e.to_string()))?;
    Ok(String::from_utf8(data)?)
}

/// Writes the evaluation CSV to `path`, replacing any existing file.
pub fn write_evaluations(path: &Path, report: &AnalysisReport) -> Result<(), AnalyzerError> {
    let contents = render_evaluations(report)?;
    std::fs::write(path, contents).map_err(|source| AnalyzerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = report.evaluations.len(), "Wrote evaluations");
    Ok(())
}

/// Human-readable breakdown of one strategy, numbered from 1.
pub fn format_strategy(number: usize, evaluation: &Evaluation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Strategy: {}", number);
    for (metric, grade) in FIELD_NAMES.iter().zip(evaluation.grades.iter()) {
        let _ = writeln!(out, "{}: {}", metric, grade);
    }
    let _ = writeln!(out, "Suitability: {}", evaluation.suitability);
    let _ = writeln!(
        out,
        "Good - {:.2}%, Medium - {:.2}%, Bad - {:.2}%, bad metrics: {}",
        evaluation.good_pct(),
        evaluation.medium_pct(),
        evaluation.bad_pct(),
        evaluation.bad
    );
    let _ = writeln!(out, "Suitability Score: {:.2}%", evaluation.score);
    let _ = writeln!(
        out,
        "Number of GOOD metrics: {}, MEDIUM metrics: {}, BAD metrics: {}",
        evaluation.good, evaluation.medium, evaluation.bad
    );
    out
}

/// One row per strategy with its counts, score and verdict; best and worst are marked.
pub fn summary_table(report: &AnalysisReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Strategy",
        "Good",
        "Medium",
        "Bad",
        "Score",
        "Suitability",
        "",
    ]);

    for (i, evaluation) in report.evaluations.iter().enumerate() {
        let number = i + 1;
        let marker = if number == report.best.number {
            "best"
        } else if number == report.worst.number {
            "worst"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(number),
            Cell::new(evaluation.good),
            Cell::new(evaluation.medium),
            Cell::new(evaluation.bad),
            Cell::new(format!("{:.2}%", evaluation.score)),
            Cell::new(evaluation.suitability),
            Cell::new(marker),
        ]);
    }

    table
}
