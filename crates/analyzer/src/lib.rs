use crate::error::AnalyzerError;
use crate::grading::{Grade, GradingTable};
use analytics::MetricRecord;
use configuration::AnalysisSettings;
use std::fmt;

pub mod error;
pub mod grading;
pub mod output;

pub use output::{format_strategy, render_evaluations, summary_table, write_evaluations};

/// Number of graded metrics per record.
pub const GRADED_METRICS: usize = 20;

/// Overall verdict on whether a strategy could be deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suitability {
    Suitable,
    Considerable,
    Unsuitable,
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Suitability::Suitable => "Suitable for real market deployment (GOOD)",
            Suitability::Considerable => "May be considered for real market deployment (MEDIUM)",
            Suitability::Unsuitable => "Not suitable for real market deployment (BAD)",
        };
        f.write_str(text)
    }
}

/// The graded view of one metric record.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// One grade per metric, in CSV column order.
    pub grades: [Grade; GRADED_METRICS],
    pub good: usize,
    pub medium: usize,
    pub bad: usize,
    pub suitability: Suitability,
    /// `(good + 0.5 * medium) * 100 / 20`.
    pub score: f64,
}

impl Evaluation {
    pub fn good_pct(&self) -> f64 {
        percentage(self.good)
    }

    pub fn medium_pct(&self) -> f64 {
        percentage(self.medium)
    }

    pub fn bad_pct(&self) -> f64 {
        percentage(self.bad)
    }
}

fn percentage(count: usize) -> f64 {
    count as f64 * 100.0 / GRADED_METRICS as f64
}

/// A strategy singled out as best or worst, numbered from 1 in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedStrategy {
    pub number: usize,
    pub score: f64,
}

/// Evaluations for a whole dataset, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub evaluations: Vec<Evaluation>,
    /// First strategy with the strictly highest score.
    pub best: RankedStrategy,
    /// First strategy with the strictly lowest score.
    pub worst: RankedStrategy,
}

/// Grades metric records and judges each strategy's suitability.
#[derive(Debug, Clone)]
pub struct Analyzer {
    table: GradingTable,
    settings: AnalysisSettings,
}

impl Analyzer {
    pub fn new(settings: AnalysisSettings) -> Result<Self, AnalyzerError> {
        let table = GradingTable::with_overrides(&settings.overrides)?;
        Ok(Self { table, settings })
    }

    pub fn table(&self) -> &GradingTable {
        &self.table
    }

    /// Grades every metric of a record and derives its verdict.
    pub fn evaluate(&self, record: &MetricRecord) -> Evaluation {
        let values = record.values();
        let grades: [Grade; GRADED_METRICS] =
            std::array::from_fn(|i| self.table.grade(i, values[i].1));

        let count = |grade: Grade| grades.iter().filter(|g| **g == grade).count();
        let good = count(Grade::Good);
        let medium = count(Grade::Medium);
        let bad = count(Grade::Bad);

        let (good_pct, bad_pct) = (percentage(good), percentage(bad));
        // Exactly at the GOOD threshold is neither suitable nor considerable.
        let suitability = if good_pct > self.settings.suitable_good_pct {
            Suitability::Suitable
        } else if good_pct < self.settings.suitable_good_pct
            && bad_pct < self.settings.max_bad_pct
        {
            Suitability::Considerable
        } else {
            Suitability::Unsuitable
        };
        let score = (good as f64 + medium as f64 * 0.5) * 100.0 / GRADED_METRICS as f64;

        Evaluation {
            grades,
            good,
            medium,
            bad,
            suitability,
            score,
        }
    }

    /// Evaluates every record and picks out the best and worst strategies.
    pub fn run(&self, records: &[MetricRecord]) -> Result<AnalysisReport, AnalyzerError> {
        if records.is_empty() {
            return Err(AnalyzerError::NoRecords);
        }

        let evaluations: Vec<Evaluation> = records.iter().map(|r| self.evaluate(r)).collect();

        let first = RankedStrategy {
            number: 1,
            score: evaluations[0].score,
        };
        let (best, worst) = evaluations.iter().enumerate().skip(1).fold(
            (first, first),
            |(best, worst), (i, evaluation)| {
                let candidate = RankedStrategy {
                    number: i + 1,
                    score: evaluation.score,
                };
                (
                    if candidate.score > best.score { candidate } else { best },
                    if candidate.score < worst.score { candidate } else { worst },
                )
            },
        );

        tracing::info!(
            strategies = evaluations.len(),
            best = best.number,
            worst = worst.number,
            "Analysis complete"
        );
        Ok(AnalysisReport {
            evaluations,
            best,
            worst,
        })
    }
}
