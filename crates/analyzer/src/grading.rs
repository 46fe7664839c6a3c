use crate::error::AnalyzerError;
use analytics::FIELD_NAMES;
use configuration::{MetricRange, RangeOverride};
use std::fmt;

const INF: f64 = f64::INFINITY;

/// Built-in GOOD / MEDIUM ranges, in `FIELD_NAMES` order.
const DEFAULT_RANGES: [(MetricRange, MetricRange); 20] = [
    // Max Drawdown
    (MetricRange::new(0.0, 1000.0), MetricRange::new(1000.0, 3000.0)),
    // Average Duration
    (MetricRange::new(50.0, 400.0), MetricRange::new(400.0, 600.0)),
    // Max Duration
    (MetricRange::new(100.0, 1000.0), MetricRange::new(1000.0, 1500.0)),
    // Recovery Factor
    (MetricRange::new(1.0, INF), MetricRange::new(0.5, 1.0)),
    // Sharpe Ratio
    (MetricRange::new(1.0, INF), MetricRange::new(0.5, 1.0)),
    // Sortino Ratio
    (MetricRange::new(1.0, INF), MetricRange::new(0.5, 1.0)),
    // Calmar Ratio
    (MetricRange::new(1.0, INF), MetricRange::new(0.5, 1.0)),
    // Profit Factor
    (MetricRange::new(1.5, INF), MetricRange::new(1.0, 1.5)),
    // Win Rate
    (MetricRange::new(0.6, 1.0), MetricRange::new(0.5, 0.6)),
    // Loss Rate
    (MetricRange::new(0.0, 0.4), MetricRange::new(0.4, 0.5)),
    // Average Win
    (MetricRange::new(0.0, INF), MetricRange::new(0.0, 0.0)),
    // Average Loss
    (MetricRange::new(-INF, 0.0), MetricRange::new(0.0, 0.0)),
    // Max Consecutive Wins
    (MetricRange::new(1.0, INF), MetricRange::new(0.0, 0.0)),
    // Max Consecutive Losses
    (MetricRange::new(0.0, 3.0), MetricRange::new(3.0, 5.0)),
    // Expectancy
    (MetricRange::new(0.0, INF), MetricRange::new(0.0, 0.0)),
    // Volatility
    (MetricRange::new(0.0, 500.0), MetricRange::new(500.0, 1000.0)),
    // Annualized Return
    (MetricRange::new(0.1, INF), MetricRange::new(0.0, 0.1)),
    // Trading Frequency
    (MetricRange::new(10.0, INF), MetricRange::new(5.0, 10.0)),
    // Turnover Rate
    (MetricRange::new(0.0, INF), MetricRange::new(0.0, 0.0)),
    // Total Profit
    (MetricRange::new(1000.0, INF), MetricRange::new(0.0, 1000.0)),
];

/// Classification of a single metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Good,
    Medium,
    Bad,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::Good => "GOOD",
            Grade::Medium => "MEDIUM",
            Grade::Bad => "BAD",
        };
        f.write_str(label)
    }
}

/// GOOD and MEDIUM ranges for each of the 20 metrics.
///
/// A value inside the GOOD range grades GOOD even when the MEDIUM range also
/// contains it; anything outside both is BAD.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingTable {
    ranges: [(MetricRange, MetricRange); 20],
}

impl Default for GradingTable {
    fn default() -> Self {
        Self {
            ranges: DEFAULT_RANGES,
        }
    }
}

impl GradingTable {
    /// The default table with the given per-metric replacements applied in order.
    pub fn with_overrides(overrides: &[RangeOverride]) -> Result<Self, AnalyzerError> {
        let mut table = Self::default();
        for entry in overrides {
            let index = FIELD_NAMES
                .iter()
                .position(|name| *name == entry.metric)
                .ok_or_else(|| AnalyzerError::UnknownMetric(entry.metric.clone()))?;

            if let Some(good) = entry.good {
                table.ranges[index].0 = good;
            }
            if let Some(medium) = entry.medium {
                table.ranges[index].1 = medium;
            }
            tracing::debug!(metric = %entry.metric, "Applied grading range override");
        }
        Ok(table)
    }

    /// The (GOOD, MEDIUM) ranges of a metric, by column name.
    pub fn ranges(&self, metric: &str) -> Option<(MetricRange, MetricRange)> {
        FIELD_NAMES
            .iter()
            .position(|name| *name == metric)
            .map(|index| self.ranges[index])
    }

    /// Grades the value of the metric at `index` in `FIELD_NAMES` order.
    pub fn grade(&self, index: usize, value: f64) -> Grade {
        let (good, medium) = self.ranges[index];
        if good.contains(value) {
            Grade::Good
        } else if medium.contains(value) {
            Grade::Medium
        } else {
            Grade::Bad
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(metric: &str) -> usize {
        FIELD_NAMES.iter().position(|name| *name == metric).unwrap()
    }

    #[test]
    fn test_default_grades() {
        let table = GradingTable::default();

        assert_eq!(table.grade(index_of("Max Drawdown"), 500.0), Grade::Good);
        assert_eq!(table.grade(index_of("Max Drawdown"), 2000.0), Grade::Medium);
        assert_eq!(table.grade(index_of("Max Drawdown"), 5000.0), Grade::Bad);
        assert_eq!(table.grade(index_of("Sharpe Ratio"), f64::INFINITY), Grade::Good);
        assert_eq!(table.grade(index_of("Sharpe Ratio"), 0.7), Grade::Medium);
        assert_eq!(table.grade(index_of("Sharpe Ratio"), -0.2), Grade::Bad);
        assert_eq!(table.grade(index_of("Average Loss"), -250.0), Grade::Good);
        assert_eq!(table.grade(index_of("Max Consecutive Losses"), 4.0), Grade::Medium);
    }

    #[test]
    fn test_boundaries_prefer_good() {
        let table = GradingTable::default();

        // 1000 sits in both the GOOD and MEDIUM drawdown ranges.
        assert_eq!(table.grade(index_of("Max Drawdown"), 1000.0), Grade::Good);
        assert_eq!(table.grade(index_of("Win Rate"), 0.6), Grade::Good);
        assert_eq!(table.grade(index_of("Win Rate"), 0.5), Grade::Medium);
    }

    #[test]
    fn test_nan_is_bad() {
        let table = GradingTable::default();
        assert_eq!(table.grade(index_of("Expectancy"), f64::NAN), Grade::Bad);
    }

    #[test]
    fn test_overrides() {
        let table = GradingTable::with_overrides(&[RangeOverride {
            metric: "Volatility".to_string(),
            good: None,
            medium: Some(MetricRange::new(500.0, 2000.0)),
        }])
        .unwrap();

        let (good, medium) = table.ranges("Volatility").unwrap();
        assert_eq!(good, MetricRange::new(0.0, 500.0));
        assert_eq!(medium, MetricRange::new(500.0, 2000.0));
        assert_eq!(table.grade(index_of("Volatility"), 1500.0), Grade::Medium);
    }

    #[test]
    fn test_unknown_override_is_rejected() {
        let err = GradingTable::with_overrides(&[RangeOverride {
            metric: "Omega Ratio".to_string(),
            good: None,
            medium: None,
        }])
        .unwrap_err();

        assert!(matches!(err, AnalyzerError::UnknownMetric(name) if name == "Omega Ratio"));
    }

    #[test]
    fn test_grade_labels() {
        assert_eq!(Grade::Good.to_string(), "GOOD");
        assert_eq!(Grade::Medium.to_string(), "MEDIUM");
        assert_eq!(Grade::Bad.to_string(), "BAD");
    }
}
