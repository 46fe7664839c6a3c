use serde::Deserialize;

/// Settings for grading metric rows and judging strategy suitability.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// A strategy is suitable when strictly more than this percentage of its
    /// metrics grade GOOD.
    pub suitable_good_pct: f64,
    /// Otherwise it may be considered when strictly less than this percentage
    /// of its metrics grade BAD.
    pub max_bad_pct: f64,
    /// Replacements for the built-in grading ranges, keyed by CSV column name.
    pub overrides: Vec<RangeOverride>,
}

/// Replaces the GOOD and/or MEDIUM range of a single metric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RangeOverride {
    /// The metric's CSV column name, e.g. "Max Drawdown".
    pub metric: String,
    pub good: Option<MetricRange>,
    pub medium: Option<MetricRange>,
}

/// An inclusive `[min, max]` interval. Either bound may be infinite.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

// --- Default Implementations ---
// This allows a user to omit the `[analysis]` section from their toml
// and still have it work with sensible defaults.

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            suitable_good_pct: 70.0,
            max_bad_pct: 30.0,
            overrides: Vec::new(),
        }
    }
}
