use crate::analysis_config::AnalysisSettings;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub execution: ExecutionMode,
    pub generator: GeneratorSettings,
    pub analysis: AnalysisSettings,
}

/// How the per-sequence metrics are scheduled. Both modes produce identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One rayon task per sequence.
    #[default]
    Parallel,
    /// A plain loop on the calling thread.
    Sequential,
}

/// Contains parameters for the random trade generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// How many trade sequences make up one dataset.
    pub sequence_count: usize,
    /// Inclusive bounds on the number of trades per sequence.
    pub min_length: usize,
    pub max_length: usize,
    /// Profit is drawn uniformly from `[min_profit, max_profit)`.
    pub min_profit: f64,
    pub max_profit: f64,
    /// Duration is drawn uniformly from `[min_duration, max_duration)`.
    pub min_duration: f64,
    pub max_duration: f64,
    /// Fixes the random stream. Without it every run draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            sequence_count: 100,
            min_length: 1,
            max_length: 1000,
            min_profit: -1000.0,
            max_profit: 1000.0,
            min_duration: 1.0,
            max_duration: 1200.0,
            seed: None,
        }
    }
}
