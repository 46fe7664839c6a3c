use serde::{Deserialize, Serialize};

/// The fixed CSV header: one column per `MetricRecord` field, in field order.
pub const FIELD_NAMES: [&str; 20] = [
    "Max Drawdown",
    "Average Duration",
    "Max Duration",
    "Recovery Factor",
    "Sharpe Ratio",
    "Sortino Ratio",
    "Calmar Ratio",
    "Profit Factor",
    "Win Rate",
    "Loss Rate",
    "Average Win",
    "Average Loss",
    "Max Consecutive Wins",
    "Max Consecutive Losses",
    "Expectancy",
    "Volatility",
    "Annualized Return",
    "Trading Frequency",
    "Turnover Rate",
    "Total Profit",
];

/// The full battery of performance statistics for one trade sequence.
///
/// This struct is the final output of the `AnalyticsEngine`. Field declaration
/// order is the column order of the CSV report, and every field serializes under
/// its header name, so it can be written and read back with `csv` + `serde`.
///
/// Ratios whose denominator is zero hold `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricRecord {
    // I. Drawdown and Duration
    #[serde(rename = "Max Drawdown")]
    pub max_drawdown: f64,
    #[serde(rename = "Average Duration")]
    pub average_duration: f64,
    #[serde(rename = "Max Duration")]
    pub max_duration: f64,
    #[serde(rename = "Recovery Factor")]
    pub recovery_factor: f64,

    // II. Risk-Adjusted Ratios
    #[serde(rename = "Sharpe Ratio")]
    pub sharpe_ratio: f64,
    #[serde(rename = "Sortino Ratio")]
    pub sortino_ratio: f64,
    #[serde(rename = "Calmar Ratio")]
    pub calmar_ratio: f64,
    #[serde(rename = "Profit Factor")]
    pub profit_factor: f64,

    // III. Trade-Level Statistics
    #[serde(rename = "Win Rate")]
    pub win_rate: f64,
    #[serde(rename = "Loss Rate")]
    pub loss_rate: f64,
    #[serde(rename = "Average Win")]
    pub average_win: f64,
    #[serde(rename = "Average Loss")]
    pub average_loss: f64,
    #[serde(rename = "Max Consecutive Wins")]
    pub max_consecutive_wins: usize,
    #[serde(rename = "Max Consecutive Losses")]
    pub max_consecutive_losses: usize,
    #[serde(rename = "Expectancy")]
    pub expectancy: f64,
    #[serde(rename = "Volatility")]
    pub volatility: f64,

    // IV. Rate Metrics
    #[serde(rename = "Annualized Return")]
    pub annualized_return: f64,
    #[serde(rename = "Trading Frequency")]
    pub trading_frequency: usize,
    #[serde(rename = "Turnover Rate")]
    pub turnover_rate: f64,
    #[serde(rename = "Total Profit")]
    pub total_profit: f64,
}

impl MetricRecord {
    /// The record of an empty trade sequence: every field is zero.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every field as `(header name, value)`, in column order.
    ///
    /// Counts are widened to `f64` so callers can treat the record uniformly.
    pub fn values(&self) -> [(&'static str, f64); 20] {
        let values = [
            self.max_drawdown,
            self.average_duration,
            self.max_duration,
            self.recovery_factor,
            self.sharpe_ratio,
            self.sortino_ratio,
            self.calmar_ratio,
            self.profit_factor,
            self.win_rate,
            self.loss_rate,
            self.average_win,
            self.average_loss,
            self.max_consecutive_wins as f64,
            self.max_consecutive_losses as f64,
            self.expectancy,
            self.volatility,
            self.annualized_return,
            self.trading_frequency as f64,
            self.turnover_rate,
            self.total_profit,
        ];
        std::array::from_fn(|i| (FIELD_NAMES[i], values[i]))
    }

    /// Looks up a single field by its header name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}
