use crate::metrics;
use crate::report::MetricRecord;
use core_types::TradeSequence;

/// Running totals gathered in one forward pass over a trade sequence.
///
/// The peak starts at zero, so a sequence that opens with a loss is already in
/// drawdown after its first trade.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SequenceTotals {
    pub cumulative_profit: f64,
    pub peak: f64,
    pub max_drawdown: f64,
    pub total_duration: f64,
    pub max_duration: f64,
    pub trade_count: usize,
}

impl SequenceTotals {
    pub fn scan(trades: &TradeSequence) -> Self {
        let mut totals = Self::default();

        for trade in trades {
            totals.trade_count += 1;
            totals.cumulative_profit += trade.profit();
            totals.total_duration += trade.duration();

            if trade.duration() > totals.max_duration {
                totals.max_duration = trade.duration();
            }
            if totals.cumulative_profit > totals.peak {
                totals.peak = totals.cumulative_profit;
            }
            let drawdown = totals.peak - totals.cumulative_profit;
            if drawdown > totals.max_drawdown {
                totals.max_drawdown = drawdown;
            }
        }

        totals
    }

    pub fn average_duration(&self) -> f64 {
        if self.trade_count == 0 {
            return 0.0;
        }
        self.total_duration / self.trade_count as f64
    }
}

/// A stateless calculator for deriving performance metrics from a trade sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating performance metrics.
    ///
    /// This never fails: every degenerate input resolves to a defined sentinel.
    /// An empty sequence has no dividends for any ratio and yields
    /// [`MetricRecord::empty`].
    pub fn calculate(&self, trades: &TradeSequence) -> MetricRecord {
        if trades.is_empty() {
            tracing::debug!("Empty trade sequence, returning zeroed metrics");
            return MetricRecord::empty();
        }

        let totals = SequenceTotals::scan(trades);
        let profits = trades.profits();
        let n = totals.trade_count;

        let trading_frequency = metrics::trading_frequency(&profits);
        let record = MetricRecord {
            max_drawdown: totals.max_drawdown,
            average_duration: totals.average_duration(),
            max_duration: totals.max_duration,
            recovery_factor: metrics::recovery_factor(totals.cumulative_profit, totals.max_drawdown),
            sharpe_ratio: metrics::sharpe_ratio(&profits),
            sortino_ratio: metrics::sortino_ratio(&profits),
            calmar_ratio: metrics::calmar_ratio(
                totals.cumulative_profit / n as f64,
                totals.max_drawdown,
            ),
            profit_factor: metrics::profit_factor(&profits),
            win_rate: metrics::win_rate(&profits),
            loss_rate: metrics::loss_rate(&profits),
            average_win: metrics::average_win(&profits),
            average_loss: metrics::average_loss(&profits),
            max_consecutive_wins: metrics::max_consecutive_wins(&profits),
            max_consecutive_losses: metrics::max_consecutive_losses(&profits),
            expectancy: metrics::expectancy(&profits),
            volatility: metrics::volatility(&profits),
            annualized_return: metrics::annualized_return(&profits),
            trading_frequency,
            turnover_rate: metrics::turnover_rate(trading_frequency, totals.max_duration),
            total_profit: totals.cumulative_profit,
        };

        tracing::debug!(
            trades = n,
            total_profit = record.total_profit,
            max_drawdown = record.max_drawdown,
            "Calculated sequence metrics"
        );

        record
    }
}
