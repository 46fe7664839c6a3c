//! Independent performance statistics over a profit series.
//!
//! Every function here is total: degenerate inputs resolve to a sentinel
//! (`f64::INFINITY` for a zero denominator, `0.0` for an empty dividend set)
//! instead of an error or NaN. All dispersion measures are population
//! statistics (divide by `n`, not `n - 1`).

use core_types::Outcome;

/// Number of trading days used to annualize a per-trade mean.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// `numerator / denominator`, or `+inf` when the denominator is exactly zero.
fn ratio_or_infinite(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::INFINITY
    } else {
        numerator / denominator
    }
}

pub fn mean(profits: &[f64]) -> f64 {
    if profits.is_empty() {
        return 0.0;
    }
    profits.iter().sum::<f64>() / profits.len() as f64
}

/// Population standard deviation. A constant series has a spread of exactly 0,
/// even when its mean does not round-trip.
pub fn population_std_dev(profits: &[f64]) -> f64 {
    let Some(&first) = profits.first() else {
        return 0.0;
    };
    if profits.iter().all(|p| *p == first) {
        return 0.0;
    }
    let m = mean(profits);
    let variance = profits.iter().map(|p| (p - m).powi(2)).sum::<f64>() / profits.len() as f64;
    variance.sqrt()
}

/// Root-mean-square of the losing trades, averaged over *all* trades.
fn downside_deviation(profits: &[f64]) -> f64 {
    if profits.is_empty() {
        return 0.0;
    }
    let squared_losses: f64 = profits.iter().filter(|p| **p < 0.0).map(|p| p * p).sum();
    (squared_losses / profits.len() as f64).sqrt()
}

fn gross_profit(profits: &[f64]) -> f64 {
    profits.iter().filter(|p| Outcome::of(**p).is_win()).sum()
}

/// Sum of the losing trades. Negative (or zero).
fn gross_loss(profits: &[f64]) -> f64 {
    profits.iter().filter(|p| Outcome::of(**p).is_loss()).sum()
}

fn count_where(profits: &[f64], predicate: impl Fn(Outcome) -> bool) -> usize {
    profits.iter().filter(|p| predicate(Outcome::of(**p))).count()
}

fn longest_run(profits: &[f64], predicate: impl Fn(Outcome) -> bool) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for &profit in profits {
        if predicate(Outcome::of(profit)) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Mean profit over its population standard deviation.
///
/// A zero standard deviation yields `+inf` regardless of the sign of the mean.
pub fn sharpe_ratio(profits: &[f64]) -> f64 {
    if profits.is_empty() {
        return 0.0;
    }
    ratio_or_infinite(mean(profits), population_std_dev(profits))
}

/// Mean profit over the downside deviation.
///
/// The downside deviation is `sqrt(sum(p^2 for p < 0) / n)`: only losses
/// contribute to the numerator of the variance but the divisor is the full
/// trade count. With no losing trades the ratio is `+inf`.
pub fn sortino_ratio(profits: &[f64]) -> f64 {
    if profits.is_empty() {
        return 0.0;
    }
    ratio_or_infinite(mean(profits), downside_deviation(profits))
}

/// Mean profit per trade over the maximum drawdown.
pub fn calmar_ratio(mean_profit: f64, max_drawdown: f64) -> f64 {
    ratio_or_infinite(mean_profit, max_drawdown)
}

/// Total profit over the maximum drawdown.
pub fn recovery_factor(total_profit: f64, max_drawdown: f64) -> f64 {
    ratio_or_infinite(total_profit, max_drawdown)
}

/// Gross profit over the absolute gross loss.
pub fn profit_factor(profits: &[f64]) -> f64 {
    if profits.is_empty() {
        return 0.0;
    }
    ratio_or_infinite(gross_profit(profits), gross_loss(profits).abs())
}

pub fn win_rate(profits: &[f64]) -> f64 {
    if profits.is_empty() {
        return 0.0;
    }
    count_where(profits, |o| o.is_win()) as f64 / profits.len() as f64
}

pub fn loss_rate(profits: &[f64]) -> f64 {
    if profits.is_empty() {
        return 0.0;
    }
    count_where(profits, |o| o.is_loss()) as f64 / profits.len() as f64
}

pub fn average_win(profits: &[f64]) -> f64 {
    let wins = count_where(profits, |o| o.is_win());
    if wins == 0 {
        return 0.0;
    }
    gross_profit(profits) / wins as f64
}

/// Mean of the losing trades. Negative, or `0.0` when there were none.
pub fn average_loss(profits: &[f64]) -> f64 {
    let losses = count_where(profits, |o| o.is_loss());
    if losses == 0 {
        return 0.0;
    }
    gross_loss(profits) / losses as f64
}

/// Longest run of strictly positive profits. A zero profit breaks the run.
pub fn max_consecutive_wins(profits: &[f64]) -> usize {
    longest_run(profits, |o| o.is_win())
}

/// Longest run of strictly negative profits. A zero profit breaks the run.
pub fn max_consecutive_losses(profits: &[f64]) -> usize {
    longest_run(profits, |o| o.is_loss())
}

pub fn expectancy(profits: &[f64]) -> f64 {
    mean(profits)
}

pub fn volatility(profits: &[f64]) -> f64 {
    population_std_dev(profits)
}

pub fn annualized_return(profits: &[f64]) -> f64 {
    mean(profits) * TRADING_DAYS_PER_YEAR
}

pub fn trading_frequency(profits: &[f64]) -> usize {
    profits.len()
}

/// Trade count over the longest holding duration.
///
/// No trades means no turnover (`0.0`). Trades with a zero maximum duration
/// cannot come out of a validated `Trade`, but would resolve to `+inf`.
pub fn turnover_rate(trading_frequency: usize, max_duration: f64) -> f64 {
    if trading_frequency == 0 {
        return 0.0;
    }
    ratio_or_infinite(trading_frequency as f64, max_duration)
}
