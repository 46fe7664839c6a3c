use crate::enums::Outcome;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A single closed trade: the realized profit (or loss) and how long it was held.
///
/// A `Trade` can only be built through [`Trade::new`], so every instance carries a
/// finite profit and a strictly positive, finite duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrade")]
pub struct Trade {
    profit: f64,
    duration: f64,
}

/// Unvalidated wire shape of a `Trade`, used only during deserialization.
#[derive(Deserialize)]
struct RawTrade {
    profit: f64,
    duration: f64,
}

impl TryFrom<RawTrade> for Trade {
    type Error = CoreError;

    fn try_from(raw: RawTrade) -> Result<Self, Self::Error> {
        Trade::new(raw.profit, raw.duration)
    }
}

impl Trade {
    pub fn new(profit: f64, duration: f64) -> Result<Self, CoreError> {
        if !profit.is_finite() {
            return Err(CoreError::InvalidTrade {
                field: "profit",
                reason: format!("must be a finite number, got {}", profit),
            });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(CoreError::InvalidTrade {
                field: "duration",
                reason: format!("must be strictly positive and finite, got {}", duration),
            });
        }
        Ok(Self { profit, duration })
    }

    pub fn profit(&self) -> f64 {
        self.profit
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::of(self.profit)
    }
}

/// One simulated trading history.
///
/// The order of trades is significant: it determines the cumulative profit path,
/// and therefore drawdown and streaks. The sequence may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeSequence(Vec<Trade>);

impl TradeSequence {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self(trades)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trade> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Trade] {
        &self.0
    }

    /// The profit-only projection of the sequence, in trade order.
    pub fn profits(&self) -> Vec<f64> {
        self.0.iter().map(Trade::profit).collect()
    }

    pub fn into_inner(self) -> Vec<Trade> {
        self.0
    }
}

impl From<Vec<Trade>> for TradeSequence {
    fn from(trades: Vec<Trade>) -> Self {
        Self(trades)
    }
}

impl FromIterator<Trade> for TradeSequence {
    fn from_iter<I: IntoIterator<Item = Trade>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TradeSequence {
    type Item = &'a Trade;
    type IntoIter = std::slice::Iter<'a, Trade>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
