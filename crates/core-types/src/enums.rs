use serde::{Deserialize, Serialize};

/// How a single trade closed, judged purely by the sign of its profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    /// Exactly zero profit. Neither a win nor a loss, and it breaks both streaks.
    Flat,
}

impl Outcome {
    /// Classifies a profit value. NaN is treated as `Flat`.
    pub fn of(profit: f64) -> Self {
        if profit > 0.0 {
            Outcome::Win
        } else if profit < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Flat
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Loss)
    }
}
