use crate::error::DatasetError;
use configuration::GeneratorSettings;
use core_types::{Trade, TradeSequence};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A source of trade sequences for the dataset driver.
///
/// The engine does not care where sequences come from; tests feed fixed ones,
/// the CLI feeds random ones.
pub trait TradeGenerator {
    fn next_sequence(&mut self) -> Result<TradeSequence, DatasetError>;
}

/// Draws sequences with uniformly distributed length, profit and duration.
pub struct RandomTradeGenerator {
    settings: GeneratorSettings,
    rng: StdRng,
}

impl RandomTradeGenerator {
    /// Seeds from `settings.seed` when present, otherwise from OS entropy.
    pub fn new(settings: GeneratorSettings) -> Result<Self, DatasetError> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(settings, rng)
    }

    pub fn seeded(settings: GeneratorSettings, seed: u64) -> Result<Self, DatasetError> {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GeneratorSettings, rng: StdRng) -> Result<Self, DatasetError> {
        if settings.min_length > settings.max_length {
            return Err(DatasetError::InvalidSettings(format!(
                "length range [{}, {}] is empty",
                settings.min_length, settings.max_length
            )));
        }
        // `random_range` panics on an empty, non-finite or overflowing range.
        let bounds = [
            settings.min_profit,
            settings.max_profit,
            settings.min_duration,
            settings.max_duration,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(DatasetError::InvalidSettings(format!(
                "profit and duration bounds must be finite, got {:?}",
                bounds
            )));
        }
        if !(settings.min_profit < settings.max_profit) {
            return Err(DatasetError::InvalidSettings(format!(
                "profit range [{}, {}) is empty",
                settings.min_profit, settings.max_profit
            )));
        }
        if !(settings.min_duration > 0.0 && settings.min_duration < settings.max_duration) {
            return Err(DatasetError::InvalidSettings(format!(
                "duration range [{}, {}) must be non-empty and strictly positive",
                settings.min_duration, settings.max_duration
            )));
        }
        if !(settings.max_profit - settings.min_profit).is_finite()
            || !(settings.max_duration - settings.min_duration).is_finite()
        {
            return Err(DatasetError::InvalidSettings(
                "profit or duration range is too wide to sample".to_string(),
            ));
        }
        Ok(Self { settings, rng })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }
}

impl TradeGenerator for RandomTradeGenerator {
    fn next_sequence(&mut self) -> Result<TradeSequence, DatasetError> {
        let s = &self.settings;
        let length = self.rng.random_range(s.min_length..=s.max_length);

        let mut trades = Vec::with_capacity(length);
        for _ in 0..length {
            let profit = self.rng.random_range(s.min_profit..s.max_profit);
            let duration = self.rng.random_range(s.min_duration..s.max_duration);
            trades.push(Trade::new(profit, duration)?);
        }

        Ok(TradeSequence::new(trades))
    }
}

/// Replays a fixed list of sequences in order.
#[derive(Debug, Clone, Default)]
pub struct FixedTradeGenerator {
    sequences: VecDeque<TradeSequence>,
    drawn: usize,
}

impl FixedTradeGenerator {
    pub fn new(sequences: Vec<TradeSequence>) -> Self {
        Self {
            sequences: sequences.into(),
            drawn: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.sequences.len()
    }
}

impl TradeGenerator for FixedTradeGenerator {
    fn next_sequence(&mut self) -> Result<TradeSequence, DatasetError> {
        let sequence = self
            .sequences
            .pop_front()
            .ok_or(DatasetError::GeneratorExhausted(self.drawn))?;
        self.drawn += 1;
        Ok(sequence)
    }
}
