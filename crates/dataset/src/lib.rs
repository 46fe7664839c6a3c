use analytics::{AnalyticsEngine, MetricRecord};
use configuration::ExecutionMode;
use core_types::TradeSequence;
use rayon::prelude::*;

pub mod error;
pub mod generator;

pub use error::DatasetError;
pub use generator::{FixedTradeGenerator, RandomTradeGenerator, TradeGenerator};

/// Builds datasets of trade sequences and maps the analytics engine over them.
///
/// Record `i` always derives from sequence `i`, whichever execution mode is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetDriver {
    engine: AnalyticsEngine,
    mode: ExecutionMode,
}

impl DatasetDriver {
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            engine: AnalyticsEngine::new(),
            mode,
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Draws `count` sequences from the generator, in order.
    pub fn generate<G: TradeGenerator>(
        &self,
        generator: &mut G,
        count: usize,
    ) -> Result<Vec<TradeSequence>, DatasetError> {
        if count == 0 {
            return Err(DatasetError::EmptyDataset);
        }
        let sequences = (0..count)
            .map(|_| generator.next_sequence())
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            sequences = sequences.len(),
            trades = sequences.iter().map(TradeSequence::len).sum::<usize>(),
            "Generated dataset"
        );
        Ok(sequences)
    }

    /// Computes one record per sequence, index-aligned with the input.
    pub fn compute(&self, sequences: &[TradeSequence]) -> Vec<MetricRecord> {
        let engine = self.engine;
        match self.mode {
            ExecutionMode::Sequential => sequences.iter().map(|s| engine.calculate(s)).collect(),
            // `collect` on an indexed parallel iterator keeps the input order.
            ExecutionMode::Parallel => sequences.par_iter().map(|s| engine.calculate(s)).collect(),
        }
    }

    /// Generates a dataset and computes its records.
    pub fn run<G: TradeGenerator>(
        &self,
        generator: &mut G,
        count: usize,
    ) -> Result<Vec<MetricRecord>, DatasetError> {
        let sequences = self.generate(generator, count)?;

        tracing::info!(
            mode = ?self.mode,
            threads = rayon::current_num_threads(),
            "Computing metrics"
        );
        let records = self.compute(&sequences);

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configuration::GeneratorSettings;
    use core_types::Trade;

    fn sequence(profits: &[f64]) -> TradeSequence {
        profits.iter().map(|&p| Trade::new(p, 1.0).unwrap()).collect()
    }

    #[test]
    fn test_records_are_index_aligned() {
        let sequences = vec![
            sequence(&[1.0]),
            sequence(&[1.0, 2.0]),
            sequence(&[]),
            sequence(&[-1.0, -1.0, -1.0, -1.0]),
        ];
        let driver = DatasetDriver::new(ExecutionMode::Parallel);

        let records = driver.compute(&sequences);

        assert_eq!(records.len(), sequences.len());
        let frequencies: Vec<usize> = records.iter().map(|r| r.trading_frequency).collect();
        assert_eq!(frequencies, vec![1, 2, 0, 4]);
        assert_eq!(records[3].max_consecutive_losses, 4);
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let settings = GeneratorSettings::default();
        let mut generator = RandomTradeGenerator::seeded(settings, 31).unwrap();
        let sequential = DatasetDriver::new(ExecutionMode::Sequential);
        let parallel = DatasetDriver::new(ExecutionMode::Parallel);

        let sequences = sequential.generate(&mut generator, 40).unwrap();

        assert_eq!(sequential.compute(&sequences), parallel.compute(&sequences));
    }

    #[test]
    fn test_no_cross_sequence_state() {
        let target = sequence(&[5.0, -3.0, 2.0]);
        let driver = DatasetDriver::default();

        let alone = driver.compute(std::slice::from_ref(&target));
        let among = driver.compute(&[sequence(&[-100.0; 10]), target.clone(), sequence(&[7.0])]);

        assert_eq!(alone[0], among[1]);
    }

    #[test]
    fn test_run_with_fixed_generator() {
        let mut generator = FixedTradeGenerator::new(vec![
            sequence(&[10.0, -5.0, 10.0, -5.0]),
            sequence(&[5.0]),
        ]);
        let driver = DatasetDriver::new(ExecutionMode::Sequential);

        let records = driver.run(&mut generator, 2).unwrap();

        assert_eq!(records[0].expectancy, 2.5);
        assert_eq!(records[0].profit_factor, 4.0);
        assert_eq!(records[1].sharpe_ratio, f64::INFINITY);
    }

    #[test]
    fn test_run_errors() {
        let driver = DatasetDriver::default();

        let mut empty = FixedTradeGenerator::default();
        assert!(matches!(driver.run(&mut empty, 0), Err(DatasetError::EmptyDataset)));

        let mut short = FixedTradeGenerator::new(vec![sequence(&[1.0])]);
        assert!(matches!(
            driver.run(&mut short, 3),
            Err(DatasetError::GeneratorExhausted(1))
        ));
    }

    #[test]
    fn test_default_dataset_shape() {
        let settings = GeneratorSettings::default();
        let count = settings.sequence_count;
        let mut generator = RandomTradeGenerator::seeded(settings, 3).unwrap();

        let records = DatasetDriver::default().run(&mut generator, count).unwrap();

        assert_eq!(records.len(), 100);
        assert!(records.iter().all(|r| (1..=1000).contains(&r.trading_frequency)));
        assert!(records.iter().all(|r| r.max_drawdown >= 0.0));
    }
}
