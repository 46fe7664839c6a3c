use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Invalid generator settings: {0}")]
    InvalidSettings(String),

    #[error("A dataset needs at least one trade sequence.")]
    EmptyDataset,

    #[error("The generator ran out of sequences after {0} were drawn.")]
    GeneratorExhausted(usize),

    #[error("Generated trade was rejected: {0}")]
    Trade(#[from] core_types::CoreError),
}
