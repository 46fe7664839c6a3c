use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("No metric records to analyze.")]
    NoRecords,

    #[error("Unknown metric in grading overrides: '{0}'")]
    UnknownMetric(String),

    #[error("Could not write evaluations to '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush evaluation CSV: {0}")]
    Flush(String),

    #[error("Evaluation CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
