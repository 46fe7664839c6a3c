use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Could not access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected CSV header: expected '{expected}', found '{found}'")]
    Header { expected: String, found: String },

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to flush CSV writer: {0}")]
    Flush(String),
}
