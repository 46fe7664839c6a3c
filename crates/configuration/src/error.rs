use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings from '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
