use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid trade {field}: {reason}")]
    InvalidTrade { field: &'static str, reason: String },
}
