use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimationError {
    #[error("invalid amount: {input:?}")]
    InvalidAmount {
        input: String,
    },

    #[error("amount too large for word conversion: {amount}")]
    UnsupportedMagnitude {
        amount: u128,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, EstimationError>;
