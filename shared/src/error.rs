//! Estimator error types

use thiserror::Error;

/// Errors raised while computing field estimates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Invalid planting date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Harvest date out of range: {planting_date} + {days} days")]
    DateOutOfRange { planting_date: String, days: u32 },
}

pub type EstimateResult<T> = Result<T, EstimateError>;
