//! Error types
//!
//! Evaluation itself never fails; the only fallible operations are the
//! string conversions used when palette identifiers arrive as text.

use thiserror::Error;

/// Result type for pricing vocabulary operations
pub type PricingResult<T> = std::result::Result<T, PricingError>;

/// Errors from parsing vocabulary names
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Not one of the known value names
    #[error("Unknown value name: {0}")]
    UnknownValueName(String),

    /// Not one of the known operators
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}
