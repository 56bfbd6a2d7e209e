//! Error types for calculation inputs.

use thiserror::Error;

/// A specialized Result type for calculation input operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised when building or reading calculation inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// No value is stored for the identifier.
    #[error("Market data not found for identifier: {id}")]
    MarketDataNotFound {
        /// The identifier that was requested.
        id: String,
    },
}

impl CalcError {
    /// Creates a market data not found error.
    pub fn market_data_not_found(id: impl Into<String>) -> Self {
        Self::MarketDataNotFound { id: id.into() }
    }
}
