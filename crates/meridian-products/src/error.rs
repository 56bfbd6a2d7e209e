//! Error types for product and convention operations.

use meridian_core::CoreError;
use thiserror::Error;

/// A specialized Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;

/// Errors that can occur building conventions, products and trades.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// Invalid product or convention specification.
    #[error("Invalid specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// A builder was missing a required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A named value (convention, index, accrual method...) is not known.
    #[error("{kind} not found for name: '{name}'")]
    NotFound {
        /// The kind of value being looked up.
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// A configured convention definition could not be used.
    #[error("Invalid convention definition: {reason}")]
    Definition {
        /// Description of the problem.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl ProductError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a lookup failure for a named value.
    #[must_use]
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Creates a definition error.
    #[must_use]
    pub fn definition(reason: impl Into<String>) -> Self {
        Self::Definition {
            reason: reason.into(),
        }
    }
}
