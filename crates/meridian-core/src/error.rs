//! Error types for Meridian core.
//!
//! Every fallible operation in this crate returns [`CoreResult`]. Errors are
//! synchronous and carry enough context to name the offending input.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A date could not be constructed or parsed.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A period such as `3M` or `P1Y2D` could not be parsed.
    #[error("Invalid period: {input}")]
    InvalidPeriod {
        /// The rejected input.
        input: String,
    },

    /// An argument failed validation.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what's invalid.
        reason: String,
    },

    /// A holiday calendar was requested that the reference data does not hold.
    #[error("Holiday calendar not found in reference data: {id}")]
    CalendarNotFound {
        /// Identifier of the missing calendar.
        id: String,
    },

    /// A named value (date sequence, convention, index...) is not known.
    #[error("{kind} not found for name: '{name}'")]
    NotFound {
        /// The kind of value being looked up.
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// Calendar construction or loading error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// Configuration data could not be read.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid period error.
    #[must_use]
    pub fn invalid_period(input: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            input: input.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a calendar not found error.
    #[must_use]
    pub fn calendar_not_found(id: impl Into<String>) -> Self {
        Self::CalendarNotFound { id: id.into() }
    }

    /// Creates a lookup failure for a named value.
    #[must_use]
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Creates a calendar construction error.
    #[must_use]
    pub fn calendar(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }
}
