//! Security identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProductError, ProductResult};

/// An identifier for a security: a scheme and a value within it.
///
/// Written as `scheme~value`, for example `OG~1` or `CME~SR3H0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecurityId {
    scheme: String,
    value: String,
}

impl SecurityId {
    /// Creates an identifier.
    ///
    /// # Errors
    ///
    /// Fails if either part is blank or the scheme contains `~`.
    pub fn of(scheme: impl Into<String>, value: impl Into<String>) -> ProductResult<Self> {
        let scheme = scheme.into();
        let value = value.into();
        if scheme.trim().is_empty() || value.trim().is_empty() {
            return Err(ProductError::invalid_spec(format!(
                "Security id scheme and value must not be blank: '{scheme}~{value}'"
            )));
        }
        if scheme.contains('~') {
            return Err(ProductError::invalid_spec(format!(
                "Security id scheme must not contain '~': '{scheme}'"
            )));
        }
        Ok(Self { scheme, value })
    }

    /// Parses `scheme~value`.
    pub fn parse(text: &str) -> ProductResult<Self> {
        let (scheme, value) = text.split_once('~').ok_or_else(|| {
            ProductError::invalid_spec(format!("Security id must be 'scheme~value': '{text}'"))
        })?;
        Self::of(scheme, value)
    }

    /// The scheme.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The value within the scheme.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SecurityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.scheme, self.value)
    }
}

impl FromStr for SecurityId {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SecurityId {
    type Error = ProductError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SecurityId> for String {
    fn from(value: SecurityId) -> Self {
        value.to_string()
    }
}
