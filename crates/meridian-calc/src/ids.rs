//! Identifiers of market data values.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;
use std::convert::Infallible;
use std::str::FromStr;

use crate::parameters::CalculationParameters;

/// Identifies a single value in [`MarketData`](crate::MarketData).
///
/// The associated `Value` type fixes what the identifier resolves to, so a
/// lookup through the identifier is checked at compile time.
pub trait MarketDataId: fmt::Debug + fmt::Display + Clone + Eq + Hash + Send + Sync + 'static {
    /// The type of value the identifier resolves to.
    type Value: Any + fmt::Debug + Send + Sync;

    /// Name of the value type.
    fn market_data_type(&self) -> &'static str;
}

/// Identifies a set of [`CalculationParameters`] held as market data.
///
/// Equality and hashing use the name alone. Any string is a valid name,
/// including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CalculationParametersId(Cow<'static, str>);

impl CalculationParametersId {
    /// The identifier of the standard parameter set.
    pub const STANDARD: CalculationParametersId = CalculationParametersId(Cow::Borrowed("Standard"));

    /// Creates an identifier.
    pub fn of(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl MarketDataId for CalculationParametersId {
    type Value = CalculationParameters;

    fn market_data_type(&self) -> &'static str {
        "CalculationParameters"
    }
}

impl fmt::Display for CalculationParametersId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CalculationParametersId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::of(s))
    }
}

impl From<String> for CalculationParametersId {
    fn from(value: String) -> Self {
        Self::of(value)
    }
}

impl From<CalculationParametersId> for String {
    fn from(value: CalculationParametersId) -> Self {
        value.0.into_owned()
    }
}
