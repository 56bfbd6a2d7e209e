//! Overnight rate accrual methods.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProductError;

/// How daily overnight fixings combine into the rate for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OvernightAccrualMethod {
    /// Daily rates compounded over the period.
    Compounded,
    /// Arithmetic average of the rates on business days.
    Averaged,
    /// Average over every calendar day, weekend and holiday rates carried
    /// forward.
    AveragedDaily,
    /// Compounding of an annual rate, as for Brazilian CDI.
    OvernightCompoundedAnnualRate,
}

impl OvernightAccrualMethod {
    /// Every method.
    pub const ALL: [OvernightAccrualMethod; 4] = [
        OvernightAccrualMethod::Compounded,
        OvernightAccrualMethod::Averaged,
        OvernightAccrualMethod::AveragedDaily,
        OvernightAccrualMethod::OvernightCompoundedAnnualRate,
    ];

    /// The method's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            OvernightAccrualMethod::Compounded => "Compounded",
            OvernightAccrualMethod::Averaged => "Averaged",
            OvernightAccrualMethod::AveragedDaily => "AveragedDaily",
            OvernightAccrualMethod::OvernightCompoundedAnnualRate => {
                "OvernightCompoundedAnnualRate"
            }
        }
    }
}

impl fmt::Display for OvernightAccrualMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OvernightAccrualMethod {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ProductError::not_found("OvernightAccrualMethod", s))
    }
}

impl TryFrom<String> for OvernightAccrualMethod {
    type Error = ProductError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OvernightAccrualMethod> for String {
    fn from(value: OvernightAccrualMethod) -> Self {
        value.name().to_string()
    }
}
