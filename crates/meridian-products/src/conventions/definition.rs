//! Serializable convention definitions.

use serde::{Deserialize, Serialize};

use meridian_core::{BusinessDayAdjustment, DateSequence, DaysAdjustment};

use super::OvernightFutureConvention;
use crate::error::ProductResult;
use crate::indices::OvernightIndex;
use crate::types::OvernightAccrualMethod;

/// A convention as written in configuration.
///
/// The date sequence and accrual method are given by name. The index is
/// given by name when built in, otherwise with all of its fields. Unset
/// optional fields take the same defaults as
/// [`OvernightFutureConvention::of`].
///
/// ```json
/// {
///   "index": "GBP-SONIA",
///   "date_sequence": "Monthly-IMM",
///   "accrual_method": "Compounded",
///   "name": "GBP-SONIA-Monthly-IMM",
///   "last_trade_date_adjustment": {
///     "days": 0,
///     "calendar": "NoHolidays",
///     "adjustment": { "convention": "Following", "calendar": "GBLO" }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionDefinition {
    /// The overnight index.
    pub index: OvernightIndex,
    /// Name of the date sequence.
    pub date_sequence: DateSequence,
    /// Name of the accrual method.
    pub accrual_method: OvernightAccrualMethod,
    /// Convention name, derived from index and sequence when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Override of the start date adjustment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_adjustment: Option<BusinessDayAdjustment>,
    /// Override of the end date adjustment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_adjustment: Option<DaysAdjustment>,
    /// Override of the last trade date adjustment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_trade_date_adjustment: Option<DaysAdjustment>,
}

impl ConventionDefinition {
    /// The definition of an existing convention, with every field set.
    pub fn from_convention(convention: &OvernightFutureConvention) -> Self {
        Self {
            index: convention.index().clone(),
            date_sequence: convention.date_sequence(),
            accrual_method: convention.accrual_method(),
            name: Some(convention.name().to_string()),
            start_date_adjustment: Some(convention.start_date_adjustment().clone()),
            end_date_adjustment: Some(convention.end_date_adjustment().clone()),
            last_trade_date_adjustment: Some(convention.last_trade_date_adjustment().clone()),
        }
    }

    /// Builds the convention.
    ///
    /// # Errors
    ///
    /// Propagates builder failures.
    pub fn to_convention(&self) -> ProductResult<OvernightFutureConvention> {
        let mut builder = OvernightFutureConvention::builder()
            .index(self.index.clone())
            .date_sequence(self.date_sequence)
            .accrual_method(self.accrual_method);
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(adjustment) = &self.start_date_adjustment {
            builder = builder.start_date_adjustment(adjustment.clone());
        }
        if let Some(adjustment) = &self.end_date_adjustment {
            builder = builder.end_date_adjustment(adjustment.clone());
        }
        if let Some(adjustment) = &self.last_trade_date_adjustment {
            builder = builder.last_trade_date_adjustment(adjustment.clone());
        }
        builder.build()
    }
}
