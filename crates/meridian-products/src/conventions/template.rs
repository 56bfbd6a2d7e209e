//! Trade templates for overnight futures.

use serde::{Deserialize, Serialize};

use meridian_core::{Date, Period, ReferenceData, YearMonth};

use super::OvernightFutureConvention;
use crate::error::{ProductError, ProductResult};
use crate::instruments::OvernightFutureTrade;
use crate::types::SecurityId;

/// The trade-date independent terms of an overnight future trade.
///
/// A template pairs a convention with the choice of contract, either
/// relative to the trade date or a fixed contract month, so that a curve
/// node can create its trade once the trade date is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OvernightFutureTemplate {
    /// The `sequence_number`-th contract starting on or after
    /// `trade_date + minimum_period`.
    Relative {
        /// Earliest distance from the trade date to the contract start.
        minimum_period: Period,
        /// 1-based position in the date sequence.
        sequence_number: u32,
        /// The market convention.
        convention: OvernightFutureConvention,
    },
    /// The contract for a given month.
    Absolute {
        /// The contract month.
        year_month: YearMonth,
        /// The market convention.
        convention: OvernightFutureConvention,
    },
}

impl OvernightFutureTemplate {
    /// A relative template.
    ///
    /// # Errors
    ///
    /// [`ProductError::InvalidSpec`] if `sequence_number` is zero.
    pub fn relative(
        minimum_period: Period,
        sequence_number: u32,
        convention: OvernightFutureConvention,
    ) -> ProductResult<Self> {
        if sequence_number == 0 {
            return Err(ProductError::invalid_spec(
                "Sequence number must be 1 or greater",
            ));
        }
        Ok(Self::Relative {
            minimum_period,
            sequence_number,
            convention,
        })
    }

    /// An absolute template.
    pub fn absolute(year_month: YearMonth, convention: OvernightFutureConvention) -> Self {
        Self::Absolute {
            year_month,
            convention,
        }
    }

    /// The convention trades are created with.
    pub fn convention(&self) -> &OvernightFutureConvention {
        match self {
            Self::Relative { convention, .. } | Self::Absolute { convention, .. } => convention,
        }
    }

    /// Creates a trade on `trade_date`.
    ///
    /// # Errors
    ///
    /// Propagates the convention's trade construction failures.
    pub fn create_trade(
        &self,
        trade_date: Date,
        security_id: SecurityId,
        quantity: f64,
        notional: f64,
        price: f64,
        ref_data: &ReferenceData,
    ) -> ProductResult<OvernightFutureTrade> {
        match self {
            Self::Relative {
                minimum_period,
                sequence_number,
                convention,
            } => convention.create_trade_relative(
                trade_date,
                security_id,
                *minimum_period,
                *sequence_number,
                quantity,
                notional,
                price,
                ref_data,
            ),
            Self::Absolute {
                year_month,
                convention,
            } => convention.create_trade(
                trade_date,
                security_id,
                *year_month,
                quantity,
                notional,
                price,
                ref_data,
            ),
        }
    }

    /// The start date of the contract a trade on `trade_date` would be in.
    ///
    /// # Errors
    ///
    /// Propagates calendar lookup failures.
    pub fn reference_date(&self, trade_date: Date, ref_data: &ReferenceData) -> ProductResult<Date> {
        match self {
            Self::Relative {
                minimum_period,
                sequence_number,
                convention,
            } => convention.reference_date_relative(
                trade_date,
                *minimum_period,
                *sequence_number,
                ref_data,
            ),
            Self::Absolute {
                year_month,
                convention,
            } => convention.reference_date(*year_month, ref_data),
        }
    }

    /// Rough time to the contract in years, used to order curve nodes.
    pub fn approximate_maturity(&self, valuation_date: Date) -> f64 {
        match self {
            Self::Relative {
                minimum_period,
                sequence_number,
                convention,
            } => {
                let step = convention.date_sequence().period().total_months();
                let sequence_months = i64::from(*sequence_number) * i64::from(step);
                let months = i64::from(minimum_period.total_months()) + sequence_months;
                months as f64 / 12.0
            }
            Self::Absolute { year_month, .. } => {
                let months = YearMonth::from_date(valuation_date).months_until(year_month);
                f64::from(months) / 12.0
            }
        }
    }
}
