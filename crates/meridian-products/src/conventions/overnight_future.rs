//! Market conventions for overnight index futures.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use meridian_core::{
    BusinessDayAdjustment, BusinessDayConvention, Date, DateSequence, DaysAdjustment, Period,
    ReferenceData, YearMonth,
};

use super::registry::ConventionRegistry;
use crate::error::{ProductError, ProductResult};
use crate::indices::OvernightIndex;
use crate::instruments::{OvernightFuture, OvernightFutureTrade};
use crate::types::{OvernightAccrualMethod, SecurityId, TradeInfo};

/// The market conventions of an overnight index future.
///
/// A convention captures how the contract dates of a listed future follow
/// from a contract month: the date sequence picks the start of the
/// accrual period and the start of the next contract, and the adjustments
/// derive the actual start, end and last trade dates from them.
///
/// # Example
///
/// ```rust
/// use meridian_core::{Date, ReferenceData, YearMonth};
/// use meridian_products::conventions::OvernightFutureConvention;
/// use meridian_products::types::SecurityId;
///
/// let convention = OvernightFutureConvention::lookup("USD-SOFR-Quarterly-IMM").unwrap();
/// let trade = convention
///     .create_trade(
///         Date::from_ymd(2020, 1, 25).unwrap(),
///         SecurityId::of("OG", "1").unwrap(),
///         YearMonth::new(2020, 2).unwrap(),
///         20.0,
///         1_000_000.0,
///         0.999,
///         &ReferenceData::standard(),
///     )
///     .unwrap();
///
/// assert_eq!(trade.product().start_date(), Date::from_ymd(2020, 3, 18).unwrap());
/// assert_eq!(trade.product().end_date(), Date::from_ymd(2020, 6, 16).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OvernightFutureConvention {
    index: OvernightIndex,
    name: String,
    accrual_method: OvernightAccrualMethod,
    date_sequence: DateSequence,
    start_date_adjustment: BusinessDayAdjustment,
    end_date_adjustment: DaysAdjustment,
    last_trade_date_adjustment: DaysAdjustment,
}

impl OvernightFutureConvention {
    /// A convention with every optional field defaulted.
    pub fn of(
        index: OvernightIndex,
        date_sequence: DateSequence,
        accrual_method: OvernightAccrualMethod,
    ) -> Self {
        let name = default_name(&index, date_sequence);
        let last_trade_date_adjustment = default_last_trade_date_adjustment(&index);
        Self::from_parts(
            index,
            name,
            accrual_method,
            date_sequence,
            BusinessDayAdjustment::NONE,
            DaysAdjustment::of_calendar_days(-1),
            last_trade_date_adjustment,
        )
    }

    /// Creates a builder.
    pub fn builder() -> OvernightFutureConventionBuilder {
        OvernightFutureConventionBuilder::default()
    }

    /// A builder holding this convention's fields.
    pub fn to_builder(&self) -> OvernightFutureConventionBuilder {
        OvernightFutureConventionBuilder {
            index: Some(self.index.clone()),
            name: Some(self.name.clone()),
            accrual_method: Some(self.accrual_method),
            date_sequence: Some(self.date_sequence),
            start_date_adjustment: Some(self.start_date_adjustment.clone()),
            end_date_adjustment: Some(self.end_date_adjustment.clone()),
            last_trade_date_adjustment: Some(self.last_trade_date_adjustment.clone()),
        }
    }

    fn from_parts(
        index: OvernightIndex,
        name: String,
        accrual_method: OvernightAccrualMethod,
        date_sequence: DateSequence,
        start_date_adjustment: BusinessDayAdjustment,
        end_date_adjustment: DaysAdjustment,
        last_trade_date_adjustment: DaysAdjustment,
    ) -> Self {
        Self {
            index,
            name,
            accrual_method,
            date_sequence,
            start_date_adjustment,
            end_date_adjustment,
            last_trade_date_adjustment,
        }
    }

    /// Looks up a registered convention by name.
    ///
    /// The same instance is returned on every call.
    ///
    /// # Errors
    ///
    /// [`ProductError::NotFound`] for an unknown or blank name.
    pub fn lookup(name: &str) -> ProductResult<&'static OvernightFutureConvention> {
        ConventionRegistry::global().lookup(name)
    }

    /// The overnight index.
    pub fn index(&self) -> &OvernightIndex {
        &self.index
    }

    /// The unique convention name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How fixings combine over the accrual period.
    pub fn accrual_method(&self) -> OvernightAccrualMethod {
        self.accrual_method
    }

    /// The sequence of contract start dates.
    pub fn date_sequence(&self) -> DateSequence {
        self.date_sequence
    }

    /// Applied to the sequence date to give the start date.
    pub fn start_date_adjustment(&self) -> &BusinessDayAdjustment {
        &self.start_date_adjustment
    }

    /// Applied to the next sequence date to give the end date.
    pub fn end_date_adjustment(&self) -> &DaysAdjustment {
        &self.end_date_adjustment
    }

    /// Applied to the next sequence date to give the last trade date.
    pub fn last_trade_date_adjustment(&self) -> &DaysAdjustment {
        &self.last_trade_date_adjustment
    }

    /// Creates a trade in the `sequence_number`-th contract starting on or
    /// after `trade_date + minimum_period`.
    ///
    /// `sequence_number` is 1-based.
    ///
    /// # Errors
    ///
    /// Fails for a zero sequence number or a calendar missing from
    /// `ref_data`.
    pub fn create_trade_relative(
        &self,
        trade_date: Date,
        security_id: SecurityId,
        minimum_period: Period,
        sequence_number: u32,
        quantity: f64,
        notional: f64,
        price: f64,
        ref_data: &ReferenceData,
    ) -> ProductResult<OvernightFutureTrade> {
        let reference = self.relative_sequence_date(trade_date, minimum_period, sequence_number)?;
        self.create_trade_from_reference(
            trade_date,
            security_id,
            reference,
            quantity,
            notional,
            price,
            ref_data,
        )
    }

    /// Creates a trade in the contract matching `year_month`.
    ///
    /// # Errors
    ///
    /// Fails for a calendar missing from `ref_data`.
    pub fn create_trade(
        &self,
        trade_date: Date,
        security_id: SecurityId,
        year_month: YearMonth,
        quantity: f64,
        notional: f64,
        price: f64,
        ref_data: &ReferenceData,
    ) -> ProductResult<OvernightFutureTrade> {
        let reference = self.date_sequence.date_matching(year_month);
        self.create_trade_from_reference(
            trade_date,
            security_id,
            reference,
            quantity,
            notional,
            price,
            ref_data,
        )
    }

    /// The adjusted start date of the contract
    /// [`create_trade_relative`](Self::create_trade_relative) would pick.
    pub fn reference_date_relative(
        &self,
        trade_date: Date,
        minimum_period: Period,
        sequence_number: u32,
        ref_data: &ReferenceData,
    ) -> ProductResult<Date> {
        let reference = self.relative_sequence_date(trade_date, minimum_period, sequence_number)?;
        Ok(self.start_date_adjustment.adjust(reference, ref_data)?)
    }

    /// The adjusted start date of the contract matching `year_month`.
    pub fn reference_date(&self, year_month: YearMonth, ref_data: &ReferenceData) -> ProductResult<Date> {
        let reference = self.date_sequence.date_matching(year_month);
        Ok(self.start_date_adjustment.adjust(reference, ref_data)?)
    }

    fn relative_sequence_date(
        &self,
        trade_date: Date,
        minimum_period: Period,
        sequence_number: u32,
    ) -> ProductResult<Date> {
        if sequence_number == 0 {
            return Err(ProductError::invalid_spec(
                "Sequence number must be 1 or greater",
            ));
        }
        let earliest = trade_date.plus_period(minimum_period)?;
        Ok(self.date_sequence.nth_or_same(earliest, sequence_number)?)
    }

    fn create_trade_from_reference(
        &self,
        trade_date: Date,
        security_id: SecurityId,
        reference: Date,
        quantity: f64,
        notional: f64,
        price: f64,
        ref_data: &ReferenceData,
    ) -> ProductResult<OvernightFutureTrade> {
        let start_date = self.start_date_adjustment.adjust(reference, ref_data)?;
        let next_reference = self.date_sequence.next(start_date);
        let end_date = self.end_date_adjustment.adjust(next_reference, ref_data)?;
        let last_trade_date = self.last_trade_date_adjustment.adjust(next_reference, ref_data)?;
        let accrual_factor = accrual_factor(start_date, next_reference);

        debug!(
            "{}: trade on {trade_date} accrues {start_date} to {end_date}, last trade {last_trade_date}, factor {accrual_factor}",
            self.name
        );

        let product = OvernightFuture::builder()
            .security_id(security_id)
            .notional(notional)
            .accrual_factor(accrual_factor)
            .last_trade_date(last_trade_date)
            .start_date(start_date)
            .end_date(end_date)
            .index(self.index.clone())
            .accrual_method(self.accrual_method)
            .build()?;

        Ok(OvernightFutureTrade::new(
            TradeInfo::of(trade_date),
            product,
            quantity,
            price,
        ))
    }
}

/// Whole months between the first days of the two months, in years.
fn accrual_factor(start: Date, next_reference: Date) -> f64 {
    let months = start
        .start_of_month()
        .months_until(&next_reference.start_of_month());
    f64::from(months) / 12.0
}

fn default_name(index: &OvernightIndex, date_sequence: DateSequence) -> String {
    format!("{}-{}", index.name(), date_sequence.name())
}

fn default_last_trade_date_adjustment(index: &OvernightIndex) -> DaysAdjustment {
    DaysAdjustment::of_calendar_days_with(
        -1,
        BusinessDayAdjustment::of(BusinessDayConvention::Preceding, index.fixing_calendar().clone()),
    )
}

impl fmt::Display for OvernightFutureConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Builder for [`OvernightFutureConvention`].
///
/// Index, date sequence and accrual method are required, the other fields
/// default as in [`OvernightFutureConvention::of`].
#[derive(Debug, Clone, Default)]
pub struct OvernightFutureConventionBuilder {
    index: Option<OvernightIndex>,
    name: Option<String>,
    accrual_method: Option<OvernightAccrualMethod>,
    date_sequence: Option<DateSequence>,
    start_date_adjustment: Option<BusinessDayAdjustment>,
    end_date_adjustment: Option<DaysAdjustment>,
    last_trade_date_adjustment: Option<DaysAdjustment>,
}

impl OvernightFutureConventionBuilder {
    /// Sets the index.
    #[must_use]
    pub fn index(mut self, index: OvernightIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the name. When unset it defaults to `index-sequence`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the accrual method.
    #[must_use]
    pub fn accrual_method(mut self, accrual_method: OvernightAccrualMethod) -> Self {
        self.accrual_method = Some(accrual_method);
        self
    }

    /// Sets the date sequence.
    #[must_use]
    pub fn date_sequence(mut self, date_sequence: DateSequence) -> Self {
        self.date_sequence = Some(date_sequence);
        self
    }

    /// Sets the start date adjustment.
    #[must_use]
    pub fn start_date_adjustment(mut self, adjustment: BusinessDayAdjustment) -> Self {
        self.start_date_adjustment = Some(adjustment);
        self
    }

    /// Sets the end date adjustment.
    #[must_use]
    pub fn end_date_adjustment(mut self, adjustment: DaysAdjustment) -> Self {
        self.end_date_adjustment = Some(adjustment);
        self
    }

    /// Sets the last trade date adjustment.
    #[must_use]
    pub fn last_trade_date_adjustment(mut self, adjustment: DaysAdjustment) -> Self {
        self.last_trade_date_adjustment = Some(adjustment);
        self
    }

    /// Builds the convention, applying defaults to unset optional fields.
    ///
    /// # Errors
    ///
    /// [`ProductError::MissingField`] if the index, date sequence or accrual
    /// method is unset.
    pub fn build(self) -> ProductResult<OvernightFutureConvention> {
        let index = self.index.ok_or_else(|| ProductError::missing_field("index"))?;
        let date_sequence = self
            .date_sequence
            .ok_or_else(|| ProductError::missing_field("date_sequence"))?;
        let accrual_method = self
            .accrual_method
            .ok_or_else(|| ProductError::missing_field("accrual_method"))?;

        let name = self
            .name
            .unwrap_or_else(|| default_name(&index, date_sequence));
        let last_trade_date_adjustment = self
            .last_trade_date_adjustment
            .unwrap_or_else(|| default_last_trade_date_adjustment(&index));

        Ok(OvernightFutureConvention::from_parts(
            index,
            name,
            accrual_method,
            date_sequence,
            self.start_date_adjustment.unwrap_or(BusinessDayAdjustment::NONE),
            self.end_date_adjustment
                .unwrap_or_else(|| DaysAdjustment::of_calendar_days(-1)),
            last_trade_date_adjustment,
        ))
    }
}
