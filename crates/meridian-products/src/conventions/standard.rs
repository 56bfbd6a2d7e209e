//! The market conventions registered by default.

use meridian_core::{
    BusinessDayAdjustment, BusinessDayConvention, DateSequence, DaysAdjustment, HolidayCalendarId,
};

use super::OvernightFutureConvention;
use crate::indices::OvernightIndex;
use crate::types::OvernightAccrualMethod;

/// Three-month SONIA future. The contract ends the day before the next IMM
/// date and trades until that IMM date, or the next London business day.
fn gbp_sonia_quarterly_imm() -> OvernightFutureConvention {
    OvernightFutureConvention::builder()
        .index(OvernightIndex::GBP_SONIA)
        .date_sequence(DateSequence::QuarterlyImm)
        .accrual_method(OvernightAccrualMethod::Compounded)
        .end_date_adjustment(DaysAdjustment::of_calendar_days(-1))
        .last_trade_date_adjustment(DaysAdjustment::of_calendar_days_with(
            0,
            BusinessDayAdjustment::of(BusinessDayConvention::Following, HolidayCalendarId::GBLO),
        ))
        .build()
        .expect("index, date sequence and accrual method are set")
}

/// Every standard convention.
pub(crate) fn conventions() -> Vec<OvernightFutureConvention> {
    vec![
        gbp_sonia_quarterly_imm(),
        OvernightFutureConvention::of(
            OvernightIndex::USD_SOFR,
            DateSequence::QuarterlyImm,
            OvernightAccrualMethod::Compounded,
        ),
        OvernightFutureConvention::of(
            OvernightIndex::USD_SOFR,
            DateSequence::Monthly1st,
            OvernightAccrualMethod::AveragedDaily,
        ),
        OvernightFutureConvention::of(
            OvernightIndex::USD_FED_FUND,
            DateSequence::Monthly1st,
            OvernightAccrualMethod::AveragedDaily,
        ),
    ]
}
