//! Date adjustments resolved against [`ReferenceData`](crate::ReferenceData).
//!
//! - [`BusinessDayAdjustment`]: roll a date off a holiday
//! - [`DaysAdjustment`]: shift by calendar or business days, then roll

mod business_day;
mod days;

pub use business_day::BusinessDayAdjustment;
pub use days::DaysAdjustment;
