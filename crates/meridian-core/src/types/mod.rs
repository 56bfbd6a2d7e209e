//! Value types for dates and amounts of time.
//!
//! - [`Date`]: calendar date
//! - [`YearMonth`]: a contract month such as `2020-06`
//! - [`Period`]: years, months and days
//! - [`Currency`]: ISO currency codes

mod currency;
mod date;
mod period;
mod year_month;

pub use currency::Currency;
pub use date::Date;
pub use period::Period;
pub use year_month::YearMonth;
