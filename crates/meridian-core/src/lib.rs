//! # Meridian Core
//!
//! Dates, holiday calendars and date rules for the Meridian conventions library.
//!
//! This crate provides the building blocks that futures conventions are
//! expressed in:
//!
//! - **Types**: `Date`, `YearMonth`, `Period`, `Currency`
//! - **Calendars**: London, US government securities, New York Fed and TARGET2
//!   holiday calendars, plus calendars loaded from JSON
//! - **Adjustments**: `BusinessDayAdjustment` and `DaysAdjustment`, which name
//!   their calendars and resolve them through `ReferenceData`
//! - **Date sequences**: IMM and first-of-month contract date rules
//! - **Day counts**: the conventions used by overnight indices
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::prelude::*;
//!
//! let ref_data = ReferenceData::standard();
//! let last_trade = DaysAdjustment::of_calendar_days_with(
//!     -1,
//!     BusinessDayAdjustment::of(BusinessDayConvention::Preceding, HolidayCalendarId::USGS),
//! );
//!
//! let next_contract = DateSequence::Monthly1st.next(Date::from_ymd(2020, 2, 1).unwrap());
//! let date = last_trade.adjust(next_contract, &ref_data).unwrap();
//! assert_eq!(date, Date::from_ymd(2020, 2, 28).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::new_without_default)]

pub mod adjustment;
pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod reference_data;
pub mod sequence;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adjustment::{BusinessDayAdjustment, DaysAdjustment};
    pub use crate::calendars::{BusinessDayConvention, Calendar, HolidayCalendarId};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::reference_data::ReferenceData;
    pub use crate::sequence::DateSequence;
    pub use crate::types::{Currency, Date, Period, YearMonth};
}

// Re-export commonly used types at crate root
pub use adjustment::{BusinessDayAdjustment, DaysAdjustment};
pub use calendars::{BusinessDayConvention, HolidayCalendarId};
pub use error::{CoreError, CoreResult};
pub use reference_data::ReferenceData;
pub use sequence::DateSequence;
pub use types::{Currency, Date, Period, YearMonth};
