//! Business day adjustment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendars::{BusinessDayConvention, HolidayCalendarId};
use crate::error::CoreResult;
use crate::reference_data::ReferenceData;
use crate::types::Date;

/// A business day convention applied using a named holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessDayAdjustment {
    convention: BusinessDayConvention,
    calendar: HolidayCalendarId,
}

impl BusinessDayAdjustment {
    /// Leaves every date unchanged.
    pub const NONE: BusinessDayAdjustment = BusinessDayAdjustment {
        convention: BusinessDayConvention::NoAdjust,
        calendar: HolidayCalendarId::NO_HOLIDAYS,
    };

    /// Creates an adjustment.
    pub fn of(convention: BusinessDayConvention, calendar: HolidayCalendarId) -> Self {
        Self {
            convention,
            calendar,
        }
    }

    /// The business day convention.
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// The calendar the convention is applied with.
    pub fn calendar(&self) -> &HolidayCalendarId {
        &self.calendar
    }

    /// Adjusts a date.
    ///
    /// # Errors
    ///
    /// Fails if the calendar is not in the reference data.
    pub fn adjust(&self, date: Date, ref_data: &ReferenceData) -> CoreResult<Date> {
        let calendar = ref_data.calendar(&self.calendar)?;
        calendar.adjust(date, self.convention)
    }
}

impl Default for BusinessDayAdjustment {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for BusinessDayAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.convention == BusinessDayConvention::NoAdjust {
            write!(f, "{}", self.convention)
        } else {
            write!(f, "{} using calendar {}", self.convention, self.calendar)
        }
    }
}
