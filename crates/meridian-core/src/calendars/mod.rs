//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait and the built-in market calendars
//! - Business day conventions used to roll dates off holidays
//! - [`HolidayCalendarId`], the name used to look calendars up in
//!   [`ReferenceData`](crate::ReferenceData)

use std::fmt;
use std::sync::Arc;

mod bitmap;
mod conventions;
mod dynamic;
mod id;
mod london;
mod new_york;
mod target;
mod us_government;

pub use bitmap::{
    easter_sunday, last_weekday_of_month, nth_weekday_of_month, observed_date, HolidayBitmap,
    HolidayCalendarBuilder, WeekendType, MAX_YEAR, MIN_YEAR,
};
pub use conventions::BusinessDayConvention;
pub use dynamic::{CalendarData, DynamicCalendar};
pub use id::HolidayCalendarId;
pub use london::LondonCalendar;
pub use new_york::NewYorkFedCalendar;
pub use target::Target2Calendar;
pub use us_government::UsGovernmentCalendar;

use crate::error::CoreResult;
use crate::types::Date;

/// A holiday calendar.
///
/// Calendars decide which days are business days for a market.
/// Implementations must be thread-safe; the built-in ones are immutable.
pub trait Calendar: Send + Sync + fmt::Debug {
    /// The calendar's identifier, as used by [`HolidayCalendarId`].
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> CoreResult<Date> {
        conventions::adjust(date, convention, self)
    }

    /// Moves a date by a number of business days.
    ///
    /// A zero amount returns the input unchanged, even if it is a holiday.
    fn shift(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let step: i64 = if days >= 0 { 1 } else { -1 };
        let mut remaining = days.unsigned_abs();

        while remaining > 0 {
            result = result.add_days(step);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// The first business day strictly after the date.
    fn next(&self, date: Date) -> Date {
        self.next_or_same(date.add_days(1))
    }

    /// The date itself if it is a business day, otherwise the next one.
    fn next_or_same(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// The last business day strictly before the date.
    fn previous(&self, date: Date) -> Date {
        self.previous_or_same(date.add_days(-1))
    }

    /// The date itself if it is a business day, otherwise the previous one.
    fn previous_or_same(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Counts business days after `start` up to and including `end`.
    fn business_days_between(&self, start: Date, end: Date) -> i32 {
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }
}

/// Every day is a business day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHolidaysCalendar;

impl Calendar for NoHolidaysCalendar {
    fn name(&self) -> &str {
        "NoHolidays"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn shift(&self, date: Date, days: i32) -> Date {
        date.add_days(i64::from(days))
    }
}

/// Saturdays and Sundays are holidays, nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Sat/Sun"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// The union of the holidays of several calendars.
///
/// A day is a business day only if every member calendar says so.
#[derive(Debug, Clone)]
pub struct JointCalendar {
    calendars: Vec<Arc<dyn Calendar>>,
    name: String,
}

impl JointCalendar {
    /// Combines calendars; the name joins the member names with `+`.
    pub fn new(calendars: Vec<Arc<dyn Calendar>>) -> Self {
        let name = calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("+");

        Self { calendars, name }
    }

    /// The member calendars.
    pub fn calendars(&self) -> &[Arc<dyn Calendar>] {
        &self.calendars
    }
}

impl Calendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.calendars.iter().all(|cal| cal.is_business_day(date))
    }
}
