//! TARGET2 (EUTA) holiday calendar for euro payments.

use std::sync::OnceLock;

use super::bitmap::{HolidayBitmap, HolidayCalendarBuilder};
use super::Calendar;
use crate::types::Date;

static EUTA: OnceLock<Target2Calendar> = OnceLock::new();

/// The TARGET2 calendar, identified as `EUTA`, used for €STR fixings.
///
/// ## Holidays (from 2000)
///
/// - New Year's Day
/// - Good Friday and Easter Monday
/// - Labour Day (May 1)
/// - Christmas Day and December 26
///
/// Holidays falling on a weekend are not moved. 1999 only closed on New
/// Year's Day and Christmas Day; December 31 was closed in 1999 and 2001.
#[derive(Debug, Clone)]
pub struct Target2Calendar {
    bitmap: HolidayBitmap,
}

impl Target2Calendar {
    /// Builds the calendar.
    pub fn new() -> Self {
        Self {
            bitmap: HolidayCalendarBuilder::new()
                .year_range(1999, super::MAX_YEAR)
                .fixed(1, 1, false)
                .fixed(12, 25, false)
                .fixed_from(2000, 5, 1, false)
                .fixed_from(2000, 12, 26, false)
                .rule(|year| {
                    if year == 1999 || year == 2001 {
                        chrono::NaiveDate::from_ymd_opt(year, 12, 31).into_iter().collect()
                    } else {
                        Vec::new()
                    }
                })
                .year_range(2000, super::MAX_YEAR)
                .easter_offset(-2)
                .easter_offset(1)
                .build(),
        }
    }

    /// The shared instance.
    pub fn global() -> &'static Target2Calendar {
        EUTA.get_or_init(Target2Calendar::new)
    }
}

impl Default for Target2Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for Target2Calendar {
    fn name(&self) -> &str {
        "EUTA"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day(date.as_naive_date())
    }
}
