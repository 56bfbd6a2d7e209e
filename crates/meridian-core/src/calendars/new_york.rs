//! New York Federal Reserve (USNY) holiday calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::bitmap::{HolidayBitmap, HolidayCalendarBuilder};
use super::Calendar;
use crate::types::Date;

static USNY: OnceLock<NewYorkFedCalendar> = OnceLock::new();

/// The Federal Reserve Bank of New York calendar, identified as `USNY`.
///
/// Federal holidays falling on a Sunday are observed on the Monday.
/// Holidays falling on a Saturday are not moved.
#[derive(Debug, Clone)]
pub struct NewYorkFedCalendar {
    bitmap: HolidayBitmap,
}

impl NewYorkFedCalendar {
    /// Builds the calendar.
    pub fn new() -> Self {
        let fixed = |from: i32, month: u32, day: u32| {
            move |year: i32| -> Vec<NaiveDate> {
                if year < from {
                    return Vec::new();
                }
                NaiveDate::from_ymd_opt(year, month, day)
                    .map(sunday_to_monday)
                    .into_iter()
                    .collect()
            }
        };

        Self {
            bitmap: HolidayCalendarBuilder::new()
                .rule(fixed(1970, 1, 1))
                .nth_weekday(1, Weekday::Mon, 3)
                .nth_weekday(2, Weekday::Mon, 3)
                .last_weekday(5, Weekday::Mon)
                .rule(fixed(2022, 6, 19))
                .rule(fixed(1970, 7, 4))
                .nth_weekday(9, Weekday::Mon, 1)
                .nth_weekday(10, Weekday::Mon, 2)
                .rule(fixed(1970, 11, 11))
                .nth_weekday(11, Weekday::Thu, 4)
                .rule(fixed(1970, 12, 25))
                .build(),
        }
    }

    /// The shared instance.
    pub fn global() -> &'static NewYorkFedCalendar {
        USNY.get_or_init(NewYorkFedCalendar::new)
    }
}

impl Default for NewYorkFedCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for NewYorkFedCalendar {
    fn name(&self) -> &str {
        "USNY"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day(date.as_naive_date())
    }
}

fn sunday_to_monday(date: NaiveDate) -> NaiveDate {
    if date.weekday() == Weekday::Sun {
        date.succ_opt().unwrap_or(date)
    } else {
        date
    }
}
