//! US government securities (USGS) holiday calendar.
//!
//! Follows the SIFMA recommended full closes for the US bond market, the
//! calendar used for SOFR fixings and CME SOFR futures.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::bitmap::{observed_date, HolidayBitmap, HolidayCalendarBuilder};
use super::Calendar;
use crate::types::Date;

static USGS: OnceLock<UsGovernmentCalendar> = OnceLock::new();

/// The US government securities calendar, identified as `USGS`.
///
/// ## Holidays
///
/// - New Year's Day (Sunday moves to Monday, Saturday is not observed)
/// - Martin Luther King Jr. Day (3rd Monday in January, from 1986)
/// - Presidents' Day (3rd Monday in February)
/// - Good Friday
/// - Memorial Day (last Monday in May)
/// - Juneteenth (June 19, observed, from 2022)
/// - Independence Day (July 4, observed)
/// - Labor Day (1st Monday in September)
/// - Columbus Day (2nd Monday in October)
/// - Veterans Day (November 11, observed)
/// - Thanksgiving Day (4th Thursday in November)
/// - Christmas Day (December 25, observed)
#[derive(Debug, Clone)]
pub struct UsGovernmentCalendar {
    bitmap: HolidayBitmap,
}

impl UsGovernmentCalendar {
    /// Builds the calendar.
    pub fn new() -> Self {
        Self {
            bitmap: HolidayCalendarBuilder::new()
                .rule(new_years_day)
                .rule(|year| {
                    if year >= 1986 {
                        super::nth_weekday_of_month(year, 1, Weekday::Mon, 3).into_iter().collect()
                    } else {
                        Vec::new()
                    }
                })
                .nth_weekday(2, Weekday::Mon, 3)
                .easter_offset(-2)
                .last_weekday(5, Weekday::Mon)
                .fixed_from(2022, 6, 19, true)
                .fixed(7, 4, true)
                .nth_weekday(9, Weekday::Mon, 1)
                .nth_weekday(10, Weekday::Mon, 2)
                .fixed(11, 11, true)
                .nth_weekday(11, Weekday::Thu, 4)
                .fixed(12, 25, true)
                .rule(one_off)
                .build(),
        }
    }

    /// The shared instance.
    pub fn global() -> &'static UsGovernmentCalendar {
        USGS.get_or_init(UsGovernmentCalendar::new)
    }
}

impl Default for UsGovernmentCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for UsGovernmentCalendar {
    fn name(&self) -> &str {
        "USGS"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day(date.as_naive_date())
    }
}

fn new_years_day(year: i32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .filter(|date| date.weekday() != Weekday::Sat)
        .map(observed_date)
        .into_iter()
        .collect()
}

fn one_off(year: i32) -> Vec<NaiveDate> {
    let dates: &[(u32, u32)] = match year {
        // Hurricane Sandy
        2012 => &[(10, 30)],
        // state funerals
        2004 => &[(6, 11)],
        2007 => &[(1, 2)],
        2018 => &[(12, 5)],
        2025 => &[(1, 9)],
        _ => &[],
    };
    dates
        .iter()
        .filter_map(|(m, d)| NaiveDate::from_ymd_opt(year, *m, *d))
        .collect()
}
