//! London (GBLO) holiday calendar.
//!
//! England and Wales bank holidays, used for SONIA fixings and ICE Futures
//! Europe short-term interest rate contracts.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::bitmap::{last_weekday_of_month, nth_weekday_of_month, HolidayBitmap, HolidayCalendarBuilder};
use super::Calendar;
use crate::types::Date;

static GBLO: OnceLock<LondonCalendar> = OnceLock::new();

/// The London banking calendar, identified as `GBLO`.
///
/// ## Holidays
///
/// - New Year's Day (substitute Monday if on a weekend)
/// - Good Friday and Easter Monday
/// - Early May bank holiday (first Monday of May)
/// - Spring bank holiday (last Monday of May)
/// - Summer bank holiday (last Monday of August)
/// - Christmas Day and Boxing Day (with substitutes)
///
/// Royal events and moved bank holidays are included for the years they
/// happened.
#[derive(Debug, Clone)]
pub struct LondonCalendar {
    bitmap: HolidayBitmap,
}

impl LondonCalendar {
    /// Builds the calendar.
    pub fn new() -> Self {
        Self {
            bitmap: HolidayCalendarBuilder::new()
                .rule(new_years_day)
                .easter_offset(-2)
                .easter_offset(1)
                .rule(early_may)
                .rule(spring)
                .last_weekday(8, Weekday::Mon)
                .rule(christmas)
                .rule(one_off)
                .build(),
        }
    }

    /// The shared instance.
    pub fn global() -> &'static LondonCalendar {
        GBLO.get_or_init(LondonCalendar::new)
    }
}

impl Default for LondonCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for LondonCalendar {
    fn name(&self) -> &str {
        "GBLO"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day(date.as_naive_date())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn new_years_day(year: i32) -> Vec<NaiveDate> {
    let day = match ymd(year, 1, 1).map(|d| d.weekday()) {
        Some(Weekday::Sat) => 3,
        Some(Weekday::Sun) => 2,
        _ => 1,
    };
    ymd(year, 1, day).into_iter().collect()
}

fn early_may(year: i32) -> Vec<NaiveDate> {
    match year {
        // VE day anniversaries
        1995 => ymd(1995, 5, 8).into_iter().collect(),
        2020 => ymd(2020, 5, 8).into_iter().collect(),
        _ if year >= 1978 => nth_weekday_of_month(year, 5, Weekday::Mon, 1).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn spring(year: i32) -> Vec<NaiveDate> {
    match year {
        // jubilees
        2002 => ymd(2002, 6, 4).into_iter().collect(),
        2012 => ymd(2012, 6, 4).into_iter().collect(),
        2022 => ymd(2022, 6, 2).into_iter().collect(),
        _ => last_weekday_of_month(year, 5, Weekday::Mon).into_iter().collect(),
    }
}

fn christmas(year: i32) -> Vec<NaiveDate> {
    let days: &[u32] = match ymd(year, 12, 25).map(|d| d.weekday()) {
        Some(Weekday::Fri) => &[25, 28],
        Some(Weekday::Sat) => &[27, 28],
        Some(Weekday::Sun) => &[26, 27],
        _ => &[25, 26],
    };
    days.iter().filter_map(|day| ymd(year, 12, *day)).collect()
}

fn one_off(year: i32) -> Vec<NaiveDate> {
    let dates: &[(u32, u32)] = match year {
        1999 => &[(12, 31)],
        2002 => &[(6, 3)],
        2011 => &[(4, 29)],
        2012 => &[(6, 5)],
        2022 => &[(6, 3), (9, 19)],
        2023 => &[(5, 8)],
        _ => &[],
    };
    dates.iter().filter_map(|(m, d)| ymd(year, *m, *d)).collect()
}
