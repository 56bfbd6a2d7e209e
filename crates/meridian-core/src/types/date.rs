//! Date type for convention calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::Period;
use crate::error::{CoreError, CoreResult};

/// A calendar date without time zone.
///
/// Newtype over `chrono::NaiveDate` exposing the handful of operations the
/// convention code needs: month arithmetic that clamps the day of month,
/// period addition and whole-month differences.
///
/// # Example
///
/// ```rust
/// use meridian_core::types::{Date, Period};
///
/// let date = Date::from_ymd(2020, 1, 31).unwrap();
/// let later = date.plus_period(Period::of_months(1)).unwrap();
/// assert_eq!(later, Date::from_ymd(2020, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months, clamping to the last valid day of the target month.
    ///
    /// 2020-01-31 plus one month is 2020-02-29.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;
        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a period: total months first (clamping the day), then days.
    pub fn plus_period(&self, period: Period) -> CoreResult<Self> {
        let shifted = match period.total_months() {
            0 => *self,
            months => self.add_months(months)?,
        };
        Ok(shifted.add_days(i64::from(period.days())))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Number of complete months from `self` to `other`.
    ///
    /// A month is complete when the day of month of `other` has been reached,
    /// so 2020-01-31 to 2020-02-29 is zero months. For first-of-month dates
    /// this is the plain difference in calendar months.
    #[must_use]
    pub fn months_until(&self, other: &Date) -> i32 {
        let packed = |d: &Date| {
            i64::from(d.year() * 12 + d.month() as i32) * 32 + i64::from(d.day())
        };
        let start = packed(self);
        let end = packed(other);
        let total = (end - start) / 32;
        total as i32
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        Date(
            self.0
                .with_day(1)
                .expect("first of month should always be valid"),
        )
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(
            self.0
                .with_day(self.days_in_month())
                .expect("end of month should always be valid"),
        )
    }

    /// Checks if the date is the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Days in a month of a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("Invalid month: {month}"),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_date_creation() {
        let d = date(2020, 2, 29);
        assert_eq!(d.year(), 2020);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 29);
        assert!(Date::from_ymd(2021, 2, 29).is_err());
        assert!(Date::from_ymd(2021, 13, 1).is_err());
    }

    #[test]
    fn test_add_months_clamps() {
        assert_eq!(date(2020, 1, 31).add_months(1).unwrap(), date(2020, 2, 29));
        assert_eq!(date(2021, 1, 31).add_months(1).unwrap(), date(2021, 2, 28));
        assert_eq!(date(2020, 3, 15).add_months(-3).unwrap(), date(2019, 12, 15));
        assert_eq!(date(2020, 12, 15).add_months(1).unwrap(), date(2021, 1, 15));
    }

    #[test]
    fn test_plus_period_months_then_days() {
        let d = date(2020, 1, 31);
        let p: Period = "P1M1D".parse().unwrap();
        // 2020-02-29 then one day
        assert_eq!(d.plus_period(p).unwrap(), date(2020, 3, 1));
        assert_eq!(d.plus_period(Period::ZERO).unwrap(), d);
        assert_eq!(d.plus_period(Period::of_days(2)).unwrap(), date(2020, 2, 2));
    }

    #[test]
    fn test_months_until_first_of_month() {
        assert_eq!(date(2020, 3, 1).months_until(&date(2020, 6, 1)), 3);
        assert_eq!(date(2020, 2, 1).months_until(&date(2020, 3, 1)), 1);
        assert_eq!(date(2020, 11, 1).months_until(&date(2021, 2, 1)), 3);
        assert_eq!(date(2020, 6, 1).months_until(&date(2020, 3, 1)), -3);
    }

    #[test]
    fn test_months_until_incomplete_month() {
        assert_eq!(date(2020, 1, 31).months_until(&date(2020, 2, 29)), 0);
        assert_eq!(date(2020, 1, 15).months_until(&date(2020, 2, 15)), 1);
    }

    #[test]
    fn test_start_end_of_month() {
        let d = date(2020, 2, 18);
        assert_eq!(d.start_of_month(), date(2020, 2, 1));
        assert_eq!(d.end_of_month(), date(2020, 2, 29));
        assert!(date(2020, 2, 29).is_end_of_month());
    }

    #[test]
    fn test_parse_and_display() {
        let d = Date::parse("2020-03-18").unwrap();
        assert_eq!(d, date(2020, 3, 18));
        assert_eq!(d.to_string(), "2020-03-18");
        assert!(Date::parse("18/03/2020").is_err());
    }

    #[test]
    fn test_arithmetic_operators() {
        let d = date(2020, 6, 17);
        assert_eq!(d - 1, date(2020, 6, 16));
        assert_eq!(d + 14, date(2020, 7, 1));
        assert_eq!(date(2020, 6, 17) - date(2020, 3, 18), 91);
    }

    #[test]
    fn test_serde() {
        let d = date(2020, 6, 17);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2020-06-17\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }
}
