//! Year-month value used to name futures contract months.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A calendar month of a specific year, such as `2020-02`.
///
/// Serialized as the ISO string `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, validating the month.
    pub fn new(year: i32, month: u32) -> CoreResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::invalid_date(format!(
                "month must be between 1 and 12: {year}-{month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The year-month containing a date.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The date for a day of this month.
    pub fn at_day(&self, day: u32) -> CoreResult<Date> {
        Date::from_ymd(self.year, self.month, day)
    }

    /// The first day of this month.
    #[must_use]
    pub fn first_day(&self) -> Date {
        Date::from_ymd(self.year, self.month, 1).expect("first of month should always be valid")
    }

    /// Adds months, rolling the year as required.
    #[must_use]
    pub fn plus_months(&self, months: i32) -> Self {
        let total = self.proleptic_month() + i64::from(months);
        Self {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Whole months from `self` to `other`.
    #[must_use]
    pub fn months_until(&self, other: &YearMonth) -> i32 {
        (other.proleptic_month() - self.proleptic_month()) as i32
    }

    fn proleptic_month(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .rsplit_once('-')
            .ok_or_else(|| CoreError::invalid_date(format!("Cannot parse year-month: {s}")))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse year-month: {s}")))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse year-month: {s}")))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
