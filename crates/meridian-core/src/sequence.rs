//! Date sequences used to pick futures contract dates.
//!
//! A sequence is an infinite, ordered set of qualifying dates, such as the
//! third Wednesday of each quarter month. Futures conventions use one to find
//! the start of the contract period and the start of the next one.

use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::{Date, Period, YearMonth};

/// A named sequence of qualifying dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateSequence {
    /// Third Wednesday of March, June, September and December.
    QuarterlyImm,
    /// Third Wednesday of every month.
    MonthlyImm,
    /// 10th of March, June, September and December.
    Quarterly10th,
    /// First day of every month.
    Monthly1st,
    /// First day of March, June, September and December.
    Quarterly1st,
}

impl DateSequence {
    /// Every known sequence.
    pub const ALL: [DateSequence; 5] = [
        DateSequence::QuarterlyImm,
        DateSequence::MonthlyImm,
        DateSequence::Quarterly10th,
        DateSequence::Monthly1st,
        DateSequence::Quarterly1st,
    ];

    /// The unique name, such as `Quarterly-IMM`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DateSequence::QuarterlyImm => "Quarterly-IMM",
            DateSequence::MonthlyImm => "Monthly-IMM",
            DateSequence::Quarterly10th => "Quarterly-10th",
            DateSequence::Monthly1st => "Monthly-1st",
            DateSequence::Quarterly1st => "Quarterly-1st",
        }
    }

    /// Looks a sequence up by name, ignoring case.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] for an unknown or blank name.
    pub fn lookup(name: &str) -> CoreResult<DateSequence> {
        Self::ALL
            .into_iter()
            .find(|seq| seq.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CoreError::not_found("DateSequence", name))
    }

    /// The interval between successive dates.
    #[must_use]
    pub fn period(&self) -> Period {
        if self.is_quarterly() {
            Period::of_months(3)
        } else {
            Period::of_months(1)
        }
    }

    /// The first qualifying date on or after `date`.
    #[must_use]
    pub fn next_or_same(&self, date: Date) -> Date {
        let mut month = YearMonth::from_date(date);
        loop {
            if let Some(candidate) = self.date_in(month) {
                if candidate >= date {
                    trace!("{self}: next or same of {date} is {candidate}");
                    return candidate;
                }
            }
            month = month.plus_months(1);
        }
    }

    /// The first qualifying date strictly after `date`.
    #[must_use]
    pub fn next(&self, date: Date) -> Date {
        self.next_or_same(date.add_days(1))
    }

    /// The `sequence_number`-th qualifying date, counting `date` itself if it
    /// qualifies. `1` is the same as [`next_or_same`](Self::next_or_same).
    ///
    /// # Errors
    ///
    /// Fails if `sequence_number` is zero.
    pub fn nth_or_same(&self, date: Date, sequence_number: u32) -> CoreResult<Date> {
        check_sequence_number(sequence_number)?;
        let first = self.next_or_same(date);
        if sequence_number == 1 {
            return Ok(first);
        }
        self.nth(first, sequence_number - 1)
    }

    /// The `sequence_number`-th qualifying date strictly after `date`.
    /// `1` is the same as [`next`](Self::next).
    ///
    /// # Errors
    ///
    /// Fails if `sequence_number` is zero.
    pub fn nth(&self, date: Date, sequence_number: u32) -> CoreResult<Date> {
        check_sequence_number(sequence_number)?;
        let mut result = date;
        for _ in 0..sequence_number {
            result = self.next(result);
        }
        Ok(result)
    }

    /// The qualifying date for a contract month.
    ///
    /// This is the first qualifying date on or after the first day of the
    /// month, so for a quarterly sequence a non-quarter month resolves to the
    /// following quarter month.
    #[must_use]
    pub fn date_matching(&self, year_month: YearMonth) -> Date {
        self.next_or_same(year_month.first_day())
    }

    fn is_quarterly(&self) -> bool {
        matches!(
            self,
            DateSequence::QuarterlyImm | DateSequence::Quarterly10th | DateSequence::Quarterly1st
        )
    }

    /// The sequence date within a month, if the month takes part.
    fn date_in(&self, month: YearMonth) -> Option<Date> {
        if self.is_quarterly() && month.month() % 3 != 0 {
            return None;
        }
        match self {
            DateSequence::QuarterlyImm | DateSequence::MonthlyImm => Some(third_wednesday(month)),
            DateSequence::Quarterly10th => month.at_day(10).ok(),
            DateSequence::Monthly1st | DateSequence::Quarterly1st => Some(month.first_day()),
        }
    }
}

fn check_sequence_number(sequence_number: u32) -> CoreResult<()> {
    if sequence_number == 0 {
        return Err(CoreError::invalid_argument(
            "Sequence number must be 1 or greater",
        ));
    }
    Ok(())
}

/// The IMM date of a month: its third Wednesday.
#[must_use]
pub fn third_wednesday(month: YearMonth) -> Date {
    let first = month.first_day();
    let weekday = i64::from(first.weekday().num_days_from_monday());
    let days_to_wed = (2 - weekday + 7) % 7;
    first.add_days(days_to_wed + 14)
}

impl fmt::Display for DateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DateSequence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl TryFrom<String> for DateSequence {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::lookup(&value)
    }
}

impl From<DateSequence> for String {
    fn from(value: DateSequence) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_third_wednesday() {
        assert_eq!(third_wednesday(ym(2020, 3)), d(2020, 3, 18));
        assert_eq!(third_wednesday(ym(2020, 6)), d(2020, 6, 17));
        assert_eq!(third_wednesday(ym(2020, 9)), d(2020, 9, 16));
        // month starting on a Wednesday
        assert_eq!(third_wednesday(ym(2020, 1)), d(2020, 1, 15));
    }

    #[test]
    fn test_quarterly_imm() {
        let seq = DateSequence::QuarterlyImm;
        assert_eq!(seq.next_or_same(d(2020, 1, 25)), d(2020, 3, 18));
        assert_eq!(seq.next_or_same(d(2020, 3, 18)), d(2020, 3, 18));
        assert_eq!(seq.next(d(2020, 3, 18)), d(2020, 6, 17));
        assert_eq!(seq.next_or_same(d(2020, 12, 17)), d(2021, 3, 17));
        assert_eq!(seq.date_matching(ym(2020, 2)), d(2020, 3, 18));
        assert_eq!(seq.date_matching(ym(2020, 6)), d(2020, 6, 17));
    }

    #[test]
    fn test_monthly_imm() {
        let seq = DateSequence::MonthlyImm;
        assert_eq!(seq.next_or_same(d(2020, 1, 25)), d(2020, 2, 19));
        assert_eq!(seq.date_matching(ym(2020, 2)), d(2020, 2, 19));
    }

    #[test]
    fn test_quarterly_10th() {
        let seq = DateSequence::Quarterly10th;
        assert_eq!(seq.next_or_same(d(2020, 3, 10)), d(2020, 3, 10));
        assert_eq!(seq.next(d(2020, 3, 10)), d(2020, 6, 10));
        assert_eq!(seq.date_matching(ym(2020, 4)), d(2020, 6, 10));
    }

    #[test]
    fn test_monthly_1st() {
        let seq = DateSequence::Monthly1st;
        assert_eq!(seq.next_or_same(d(2020, 2, 1)), d(2020, 2, 1));
        assert_eq!(seq.next(d(2020, 2, 1)), d(2020, 3, 1));
        assert_eq!(seq.next_or_same(d(2020, 1, 25)), d(2020, 2, 1));
        assert_eq!(seq.date_matching(ym(2020, 2)), d(2020, 2, 1));
    }

    #[test]
    fn test_quarterly_1st() {
        let seq = DateSequence::Quarterly1st;
        assert_eq!(seq.next_or_same(d(2020, 1, 25)), d(2020, 3, 1));
        assert_eq!(seq.date_matching(ym(2020, 3)), d(2020, 3, 1));
        assert_eq!(seq.next(d(2020, 12, 1)), d(2021, 3, 1));
    }

    #[test]
    fn test_nth() {
        let seq = DateSequence::QuarterlyImm;
        assert_eq!(seq.nth_or_same(d(2020, 2, 25), 1).unwrap(), d(2020, 3, 18));
        assert_eq!(seq.nth_or_same(d(2020, 2, 25), 2).unwrap(), d(2020, 6, 17));
        assert_eq!(seq.nth_or_same(d(2020, 3, 18), 2).unwrap(), d(2020, 6, 17));
        assert_eq!(seq.nth(d(2020, 3, 18), 1).unwrap(), d(2020, 6, 17));
        assert_eq!(seq.nth(d(2020, 3, 18), 3).unwrap(), d(2020, 12, 16));
    }

    #[test]
    fn test_nth_zero_rejected() {
        let seq = DateSequence::Monthly1st;
        assert!(seq.nth(d(2020, 1, 1), 0).is_err());
        assert!(seq.nth_or_same(d(2020, 1, 1), 0).is_err());
    }

    #[test]
    fn test_period() {
        assert_eq!(DateSequence::QuarterlyImm.period(), Period::of_months(3));
        assert_eq!(DateSequence::Monthly1st.period(), Period::of_months(1));
    }

    #[test]
    fn test_lookup() {
        for seq in DateSequence::ALL {
            assert_eq!(DateSequence::lookup(seq.name()).unwrap(), seq);
        }
        assert_eq!(
            "quarterly-imm".parse::<DateSequence>().unwrap(),
            DateSequence::QuarterlyImm
        );
        assert!(DateSequence::lookup("Weekly-Fri").is_err());
        assert!(DateSequence::lookup("").is_err());
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&DateSequence::Monthly1st).unwrap();
        assert_eq!(json, "\"Monthly-1st\"");
        let back: DateSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DateSequence::Monthly1st);
    }
}
