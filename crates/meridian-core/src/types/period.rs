//! Date-based amount of time (years, months and days).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A date-based period such as `3M`, `1Y` or `P2M10D`.
///
/// Years and months are kept separately from days: adding a period to a date
/// adds the total months first and then the days, see
/// [`Date::plus_period`](super::Date::plus_period).
///
/// Weeks are normalized to days on parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// The zero period.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a period from its components.
    #[must_use]
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A period of days.
    #[must_use]
    pub const fn of_days(days: i32) -> Self {
        Self::new(0, 0, days)
    }

    /// A period of weeks, stored as days.
    #[must_use]
    pub const fn of_weeks(weeks: i32) -> Self {
        Self::new(0, 0, weeks * 7)
    }

    /// A period of months.
    #[must_use]
    pub const fn of_months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    /// A period of years.
    #[must_use]
    pub const fn of_years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    /// Years component.
    #[must_use]
    pub fn years(&self) -> i32 {
        self.years
    }

    /// Months component.
    #[must_use]
    pub fn months(&self) -> i32 {
        self.months
    }

    /// Days component.
    #[must_use]
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Years and months combined as months.
    #[must_use]
    pub fn total_months(&self) -> i32 {
        self.years * 12 + self.months
    }

    /// True if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Parses `P1Y2M3D`, `3M`, `2W`, `1Y6M` (the `P` prefix is optional).
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let body = body
            .strip_prefix('P')
            .or_else(|| body.strip_prefix('p'))
            .unwrap_or(body);
        if body.is_empty() {
            return Err(CoreError::invalid_period(input));
        }

        let mut period = Period::ZERO;
        let mut digits = String::new();
        for ch in body.chars() {
            if ch.is_ascii_digit() || (ch == '-' && digits.is_empty()) {
                digits.push(ch);
                continue;
            }
            let amount: i32 = digits
                .parse()
                .map_err(|_| CoreError::invalid_period(input))?;
            digits.clear();
            match ch.to_ascii_uppercase() {
                'Y' => period.years += amount,
                'M' => period.months += amount,
                'W' => period.days += amount * 7,
                'D' => period.days += amount,
                _ => return Err(CoreError::invalid_period(input)),
            }
        }
        if !digits.is_empty() {
            return Err(CoreError::invalid_period(input));
        }

        Ok(if negative { period.negated() } else { period })
    }

    /// Negates each component.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new(-self.years, -self.months, -self.days)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Period> for String {
    fn from(value: Period) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(Period::parse("3M").unwrap(), Period::of_months(3));
        assert_eq!(Period::parse("1Y").unwrap(), Period::of_years(1));
        assert_eq!(Period::parse("2W").unwrap(), Period::of_days(14));
        assert_eq!(Period::parse("10d").unwrap(), Period::of_days(10));
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(Period::parse("P1Y2M3D").unwrap(), Period::new(1, 2, 3));
        assert_eq!(Period::parse("P0D").unwrap(), Period::ZERO);
        assert_eq!(Period::parse("-P1M").unwrap(), Period::of_months(-1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Period::parse("").is_err());
        assert!(Period::parse("P").is_err());
        assert!(Period::parse("3").is_err());
        assert!(Period::parse("3Q").is_err());
        assert!(Period::parse("M3").is_err());
    }

    #[test]
    fn test_total_months() {
        assert_eq!(Period::new(1, 6, 0).total_months(), 18);
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::new(1, 2, 3).to_string(), "P1Y2M3D");
        assert_eq!(Period::of_months(3).to_string(), "P3M");
        assert_eq!(Period::ZERO.to_string(), "P0D");
    }

    #[test]
    fn test_serde_roundtrip_as_string() {
        let p = Period::of_months(3);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"P3M\"");
        assert_eq!(serde_json::from_str::<Period>(&json).unwrap(), p);
    }
}
