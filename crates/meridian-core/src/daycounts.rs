//! Day count conventions used by overnight rate indices.
//!
//! Overnight fixings accrue on actual days, over a 360-day year for USD and
//! EUR and over a 365-day year for GBP.
//!
//! ```rust
//! use meridian_core::daycounts::{DayCount, DayCountConvention};
//! use meridian_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 4, 1).unwrap();
//! assert_eq!(DayCountConvention::Act360.year_fraction(start, end), dec!(0.25));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Date;

/// A day count convention.
pub trait DayCount: Send + Sync {
    /// The market name, such as `ACT/360`.
    fn name(&self) -> &'static str;

    /// Fraction of a year between two dates, negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Days between two dates as counted by the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Actual/360.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Fixed, the basis is 365 even in leap years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// The supported conventions, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365F,
}

impl DayCountConvention {
    /// The market name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// The implementation as a trait object.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365F => &Act365Fixed,
        }
    }

    /// Shortcut for the implementation's year fraction.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        self.to_day_count().year_fraction(start, end)
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(' ', "").as_str() {
            "ACT/360" | "ACTUAL/360" | "A360" => Ok(DayCountConvention::Act360),
            "ACT/365F" | "ACT/365FIXED" | "ACTUAL/365FIXED" | "A365F" => {
                Ok(DayCountConvention::Act365F)
            }
            _ => Err(CoreError::not_found("DayCount", s)),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for String {
    fn from(value: DayCountConvention) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_act360() {
        let dc = Act360;
        assert_eq!(dc.day_count(d(2025, 1, 1), d(2025, 4, 1)), 90);
        assert_eq!(dc.year_fraction(d(2025, 1, 1), d(2025, 4, 1)), dec!(0.25));
        assert_eq!(
            dc.year_fraction(d(2025, 1, 1), d(2026, 1, 1)),
            dec!(365) / dec!(360)
        );
    }

    #[test]
    fn test_act365f_leap_year() {
        let dc = Act365Fixed;
        assert_eq!(
            dc.year_fraction(d(2024, 1, 1), d(2025, 1, 1)),
            dec!(366) / dec!(365)
        );
        assert_eq!(dc.year_fraction(d(2025, 1, 1), d(2026, 1, 1)), Decimal::ONE);
    }

    #[test]
    fn test_negative_fraction() {
        assert!(Act360.year_fraction(d(2025, 4, 1), d(2025, 1, 1)) < Decimal::ZERO);
    }

    #[test]
    fn test_convention_names() {
        assert_eq!(DayCountConvention::Act360.to_string(), "ACT/360");
        assert_eq!(DayCountConvention::Act365F.to_string(), "ACT/365F");
        assert_eq!(
            "Act/365 Fixed".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365F
        );
        assert!("30/360".parse::<DayCountConvention>().is_err());
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&DayCountConvention::Act360).unwrap();
        assert_eq!(json, "\"ACT/360\"");
        let back: DayCountConvention = serde_json::from_str("\"ACT/365F\"").unwrap();
        assert_eq!(back, DayCountConvention::Act365F);
    }
}
