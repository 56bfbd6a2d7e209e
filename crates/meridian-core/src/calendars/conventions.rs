//! Business day conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Calendar;
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// How a date falling on a non-business day is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment, the date is kept even if it is a holiday.
    #[default]
    NoAdjust,

    /// Move to the following business day.
    Following,

    /// Move to the following business day, unless that crosses a month end,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless that crosses a month start,
    /// in which case move to the following business day.
    ModifiedPreceding,

    /// Move to the closer of the following and preceding business days,
    /// preferring following on a tie.
    Nearest,

    /// Move to the last business day of the month, whatever the input.
    EndOfMonth,
}

impl BusinessDayConvention {
    /// The convention's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::NoAdjust => "NoAdjust",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "ModifiedPreceding",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::EndOfMonth => "EndOfMonth",
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "NOADJUST" | "UNADJUSTED" | "NONE" => Ok(BusinessDayConvention::NoAdjust),
            "FOLLOWING" | "F" => Ok(BusinessDayConvention::Following),
            "MODIFIEDFOLLOWING" | "MF" => Ok(BusinessDayConvention::ModifiedFollowing),
            "PRECEDING" | "P" => Ok(BusinessDayConvention::Preceding),
            "MODIFIEDPRECEDING" | "MP" => Ok(BusinessDayConvention::ModifiedPreceding),
            "NEAREST" => Ok(BusinessDayConvention::Nearest),
            "ENDOFMONTH" | "EOM" => Ok(BusinessDayConvention::EndOfMonth),
            _ => Err(CoreError::not_found("BusinessDayConvention", s)),
        }
    }
}

/// Adjusts a date according to the given business day convention.
pub(crate) fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> CoreResult<Date> {
    if convention == BusinessDayConvention::EndOfMonth {
        return Ok(calendar.previous_or_same(date.end_of_month()));
    }
    if convention == BusinessDayConvention::NoAdjust || calendar.is_business_day(date) {
        return Ok(date);
    }

    let adjusted = match convention {
        BusinessDayConvention::Following => calendar.next_or_same(date),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = calendar.next_or_same(date);
            if adjusted.month() != date.month() {
                calendar.previous_or_same(date)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Preceding => calendar.previous_or_same(date),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = calendar.previous_or_same(date);
            if adjusted.month() != date.month() {
                calendar.next_or_same(date)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Nearest => {
            let fwd = calendar.next_or_same(date);
            let back = calendar.previous_or_same(date);
            if date.days_between(&fwd) <= back.days_between(&date) {
                fwd
            } else {
                back
            }
        }

        BusinessDayConvention::NoAdjust | BusinessDayConvention::EndOfMonth => date,
    };

    Ok(adjusted)
}
