//! Holiday calendar identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// The name of a holiday calendar, resolved through
/// [`ReferenceData`](crate::ReferenceData).
///
/// Names joined with `+` identify the union of the named calendars, for
/// example `GBLO+USNY`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HolidayCalendarId(Cow<'static, str>);

impl HolidayCalendarId {
    /// Every day is a business day.
    pub const NO_HOLIDAYS: HolidayCalendarId = HolidayCalendarId(Cow::Borrowed("NoHolidays"));
    /// Saturdays and Sundays only.
    pub const SAT_SUN: HolidayCalendarId = HolidayCalendarId(Cow::Borrowed("Sat/Sun"));
    /// London.
    pub const GBLO: HolidayCalendarId = HolidayCalendarId(Cow::Borrowed("GBLO"));
    /// US government securities.
    pub const USGS: HolidayCalendarId = HolidayCalendarId(Cow::Borrowed("USGS"));
    /// New York Federal Reserve.
    pub const USNY: HolidayCalendarId = HolidayCalendarId(Cow::Borrowed("USNY"));
    /// TARGET2 euro payments.
    pub const EUTA: HolidayCalendarId = HolidayCalendarId(Cow::Borrowed("EUTA"));

    /// Creates an identifier, rejecting blank names and blank `+` parts.
    pub fn of(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.split('+').any(|part| part.trim().is_empty()) {
            return Err(CoreError::invalid_argument(format!(
                "Invalid holiday calendar name: '{name}'"
            )));
        }
        if trimmed.contains('+') {
            let parts: BTreeSet<&str> = trimmed.split('+').map(str::trim).collect();
            return Ok(Self::join(parts));
        }
        Ok(Self(Cow::Owned(trimmed.to_string())))
    }

    /// The calendar name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// True if this identifies more than one calendar.
    pub fn is_combined(&self) -> bool {
        self.0.contains('+')
    }

    /// The individual calendar names.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.0.split('+')
    }

    /// The identifier of the union of both calendars.
    ///
    /// Combining with [`NO_HOLIDAYS`](Self::NO_HOLIDAYS) is a no-op and the
    /// parts are kept sorted and de-duplicated, so combining is commutative.
    #[must_use]
    pub fn combined_with(&self, other: &HolidayCalendarId) -> HolidayCalendarId {
        if self == other {
            return self.clone();
        }
        let parts: BTreeSet<&str> = self.parts().chain(other.parts()).collect();
        Self::join(parts)
    }

    fn join(parts: BTreeSet<&str>) -> Self {
        let parts: Vec<&str> = parts
            .into_iter()
            .filter(|part| *part != Self::NO_HOLIDAYS.name())
            .collect();
        if parts.is_empty() {
            return Self::NO_HOLIDAYS;
        }
        Self(Cow::Owned(parts.join("+")))
    }
}

impl fmt::Display for HolidayCalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HolidayCalendarId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<String> for HolidayCalendarId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<HolidayCalendarId> for String {
    fn from(value: HolidayCalendarId) -> Self {
        value.0.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(HolidayCalendarId::GBLO.name(), "GBLO");
        assert_eq!(HolidayCalendarId::of("GBLO").unwrap(), HolidayCalendarId::GBLO);
        assert_eq!(HolidayCalendarId::NO_HOLIDAYS.to_string(), "NoHolidays");
    }

    #[test]
    fn test_blank_rejected() {
        assert!(HolidayCalendarId::of("").is_err());
        assert!(HolidayCalendarId::of("  ").is_err());
        assert!(HolidayCalendarId::of("GBLO+").is_err());
    }

    #[test]
    fn test_combined_sorted() {
        let a = HolidayCalendarId::USNY.combined_with(&HolidayCalendarId::GBLO);
        let b = HolidayCalendarId::GBLO.combined_with(&HolidayCalendarId::USNY);
        assert_eq!(a, b);
        assert_eq!(a.name(), "GBLO+USNY");
        assert!(a.is_combined());
        assert_eq!(a.parts().collect::<Vec<_>>(), vec!["GBLO", "USNY"]);
        assert_eq!(HolidayCalendarId::of("USNY+GBLO").unwrap(), a);
    }

    #[test]
    fn test_combined_with_no_holidays() {
        assert_eq!(
            HolidayCalendarId::GBLO.combined_with(&HolidayCalendarId::NO_HOLIDAYS),
            HolidayCalendarId::GBLO
        );
        assert_eq!(
            HolidayCalendarId::NO_HOLIDAYS.combined_with(&HolidayCalendarId::NO_HOLIDAYS),
            HolidayCalendarId::NO_HOLIDAYS
        );
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&HolidayCalendarId::USGS).unwrap();
        assert_eq!(json, "\"USGS\"");
        let back: HolidayCalendarId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HolidayCalendarId::USGS);
    }
}
