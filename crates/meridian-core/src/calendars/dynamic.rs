//! Holiday calendars loaded at runtime.
//!
//! ```
//! use meridian_core::calendars::{Calendar, DynamicCalendar};
//! use meridian_core::types::Date;
//!
//! let cal = DynamicCalendar::from_json(
//!     r#"{"name": "XLON", "weekend": "SaturdaySunday", "holidays": ["2025-01-01"]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(cal.name(), "XLON");
//! assert!(cal.is_holiday(Date::from_ymd(2025, 1, 1).unwrap()));
//! assert!(cal.is_business_day(Date::from_ymd(2025, 1, 2).unwrap()));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::bitmap::{HolidayBitmap, WeekendType};
use super::Calendar;
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// A holiday calendar whose holidays come from configuration.
///
/// Lookups cost the same as for the built-in calendars.
#[derive(Clone)]
pub struct DynamicCalendar {
    name: String,
    bitmap: HolidayBitmap,
}

impl fmt::Debug for DynamicCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicCalendar")
            .field("name", &self.name)
            .field("weekend", &self.bitmap.weekend_type())
            .field("holiday_count", &self.bitmap.count_holidays())
            .finish()
    }
}

impl DynamicCalendar {
    /// An empty calendar with the given weekend.
    pub fn new(name: impl Into<String>, weekend: WeekendType) -> Self {
        Self {
            name: name.into(),
            bitmap: HolidayBitmap::new(weekend),
        }
    }

    /// A calendar from a list of holidays.
    pub fn from_dates(
        name: impl Into<String>,
        weekend: WeekendType,
        holidays: impl IntoIterator<Item = Date>,
    ) -> Self {
        let mut cal = Self::new(name, weekend);
        for date in holidays {
            cal.add_holiday(date);
        }
        cal
    }

    /// Parses a calendar from JSON.
    ///
    /// ```json
    /// {
    ///   "name": "GBLO",
    ///   "weekend": "SaturdaySunday",
    ///   "holidays": ["2025-01-01", "2025-12-25"]
    /// }
    /// ```
    ///
    /// `weekend` is optional and defaults to Saturday and Sunday.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let data: CalendarData = serde_json::from_str(json)
            .map_err(|e| CoreError::calendar(format!("Failed to parse JSON: {e}")))?;
        Self::from_calendar_data(data)
    }

    /// Reads a JSON calendar file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::calendar(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Builds a calendar from parsed data.
    pub fn from_calendar_data(data: CalendarData) -> CoreResult<Self> {
        if data.name.trim().is_empty() {
            return Err(CoreError::calendar("calendar name must not be blank"));
        }
        let mut cal = Self::new(data.name, data.weekend.unwrap_or_default());

        for text in &data.holidays {
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|e| CoreError::calendar(format!("Invalid date '{text}': {e}")))?;
            cal.bitmap.add_holiday(date);
        }

        Ok(cal)
    }

    /// Marks a date as a holiday.
    pub fn add_holiday(&mut self, date: Date) {
        self.bitmap.add_holiday(date.as_naive_date());
    }

    /// Removes a holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.bitmap.remove_holiday(date.as_naive_date());
    }

    /// Number of holidays, weekends excluded.
    pub fn holiday_count(&self) -> usize {
        self.bitmap.count_holidays()
    }

    /// The weekend definition.
    pub fn weekend_type(&self) -> WeekendType {
        self.bitmap.weekend_type()
    }

    /// Exports the calendar in its JSON data form.
    pub fn to_calendar_data(&self) -> CalendarData {
        CalendarData {
            name: self.name.clone(),
            weekend: Some(self.bitmap.weekend_type()),
            holidays: self
                .bitmap
                .holidays()
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect(),
        }
    }
}

impl Calendar for DynamicCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day(date.as_naive_date())
    }
}

/// Serialized form of a [`DynamicCalendar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarData {
    /// Calendar identifier, such as `GBLO`.
    pub name: String,
    /// Weekend definition, Saturday and Sunday when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend: Option<WeekendType>,
    /// Holidays as `YYYY-MM-DD` strings.
    #[serde(default)]
    pub holidays: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_from_dates() {
        let cal = DynamicCalendar::from_dates(
            "TEST",
            WeekendType::SaturdaySunday,
            [d(2025, 1, 1), d(2025, 12, 25)],
        );
        assert!(cal.is_holiday(d(2025, 1, 1)));
        assert!(cal.is_business_day(d(2025, 1, 2)));
        assert_eq!(cal.holiday_count(), 2);
    }

    #[test]
    fn test_from_json_defaults_weekend() {
        let cal = DynamicCalendar::from_json(r#"{"name": "XTST", "holidays": ["2025-03-03"]}"#)
            .unwrap();
        assert_eq!(cal.weekend_type(), WeekendType::SaturdaySunday);
        assert!(cal.is_holiday(d(2025, 3, 3)));
        assert!(cal.is_holiday(d(2025, 3, 1)));
    }

    #[test]
    fn test_friday_saturday_weekend() {
        let cal = DynamicCalendar::from_json(r#"{"name": "AEDU", "weekend": "FridaySaturday"}"#)
            .unwrap();
        assert!(cal.is_holiday(d(2025, 1, 3)));
        assert!(cal.is_business_day(d(2025, 1, 5)));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(DynamicCalendar::from_json("not json").is_err());
        assert!(DynamicCalendar::from_json(r#"{"name": "X", "holidays": ["2025-13-01"]}"#).is_err());
        assert!(DynamicCalendar::from_json(r#"{"name": " "}"#).is_err());
    }

    #[test]
    fn test_add_remove_and_export() {
        let mut cal = DynamicCalendar::new("EDIT", WeekendType::SaturdaySunday);
        cal.add_holiday(d(2025, 6, 2));
        cal.add_holiday(d(2025, 6, 3));
        cal.remove_holiday(d(2025, 6, 2));

        let data = cal.to_calendar_data();
        assert_eq!(data.holidays, vec!["2025-06-03".to_string()]);

        let json = serde_json::to_string(&data).unwrap();
        let back = DynamicCalendar::from_json(&json).unwrap();
        assert!(back.is_holiday(d(2025, 6, 3)));
        assert!(back.is_business_day(d(2025, 6, 2)));
    }
}
