//! Shift by a number of days, then apply a business day adjustment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::BusinessDayAdjustment;
use crate::calendars::HolidayCalendarId;
use crate::error::CoreResult;
use crate::reference_data::ReferenceData;
use crate::types::Date;

/// Adds `days` counted in `calendar`, then applies `adjustment`.
///
/// When `calendar` is [`HolidayCalendarId::NO_HOLIDAYS`] the shift is in
/// calendar days, otherwise in business days of that calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaysAdjustment {
    days: i32,
    calendar: HolidayCalendarId,
    adjustment: BusinessDayAdjustment,
}

impl DaysAdjustment {
    /// Leaves every date unchanged.
    pub const NONE: DaysAdjustment = DaysAdjustment {
        days: 0,
        calendar: HolidayCalendarId::NO_HOLIDAYS,
        adjustment: BusinessDayAdjustment::NONE,
    };

    /// A shift of calendar days with no further adjustment.
    pub fn of_calendar_days(days: i32) -> Self {
        Self::of_calendar_days_with(days, BusinessDayAdjustment::NONE)
    }

    /// A shift of calendar days followed by an adjustment.
    pub fn of_calendar_days_with(days: i32, adjustment: BusinessDayAdjustment) -> Self {
        Self {
            days,
            calendar: HolidayCalendarId::NO_HOLIDAYS,
            adjustment,
        }
    }

    /// A shift of business days with no further adjustment.
    pub fn of_business_days(days: i32, calendar: HolidayCalendarId) -> Self {
        Self::of_business_days_with(days, calendar, BusinessDayAdjustment::NONE)
    }

    /// A shift of business days followed by an adjustment.
    pub fn of_business_days_with(
        days: i32,
        calendar: HolidayCalendarId,
        adjustment: BusinessDayAdjustment,
    ) -> Self {
        Self {
            days,
            calendar,
            adjustment,
        }
    }

    /// Number of days to shift by.
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Calendar the days are counted in.
    pub fn calendar(&self) -> &HolidayCalendarId {
        &self.calendar
    }

    /// Adjustment applied after the shift.
    pub fn adjustment(&self) -> &BusinessDayAdjustment {
        &self.adjustment
    }

    /// The calendar a result is guaranteed to be a business day in.
    pub fn result_calendar(&self) -> &HolidayCalendarId {
        if self.adjustment.calendar() == &HolidayCalendarId::NO_HOLIDAYS {
            &self.calendar
        } else {
            self.adjustment.calendar()
        }
    }

    /// Shifts and adjusts a date.
    ///
    /// # Errors
    ///
    /// Fails if either calendar is not in the reference data.
    pub fn adjust(&self, date: Date, ref_data: &ReferenceData) -> CoreResult<Date> {
        let calendar = ref_data.calendar(&self.calendar)?;
        let shifted = calendar.shift(date, self.days);
        self.adjustment.adjust(shifted, ref_data)
    }
}

impl Default for DaysAdjustment {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for DaysAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.days.abs() == 1 { "day" } else { "days" };
        if self.calendar == HolidayCalendarId::NO_HOLIDAYS {
            write!(f, "{} calendar {unit}", self.days)?;
        } else {
            write!(f, "{} business {unit} using calendar {}", self.days, self.calendar)?;
        }
        if self.adjustment != BusinessDayAdjustment::NONE {
            write!(f, " then apply {}", self.adjustment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::BusinessDayConvention;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_calendar_days() {
        let ref_data = ReferenceData::empty();
        let adj = DaysAdjustment::of_calendar_days(-1);
        assert_eq!(adj.adjust(d(2020, 6, 17), &ref_data).unwrap(), d(2020, 6, 16));
        assert_eq!(adj.adjust(d(2020, 3, 1), &ref_data).unwrap(), d(2020, 2, 29));
    }

    #[test]
    fn test_calendar_days_then_preceding() {
        let ref_data = ReferenceData::standard();
        let adj = DaysAdjustment::of_calendar_days_with(
            -1,
            BusinessDayAdjustment::of(BusinessDayConvention::Preceding, HolidayCalendarId::USGS),
        );
        // 2020-03-01 minus one day is Saturday 2020-02-29
        assert_eq!(adj.adjust(d(2020, 3, 1), &ref_data).unwrap(), d(2020, 2, 28));
        assert_eq!(adj.result_calendar(), &HolidayCalendarId::USGS);
    }

    #[test]
    fn test_zero_days_then_following() {
        let ref_data = ReferenceData::standard();
        let adj = DaysAdjustment::of_calendar_days_with(
            0,
            BusinessDayAdjustment::of(BusinessDayConvention::Following, HolidayCalendarId::GBLO),
        );
        assert_eq!(adj.adjust(d(2020, 6, 17), &ref_data).unwrap(), d(2020, 6, 17));
        assert_eq!(adj.adjust(d(2020, 12, 25), &ref_data).unwrap(), d(2020, 12, 29));
    }

    #[test]
    fn test_business_days() {
        let ref_data = ReferenceData::standard();
        let adj = DaysAdjustment::of_business_days(2, HolidayCalendarId::GBLO);
        // Thursday before Easter 2020, skipping Good Friday and Easter Monday
        assert_eq!(adj.adjust(d(2020, 4, 9), &ref_data).unwrap(), d(2020, 4, 15));
        assert_eq!(adj.result_calendar(), &HolidayCalendarId::GBLO);
    }

    #[test]
    fn test_none() {
        assert_eq!(DaysAdjustment::default(), DaysAdjustment::NONE);
        assert_eq!(DaysAdjustment::of_calendar_days(0), DaysAdjustment::NONE);
        let date = d(2020, 2, 29);
        assert_eq!(DaysAdjustment::NONE.adjust(date, &ReferenceData::empty()).unwrap(), date);
    }

    #[test]
    fn test_display() {
        assert_eq!(DaysAdjustment::of_calendar_days(-1).to_string(), "-1 calendar day");
        let adj = DaysAdjustment::of_calendar_days_with(
            -1,
            BusinessDayAdjustment::of(BusinessDayConvention::Preceding, HolidayCalendarId::USGS),
        );
        assert_eq!(
            adj.to_string(),
            "-1 calendar day then apply Preceding using calendar USGS"
        );
        assert_eq!(
            DaysAdjustment::of_business_days(2, HolidayCalendarId::GBLO).to_string(),
            "2 business days using calendar GBLO"
        );
    }
}
