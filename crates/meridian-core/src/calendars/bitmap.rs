//! Bit-per-day holiday storage and rule helpers used to build calendars.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First year covered by generated holiday rules.
pub const MIN_YEAR: i32 = 1970;
/// Last year covered by generated holiday rules.
pub const MAX_YEAR: i32 = 2100;

const DAYS_PER_YEAR_SLOT: usize = 366;
const SLOTS: usize = (MAX_YEAR - MIN_YEAR + 1) as usize * DAYS_PER_YEAR_SLOT;

/// Which days of the week are non-business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekendType {
    /// Saturday and Sunday.
    #[default]
    SaturdaySunday,
    /// Friday and Saturday.
    FridaySaturday,
    /// Sunday only.
    SundayOnly,
    /// Every day of the week can be a business day.
    None,
}

impl WeekendType {
    /// True if the weekday is part of the weekend.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            WeekendType::SundayOnly => weekday == Weekday::Sun,
            WeekendType::None => false,
        }
    }
}

/// One bit per day between [`MIN_YEAR`] and [`MAX_YEAR`], set for holidays.
///
/// Dates outside the covered range are never holidays.
#[derive(Clone)]
pub struct HolidayBitmap {
    words: Vec<u64>,
    weekend: WeekendType,
}

impl std::fmt::Debug for HolidayBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayBitmap")
            .field("weekend", &self.weekend)
            .field("holidays", &self.count_holidays())
            .finish()
    }
}

impl HolidayBitmap {
    /// An empty bitmap with the given weekend.
    pub fn new(weekend: WeekendType) -> Self {
        Self {
            words: vec![0; SLOTS.div_ceil(64)],
            weekend,
        }
    }

    /// The weekend definition.
    #[inline]
    pub fn weekend_type(&self) -> WeekendType {
        self.weekend
    }

    /// Marks a date as a holiday.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        if let Some((word, bit)) = slot(date) {
            self.words[word] |= 1 << bit;
        }
    }

    /// Clears a holiday.
    pub fn remove_holiday(&mut self, date: NaiveDate) {
        if let Some((word, bit)) = slot(date) {
            self.words[word] &= !(1 << bit);
        }
    }

    /// True if the date is a holiday, weekends aside.
    #[inline]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        slot(date).is_some_and(|(word, bit)| self.words[word] & (1 << bit) != 0)
    }

    /// True if the date is neither a weekend day nor a holiday.
    #[inline]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.weekend.is_weekend(date.weekday()) && !self.is_holiday(date)
    }

    /// Number of holidays stored.
    pub fn count_holidays(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// All holidays in ascending order.
    pub fn holidays(&self) -> Vec<NaiveDate> {
        (MIN_YEAR..=MAX_YEAR)
            .flat_map(|year| (1..=366).filter_map(move |ordinal| NaiveDate::from_yo_opt(year, ordinal)))
            .filter(|date| self.is_holiday(*date))
            .collect()
    }
}

fn slot(date: NaiveDate) -> Option<(usize, usize)> {
    let year = date.year();
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    let position = (year - MIN_YEAR) as usize * DAYS_PER_YEAR_SLOT + date.ordinal0() as usize;
    Some((position / 64, position % 64))
}

/// Accumulates holiday rules year by year and produces a [`HolidayBitmap`].
pub struct HolidayCalendarBuilder {
    bitmap: HolidayBitmap,
    first_year: i32,
    last_year: i32,
}

impl HolidayCalendarBuilder {
    /// A builder over the full supported year range with a Saturday/Sunday weekend.
    pub fn new() -> Self {
        Self {
            bitmap: HolidayBitmap::new(WeekendType::SaturdaySunday),
            first_year: MIN_YEAR,
            last_year: MAX_YEAR,
        }
    }

    /// Sets the weekend definition.
    pub fn weekend(mut self, weekend: WeekendType) -> Self {
        self.bitmap.weekend = weekend;
        self
    }

    /// Restricts the years that rules are generated for.
    pub fn year_range(mut self, first: i32, last: i32) -> Self {
        self.first_year = first.max(MIN_YEAR);
        self.last_year = last.min(MAX_YEAR);
        self
    }

    /// Same day every year, optionally moved off a weekend (Sat to Fri, Sun to Mon).
    pub fn fixed(self, month: u32, day: u32, observe_weekend: bool) -> Self {
        self.fixed_from(MIN_YEAR, month, day, observe_weekend)
    }

    /// Like [`fixed`](Self::fixed) but only from a given year onwards.
    pub fn fixed_from(self, from_year: i32, month: u32, day: u32, observe_weekend: bool) -> Self {
        self.rule(move |year| {
            if year < from_year {
                return Vec::new();
            }
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| if observe_weekend { observed_date(date) } else { date })
                .into_iter()
                .collect()
        })
    }

    /// The n-th given weekday of a month.
    pub fn nth_weekday(self, month: u32, weekday: Weekday, n: u32) -> Self {
        self.rule(move |year| nth_weekday_of_month(year, month, weekday, n).into_iter().collect())
    }

    /// The last given weekday of a month.
    pub fn last_weekday(self, month: u32, weekday: Weekday) -> Self {
        self.rule(move |year| last_weekday_of_month(year, month, weekday).into_iter().collect())
    }

    /// A day offset from Easter Sunday (Good Friday is -2, Easter Monday is 1).
    pub fn easter_offset(self, offset_days: i64) -> Self {
        self.rule(move |year| {
            easter_sunday(year)
                .and_then(|easter| easter.checked_add_signed(chrono::Duration::days(offset_days)))
                .into_iter()
                .collect()
        })
    }

    /// Any rule producing the holidays of a year.
    pub fn rule<F>(mut self, holidays_for_year: F) -> Self
    where
        F: Fn(i32) -> Vec<NaiveDate>,
    {
        for year in self.first_year..=self.last_year {
            for date in holidays_for_year(year) {
                self.bitmap.add_holiday(date);
            }
        }
        self
    }

    /// Finishes the calendar.
    pub fn build(self) -> HolidayBitmap {
        self.bitmap
    }
}

impl Default for HolidayCalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Saturday holidays are observed on Friday, Sunday holidays on Monday.
pub fn observed_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date.pred_opt().unwrap_or(date),
        Weekday::Sun => date.succ_opt().unwrap_or(date),
        _ => date,
    }
}

/// The n-th (1-based) occurrence of a weekday within a month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, u8::try_from(n).ok()?)
}

/// The last occurrence of a weekday within a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    let back = (7 + last_day.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    last_day.checked_sub_signed(chrono::Duration::days(i64::from(back)))
}

/// Easter Sunday by the anonymous Gregorian algorithm.
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_remove() {
        let mut bitmap = HolidayBitmap::new(WeekendType::SaturdaySunday);
        assert!(!bitmap.is_holiday(ymd(2020, 1, 1)));
        bitmap.add_holiday(ymd(2020, 1, 1));
        assert!(bitmap.is_holiday(ymd(2020, 1, 1)));
        assert_eq!(bitmap.count_holidays(), 1);
        bitmap.remove_holiday(ymd(2020, 1, 1));
        assert_eq!(bitmap.count_holidays(), 0);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut bitmap = HolidayBitmap::new(WeekendType::None);
        bitmap.add_holiday(ymd(1960, 1, 4));
        assert!(!bitmap.is_holiday(ymd(1960, 1, 4)));
        assert!(bitmap.is_business_day(ymd(1960, 1, 4)));
    }

    #[test]
    fn test_weekend() {
        let bitmap = HolidayBitmap::new(WeekendType::SaturdaySunday);
        assert!(!bitmap.is_business_day(ymd(2020, 2, 29)));
        assert!(!bitmap.is_business_day(ymd(2020, 3, 1)));
        assert!(bitmap.is_business_day(ymd(2020, 3, 2)));
    }

    #[test]
    fn test_nth_and_last_weekday() {
        assert_eq!(nth_weekday_of_month(2020, 3, Weekday::Wed, 3), Some(ymd(2020, 3, 18)));
        assert_eq!(nth_weekday_of_month(2020, 6, Weekday::Wed, 3), Some(ymd(2020, 6, 17)));
        assert_eq!(last_weekday_of_month(2020, 5, Weekday::Mon), Some(ymd(2020, 5, 25)));
        assert_eq!(last_weekday_of_month(2020, 12, Weekday::Thu), Some(ymd(2020, 12, 31)));
    }

    #[test]
    fn test_easter() {
        assert_eq!(easter_sunday(2020), Some(ymd(2020, 4, 12)));
        assert_eq!(easter_sunday(2025), Some(ymd(2025, 4, 20)));
    }

    #[test]
    fn test_observed_date() {
        // 2026-07-04 is a Saturday
        assert_eq!(observed_date(ymd(2026, 7, 4)), ymd(2026, 7, 3));
        // 2021-07-04 is a Sunday
        assert_eq!(observed_date(ymd(2021, 7, 4)), ymd(2021, 7, 5));
    }

    #[test]
    fn test_builder_rules() {
        let bitmap = HolidayCalendarBuilder::new()
            .year_range(2020, 2020)
            .fixed(12, 25, false)
            .easter_offset(-2)
            .build();
        assert!(bitmap.is_holiday(ymd(2020, 12, 25)));
        assert!(bitmap.is_holiday(ymd(2020, 4, 10)));
        assert!(!bitmap.is_holiday(ymd(2021, 12, 25)));
        assert_eq!(bitmap.holidays(), vec![ymd(2020, 4, 10), ymd(2020, 12, 25)]);
    }
}
