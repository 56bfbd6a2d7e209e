//! Reference data: the source of holiday calendars.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use log::debug;

use crate::calendars::{
    Calendar, CalendarData, DynamicCalendar, HolidayCalendarId, JointCalendar, LondonCalendar,
    NewYorkFedCalendar, NoHolidaysCalendar, Target2Calendar, UsGovernmentCalendar,
    WeekendCalendar,
};
use crate::error::{CoreError, CoreResult};

static STANDARD: OnceLock<ReferenceData> = OnceLock::new();

/// Holiday calendars keyed by [`HolidayCalendarId`].
///
/// Adjustments and conventions only hold calendar ids; the calendars
/// themselves are resolved here when a date is adjusted. Combined ids such as
/// `GBLO+USNY` resolve to the union of their parts.
///
/// Cloning is cheap, calendars are shared.
#[derive(Clone)]
pub struct ReferenceData {
    calendars: HashMap<HolidayCalendarId, Arc<dyn Calendar>>,
}

impl fmt::Debug for ReferenceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.calendars.keys().map(HolidayCalendarId::name).collect();
        ids.sort_unstable();
        f.debug_struct("ReferenceData").field("calendars", &ids).finish()
    }
}

impl ReferenceData {
    /// The built-in calendars: `NoHolidays`, `Sat/Sun`, `GBLO`, `USGS`,
    /// `USNY` and `EUTA`.
    pub fn standard() -> ReferenceData {
        STANDARD
            .get_or_init(|| {
                debug!("building standard reference data");
                ReferenceData::empty()
                    .with_calendar(HolidayCalendarId::SAT_SUN, WeekendCalendar)
                    .with_calendar(HolidayCalendarId::GBLO, LondonCalendar::global().clone())
                    .with_calendar(HolidayCalendarId::USGS, UsGovernmentCalendar::global().clone())
                    .with_calendar(HolidayCalendarId::USNY, NewYorkFedCalendar::global().clone())
                    .with_calendar(HolidayCalendarId::EUTA, Target2Calendar::global().clone())
            })
            .clone()
    }

    /// Reference data holding only the `NoHolidays` calendar.
    pub fn empty() -> ReferenceData {
        let mut calendars: HashMap<HolidayCalendarId, Arc<dyn Calendar>> = HashMap::new();
        calendars.insert(HolidayCalendarId::NO_HOLIDAYS, Arc::new(NoHolidaysCalendar));
        ReferenceData { calendars }
    }

    /// Adds or replaces a calendar.
    #[must_use]
    pub fn with_calendar(mut self, id: HolidayCalendarId, calendar: impl Calendar + 'static) -> Self {
        self.calendars.insert(id, Arc::new(calendar));
        self
    }

    /// Adds calendars from a JSON array of calendar definitions, each keyed by
    /// its name.
    pub fn with_calendars_json(mut self, json: &str) -> CoreResult<Self> {
        let definitions: Vec<CalendarData> = serde_json::from_str(json)
            .map_err(|e| CoreError::config(format!("Failed to parse calendars: {e}")))?;
        for data in definitions {
            let id = HolidayCalendarId::of(data.name.clone())?;
            let calendar = DynamicCalendar::from_calendar_data(data)?;
            debug!(
                "loaded calendar {id} with {} holidays",
                calendar.holiday_count()
            );
            self.calendars.insert(id, Arc::new(calendar));
        }
        Ok(self)
    }

    /// True if the id resolves, combined ids included.
    pub fn contains(&self, id: &HolidayCalendarId) -> bool {
        self.calendars.contains_key(id)
            || (id.is_combined() && id.parts().all(|part| self.find_part(part).is_some()))
    }

    /// The ids of the calendars held directly.
    pub fn calendar_ids(&self) -> impl Iterator<Item = &HolidayCalendarId> {
        self.calendars.keys()
    }

    /// Resolves a calendar.
    ///
    /// # Errors
    ///
    /// [`CoreError::CalendarNotFound`] if the id, or any part of a combined
    /// id, is unknown.
    pub fn calendar(&self, id: &HolidayCalendarId) -> CoreResult<Arc<dyn Calendar>> {
        if let Some(calendar) = self.calendars.get(id) {
            return Ok(Arc::clone(calendar));
        }
        if !id.is_combined() {
            return Err(CoreError::calendar_not_found(id.name()));
        }

        let parts = id
            .parts()
            .map(|part| {
                self.find_part(part)
                    .ok_or_else(|| CoreError::calendar_not_found(part))
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Arc::new(JointCalendar::new(parts)))
    }

    fn find_part(&self, name: &str) -> Option<Arc<dyn Calendar>> {
        self.calendars
            .iter()
            .find(|(id, _)| id.name() == name)
            .map(|(_, calendar)| Arc::clone(calendar))
    }
}
