//! Overnight rate indices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use meridian_core::daycounts::DayCountConvention;
use meridian_core::{Currency, Date, HolidayCalendarId, ReferenceData};

use crate::error::{ProductError, ProductResult};

/// An overnight interest rate index such as SOFR or SONIA.
///
/// An index is identified by its unique name. A built-in index serializes
/// as its name and is resolved through [`OvernightIndex::lookup`]; any other
/// index serializes with all of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IndexRepr", into = "IndexRepr")]
pub struct OvernightIndex {
    name: Cow<'static, str>,
    currency: Currency,
    fixing_calendar: HolidayCalendarId,
    day_count: DayCountConvention,
    publication_date_offset: i32,
    effective_date_offset: i32,
}

impl OvernightIndex {
    /// Sterling Overnight Index Average, published on the fixing date.
    pub const GBP_SONIA: OvernightIndex = OvernightIndex {
        name: Cow::Borrowed("GBP-SONIA"),
        currency: Currency::GBP,
        fixing_calendar: HolidayCalendarId::GBLO,
        day_count: DayCountConvention::Act365F,
        publication_date_offset: 0,
        effective_date_offset: 0,
    };

    /// Secured Overnight Financing Rate, published the next business day.
    pub const USD_SOFR: OvernightIndex = OvernightIndex {
        name: Cow::Borrowed("USD-SOFR"),
        currency: Currency::USD,
        fixing_calendar: HolidayCalendarId::USGS,
        day_count: DayCountConvention::Act360,
        publication_date_offset: 1,
        effective_date_offset: 0,
    };

    /// Effective Federal Funds Rate, published the next business day.
    pub const USD_FED_FUND: OvernightIndex = OvernightIndex {
        name: Cow::Borrowed("USD-FED-FUND"),
        currency: Currency::USD,
        fixing_calendar: HolidayCalendarId::USNY,
        day_count: DayCountConvention::Act360,
        publication_date_offset: 1,
        effective_date_offset: 0,
    };

    /// Euro Short-Term Rate, published the next business day.
    pub const EUR_ESTR: OvernightIndex = OvernightIndex {
        name: Cow::Borrowed("EUR-ESTR"),
        currency: Currency::EUR,
        fixing_calendar: HolidayCalendarId::EUTA,
        day_count: DayCountConvention::Act360,
        publication_date_offset: 1,
        effective_date_offset: 0,
    };

    /// Creates an index outside the built-in set.
    ///
    /// # Errors
    ///
    /// Fails if the name is blank or an offset is negative.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        fixing_calendar: HolidayCalendarId,
        day_count: DayCountConvention,
        publication_date_offset: i32,
        effective_date_offset: i32,
    ) -> ProductResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::invalid_spec("index name must not be blank"));
        }
        if publication_date_offset < 0 || effective_date_offset < 0 {
            return Err(ProductError::invalid_spec(format!(
                "index offsets must not be negative: {name}"
            )));
        }
        Ok(Self {
            name: Cow::Owned(name),
            currency,
            fixing_calendar,
            day_count,
            publication_date_offset,
            effective_date_offset,
        })
    }

    /// The built-in indices.
    pub fn standard() -> [OvernightIndex; 4] {
        [
            Self::GBP_SONIA,
            Self::USD_SOFR,
            Self::USD_FED_FUND,
            Self::EUR_ESTR,
        ]
    }

    /// Looks up a built-in index by name, ignoring case.
    ///
    /// # Errors
    ///
    /// [`ProductError::NotFound`] for an unknown or blank name.
    pub fn lookup(name: &str) -> ProductResult<OvernightIndex> {
        Self::standard()
            .into_iter()
            .find(|index| index.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ProductError::not_found("OvernightIndex", name))
    }

    /// The unique name, such as `USD-SOFR`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currency of the index.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The calendar that determines fixing dates.
    pub fn fixing_calendar(&self) -> &HolidayCalendarId {
        &self.fixing_calendar
    }

    /// The day count of the published rate.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Business days from fixing to publication.
    pub fn publication_date_offset(&self) -> i32 {
        self.publication_date_offset
    }

    /// Business days from fixing to the start of the rate's deposit period.
    pub fn effective_date_offset(&self) -> i32 {
        self.effective_date_offset
    }

    /// Year fraction between two dates under the index day count.
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        self.day_count.year_fraction(start, end)
    }

    /// True for the built-in indices.
    pub fn is_standard(&self) -> bool {
        Self::standard().contains(self)
    }

    /// The date the rate for a fixing date is published.
    pub fn publication_date(&self, fixing_date: Date, ref_data: &ReferenceData) -> ProductResult<Date> {
        let calendar = ref_data.calendar(&self.fixing_calendar)?;
        Ok(calendar.shift(fixing_date, self.publication_date_offset))
    }

    /// The start of the overnight deposit a fixing date's rate applies to.
    pub fn effective_date(&self, fixing_date: Date, ref_data: &ReferenceData) -> ProductResult<Date> {
        let calendar = ref_data.calendar(&self.fixing_calendar)?;
        Ok(calendar.shift(fixing_date, self.effective_date_offset))
    }
}

impl fmt::Display for OvernightIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for OvernightIndex {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IndexRepr {
    Name(String),
    Full {
        name: String,
        currency: Currency,
        fixing_calendar: HolidayCalendarId,
        day_count: DayCountConvention,
        publication_date_offset: i32,
        effective_date_offset: i32,
    },
}

impl TryFrom<IndexRepr> for OvernightIndex {
    type Error = ProductError;

    fn try_from(value: IndexRepr) -> Result<Self, Self::Error> {
        match value {
            IndexRepr::Name(name) => Self::lookup(&name),
            IndexRepr::Full {
                name,
                currency,
                fixing_calendar,
                day_count,
                publication_date_offset,
                effective_date_offset,
            } => Self::new(
                name,
                currency,
                fixing_calendar,
                day_count,
                publication_date_offset,
                effective_date_offset,
            ),
        }
    }
}

impl From<OvernightIndex> for IndexRepr {
    fn from(value: OvernightIndex) -> Self {
        if value.is_standard() {
            return IndexRepr::Name(value.name.into_owned());
        }
        IndexRepr::Full {
            name: value.name.into_owned(),
            currency: value.currency,
            fixing_calendar: value.fixing_calendar,
            day_count: value.day_count,
            publication_date_offset: value.publication_date_offset,
            effective_date_offset: value.effective_date_offset,
        }
    }
}
