//! A typed store of market data values.

use log::debug;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use meridian_core::Date;

use crate::error::{CalcError, CalcResult};
use crate::ids::MarketDataId;

type ValueMap<I> = HashMap<I, <I as MarketDataId>::Value>;

/// Market data for a single valuation date.
///
/// Values are stored per identifier type, so each lookup returns the value
/// type the identifier declares.
///
/// ```rust
/// use meridian_calc::{CalculationParameters, CalculationParametersId, MarketData, ReportingCurrency};
/// use meridian_core::{Currency, Date};
///
/// let market_data = MarketData::builder(Date::from_ymd(2020, 1, 24).unwrap())
///     .add_value(
///         CalculationParametersId::STANDARD,
///         CalculationParameters::of(ReportingCurrency(Currency::USD)),
///     )
///     .build();
///
/// let parameters = market_data.value(&CalculationParametersId::STANDARD).unwrap();
/// assert_eq!(parameters.find::<ReportingCurrency>(), Some(&ReportingCurrency(Currency::USD)));
/// ```
#[derive(Clone)]
pub struct MarketData {
    valuation_date: Date,
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    len: usize,
}

impl MarketData {
    /// Creates a builder for the valuation date.
    pub fn builder(valuation_date: Date) -> MarketDataBuilder {
        MarketDataBuilder {
            valuation_date,
            values: HashMap::new(),
            len: 0,
        }
    }

    /// Market data holding no values.
    pub fn empty(valuation_date: Date) -> Self {
        Self::builder(valuation_date).build()
    }

    /// The date the data applies to.
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// The value for `id`.
    ///
    /// # Errors
    ///
    /// [`CalcError::MarketDataNotFound`] if no value is stored for `id`.
    pub fn value<I: MarketDataId>(&self, id: &I) -> CalcResult<&I::Value> {
        self.find_value(id)
            .ok_or_else(|| CalcError::market_data_not_found(format!("{} ({})", id, id.market_data_type())))
    }

    /// The value for `id`, if present.
    pub fn find_value<I: MarketDataId>(&self, id: &I) -> Option<&I::Value> {
        self.values
            .get(&TypeId::of::<I>())
            .and_then(|map| map.downcast_ref::<ValueMap<I>>())
            .and_then(|map| map.get(id))
    }

    /// True if a value is stored for `id`.
    pub fn contains<I: MarketDataId>(&self, id: &I) -> bool {
        self.find_value(id).is_some()
    }

    /// Every identifier of type `I` with a value.
    pub fn ids<I: MarketDataId>(&self) -> Vec<&I> {
        self.values
            .get(&TypeId::of::<I>())
            .and_then(|map| map.downcast_ref::<ValueMap<I>>())
            .map(|map| map.keys().collect())
            .unwrap_or_default()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for MarketData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketData")
            .field("valuation_date", &self.valuation_date)
            .field("len", &self.len)
            .finish()
    }
}

/// Builder for [`MarketData`].
pub struct MarketDataBuilder {
    valuation_date: Date,
    values: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    len: usize,
}

impl MarketDataBuilder {
    /// Adds a value, replacing any value already held for `id`.
    #[must_use]
    pub fn add_value<I: MarketDataId>(mut self, id: I, value: I::Value) -> Self {
        let map = self
            .values
            .entry(TypeId::of::<I>())
            .or_insert_with(|| Box::new(ValueMap::<I>::new()));
        if let Some(map) = map.downcast_mut::<ValueMap<I>>() {
            if map.insert(id, value).is_none() {
                self.len += 1;
            }
        }
        self
    }

    /// Builds the market data.
    pub fn build(self) -> MarketData {
        debug!(
            "market data for {} built with {} values",
            self.valuation_date, self.len
        );
        MarketData {
            valuation_date: self.valuation_date,
            values: self
                .values
                .into_iter()
                .map(|(type_id, map)| (type_id, Arc::from(map)))
                .collect(),
            len: self.len,
        }
    }
}

impl fmt::Debug for MarketDataBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketDataBuilder")
            .field("valuation_date", &self.valuation_date)
            .field("len", &self.len)
            .finish()
    }
}
