//! Overnight index futures and trades in them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use meridian_core::{Currency, Date};

use crate::error::{ProductError, ProductResult};
use crate::indices::OvernightIndex;
use crate::types::{OvernightAccrualMethod, SecurityId, TradeInfo};

/// A futures contract on an overnight rate accrued over a period.
///
/// The contract settles on the rate accrued over `start_date` to `end_date`
/// using the index's daily fixings and the accrual method. The price is
/// quoted as `1 - rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvernightFuture {
    security_id: SecurityId,
    notional: f64,
    accrual_factor: f64,
    last_trade_date: Date,
    start_date: Date,
    end_date: Date,
    index: OvernightIndex,
    accrual_method: OvernightAccrualMethod,
}

impl OvernightFuture {
    /// Creates a builder.
    pub fn builder() -> OvernightFutureBuilder {
        OvernightFutureBuilder::default()
    }

    /// The security identifier.
    pub fn security_id(&self) -> &SecurityId {
        &self.security_id
    }

    /// The contract notional.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Year fraction the accrued rate is scaled by.
    pub fn accrual_factor(&self) -> f64 {
        self.accrual_factor
    }

    /// The last date the contract trades.
    pub fn last_trade_date(&self) -> Date {
        self.last_trade_date
    }

    /// First date of the accrual period.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last date of the accrual period.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Year fraction from start to end under the index day count.
    ///
    /// Unlike [`accrual_factor`](Self::accrual_factor) this counts the actual
    /// days of the period.
    pub fn period_year_fraction(&self) -> Decimal {
        self.index.year_fraction(self.start_date, self.end_date)
    }

    /// The underlying index.
    pub fn index(&self) -> &OvernightIndex {
        &self.index
    }

    /// How fixings are combined over the period.
    pub fn accrual_method(&self) -> OvernightAccrualMethod {
        self.accrual_method
    }

    /// The currency, that of the index.
    pub fn currency(&self) -> Currency {
        self.index.currency()
    }
}

/// Builder for [`OvernightFuture`].
#[derive(Debug, Clone, Default)]
pub struct OvernightFutureBuilder {
    security_id: Option<SecurityId>,
    notional: Option<f64>,
    accrual_factor: Option<f64>,
    last_trade_date: Option<Date>,
    start_date: Option<Date>,
    end_date: Option<Date>,
    index: Option<OvernightIndex>,
    accrual_method: Option<OvernightAccrualMethod>,
}

impl OvernightFutureBuilder {
    /// Sets the security identifier.
    #[must_use]
    pub fn security_id(mut self, security_id: SecurityId) -> Self {
        self.security_id = Some(security_id);
        self
    }

    /// Sets the notional.
    #[must_use]
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the accrual factor.
    #[must_use]
    pub fn accrual_factor(mut self, accrual_factor: f64) -> Self {
        self.accrual_factor = Some(accrual_factor);
        self
    }

    /// Sets the last trade date.
    #[must_use]
    pub fn last_trade_date(mut self, date: Date) -> Self {
        self.last_trade_date = Some(date);
        self
    }

    /// Sets the accrual start date.
    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the accrual end date.
    #[must_use]
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the index.
    #[must_use]
    pub fn index(mut self, index: OvernightIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the accrual method.
    #[must_use]
    pub fn accrual_method(mut self, method: OvernightAccrualMethod) -> Self {
        self.accrual_method = Some(method);
        self
    }

    /// Builds the future.
    ///
    /// # Errors
    ///
    /// Fails if a field is missing, the start date is not before the end
    /// date, the accrual factor is not positive or the notional is not finite.
    pub fn build(self) -> ProductResult<OvernightFuture> {
        let security_id = self
            .security_id
            .ok_or_else(|| ProductError::missing_field("security_id"))?;
        let notional = self
            .notional
            .ok_or_else(|| ProductError::missing_field("notional"))?;
        let accrual_factor = self
            .accrual_factor
            .ok_or_else(|| ProductError::missing_field("accrual_factor"))?;
        let last_trade_date = self
            .last_trade_date
            .ok_or_else(|| ProductError::missing_field("last_trade_date"))?;
        let start_date = self
            .start_date
            .ok_or_else(|| ProductError::missing_field("start_date"))?;
        let end_date = self
            .end_date
            .ok_or_else(|| ProductError::missing_field("end_date"))?;
        let index = self.index.ok_or_else(|| ProductError::missing_field("index"))?;
        let accrual_method = self
            .accrual_method
            .ok_or_else(|| ProductError::missing_field("accrual_method"))?;

        if start_date >= end_date {
            return Err(ProductError::invalid_spec(format!(
                "start date {start_date} must be before end date {end_date}"
            )));
        }
        if accrual_factor <= 0.0 || !accrual_factor.is_finite() {
            return Err(ProductError::invalid_spec(format!(
                "accrual factor must be positive: {accrual_factor}"
            )));
        }
        if !notional.is_finite() {
            return Err(ProductError::invalid_spec("notional must be finite"));
        }

        Ok(OvernightFuture {
            security_id,
            notional,
            accrual_factor,
            last_trade_date,
            start_date,
            end_date,
            index,
            accrual_method,
        })
    }
}

/// A position in an [`OvernightFuture`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvernightFutureTrade {
    info: TradeInfo,
    product: OvernightFuture,
    quantity: f64,
    price: f64,
}

impl OvernightFutureTrade {
    /// Creates a trade.
    ///
    /// `quantity` is the number of contracts, negative for a short position.
    /// `price` is in decimal form, 99.32 is written 0.9932.
    pub fn new(info: TradeInfo, product: OvernightFuture, quantity: f64, price: f64) -> Self {
        Self {
            info,
            product,
            quantity,
            price,
        }
    }

    /// Trade information.
    pub fn info(&self) -> &TradeInfo {
        &self.info
    }

    /// The traded future.
    pub fn product(&self) -> &OvernightFuture {
        &self.product
    }

    /// Number of contracts.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Traded price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// The trade currency, that of the product.
    pub fn currency(&self) -> Currency {
        self.product.currency()
    }

    /// The same trade with a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: f64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// The same trade with a different price.
    #[must_use]
    pub fn with_price(&self, price: f64) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn builder() -> OvernightFutureBuilder {
        OvernightFuture::builder()
            .security_id(SecurityId::of("OG", "1").unwrap())
            .notional(1_000_000.0)
            .accrual_factor(0.25)
            .last_trade_date(d(2020, 6, 16))
            .start_date(d(2020, 3, 18))
            .end_date(d(2020, 6, 16))
            .index(OvernightIndex::USD_SOFR)
            .accrual_method(OvernightAccrualMethod::Compounded)
    }

    #[test]
    fn test_build() {
        let future = builder().build().unwrap();
        assert_eq!(future.currency(), Currency::USD);
        assert_relative_eq!(future.accrual_factor(), 0.25);
        assert_eq!(future.start_date(), d(2020, 3, 18));
        assert_eq!(future.period_year_fraction(), Decimal::new(25, 2));
    }

    #[test]
    fn test_missing_field() {
        let err = OvernightFuture::builder().build().unwrap_err();
        assert_eq!(err, ProductError::missing_field("security_id"));
    }

    #[test]
    fn test_dates_in_order() {
        assert!(builder().end_date(d(2020, 3, 18)).build().is_err());
        assert!(builder().end_date(d(2020, 3, 1)).build().is_err());
    }

    #[test]
    fn test_accrual_factor_positive() {
        assert!(builder().accrual_factor(0.0).build().is_err());
        assert!(builder().accrual_factor(-0.25).build().is_err());
        assert!(builder().accrual_factor(f64::NAN).build().is_err());
    }

    #[test]
    fn test_trade() {
        let future = builder().build().unwrap();
        let trade = OvernightFutureTrade::new(TradeInfo::of(d(2020, 1, 25)), future, 20.0, 0.999);
        assert_eq!(trade.currency(), Currency::USD);
        assert_relative_eq!(trade.with_quantity(-5.0).quantity(), -5.0);
        assert_relative_eq!(trade.with_price(0.998).price(), 0.998);
        assert_eq!(trade.info().trade_date, Some(d(2020, 1, 25)));
    }
}
