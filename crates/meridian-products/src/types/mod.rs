//! Identifier and descriptive types shared by products and conventions.

mod accrual_method;
mod identifiers;
mod trade_info;

pub use accrual_method::OvernightAccrualMethod;
pub use identifiers::SecurityId;
pub use trade_info::TradeInfo;
