//! # Meridian Calc
//!
//! Identifiers and stores for the inputs of a calculation.
//!
//! - **Identifiers**: the [`MarketDataId`] trait and [`CalculationParametersId`]
//! - **Parameters**: [`CalculationParameters`], a set of parameters keyed by type
//! - **Market data**: [`MarketData`], values for a valuation date keyed by
//!   identifier

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod ids;
pub mod market_data;
pub mod parameters;

pub use error::{CalcError, CalcResult};
pub use ids::{CalculationParametersId, MarketDataId};
pub use market_data::{MarketData, MarketDataBuilder};
pub use parameters::{CalculationParameter, CalculationParameters, ReportingCurrency};
