//! # Meridian Products
//!
//! Overnight index futures and the market conventions that create them.
//!
//! This crate provides:
//!
//! - **Indices**: SONIA, SOFR, Fed Funds and €STR overnight indices
//! - **Instruments**: `OvernightFuture` and `OvernightFutureTrade`
//! - **Conventions**: named futures conventions, their registry and JSON
//!   definitions
//! - **Templates**: relative and absolute contract choices for curve nodes
//!
//! ## Example
//!
//! ```rust
//! use meridian_products::prelude::*;
//! use meridian_core::{Date, ReferenceData, YearMonth};
//!
//! let convention = OvernightFutureConventions::usd_sofr_monthly_1st();
//! let trade = convention
//!     .create_trade(
//!         Date::from_ymd(2020, 1, 25).unwrap(),
//!         SecurityId::of("OG", "SRA-2020-02").unwrap(),
//!         YearMonth::new(2020, 2).unwrap(),
//!         20.0,
//!         5_000_000.0,
//!         0.9845,
//!         &ReferenceData::standard(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(trade.product().last_trade_date(), Date::from_ymd(2020, 2, 28).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::float_cmp)]

pub mod conventions;
pub mod error;
pub mod indices;
pub mod instruments;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    // Conventions
    pub use crate::conventions::{
        ConventionDefinition, ConventionRegistry, OvernightFutureConvention,
        OvernightFutureConventionBuilder, OvernightFutureConventions, OvernightFutureTemplate,
    };

    // Errors
    pub use crate::error::{ProductError, ProductResult};

    // Indices
    pub use crate::indices::OvernightIndex;

    // Instruments
    pub use crate::instruments::{OvernightFuture, OvernightFutureBuilder, OvernightFutureTrade};

    // Types
    pub use crate::types::{OvernightAccrualMethod, SecurityId, TradeInfo};
}

// Re-export commonly used types at crate root
pub use conventions::{OvernightFutureConvention, OvernightFutureConventions};
pub use error::{ProductError, ProductResult};
pub use indices::OvernightIndex;
pub use instruments::{OvernightFuture, OvernightFutureTrade};
