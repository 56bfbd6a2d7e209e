//! Market conventions for overnight index futures.
//!
//! A convention turns a trade date and a choice of contract into a fully
//! dated [`OvernightFutureTrade`](crate::instruments::OvernightFutureTrade).
//! The standard conventions are registered once in the global
//! [`ConventionRegistry`] and looked up by name:
//!
//! - `GBP-SONIA-Quarterly-IMM`: three-month SONIA futures
//! - `USD-SOFR-Quarterly-IMM`: three-month SOFR futures
//! - `USD-SOFR-Monthly-1st`: one-month SOFR futures
//! - `USD-FED-FUND-Monthly-1st`: 30-day Fed Funds futures

mod definition;
mod overnight_future;
mod registry;
mod standard;
mod template;

pub use definition::ConventionDefinition;
pub use overnight_future::{OvernightFutureConvention, OvernightFutureConventionBuilder};
pub use registry::{ConventionRegistry, OvernightFutureConventions};
pub use template::OvernightFutureTemplate;
