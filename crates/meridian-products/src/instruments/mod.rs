//! Futures products and trades.

mod overnight_future;

pub use overnight_future::{OvernightFuture, OvernightFutureBuilder, OvernightFutureTrade};
