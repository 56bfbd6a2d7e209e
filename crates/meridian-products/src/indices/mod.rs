//! Interest rate indices referenced by futures.

mod overnight;

pub use overnight::OvernightIndex;
