// crates/airportdb-core/src/model/mod.rs
pub mod airport;
pub mod convert;
pub mod load;

pub use airport::{Airport, AirportLinks, AirportSummary, Coordinates};

/// File extension of the normalized binary cache.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";
