// crates/airportdb-core/src/lib.rs

//! In-memory airport reference database.
//!
//! The packaged dataset is normalized once into an immutable [`AirportDb`];
//! every query borrows from it. Code lookups go through lazily built
//! indices, everything else is a scan.
//!
//! ```rust,no_run
//! use airportdb_core::prelude::*;
//!
//! # fn main() -> airportdb_core::Result<()> {
//! let db = AirportDb::load()?;
//! let lhr = db.by_iata("LHR")?;
//! println!("{}", lhr[0].name());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod codes;
pub mod common;
pub mod db;
pub mod error;
pub mod filter;
pub mod geo;
pub mod index;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod search;
pub mod stats;
pub mod text;
pub mod traits;
// Raw input shapes, only used at the ingestion boundary
#[doc(hidden)]
pub mod raw;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub mod prelude;

pub use crate::batch::DistanceMatrix;
pub use crate::codes::CodeKind;
pub use crate::common::DbStats;
pub use crate::db::AirportDb;
pub use crate::error::{AirportError, Result};
pub use crate::filter::{FilterValue, Filters};
pub use crate::geo::NearestAirport;
pub use crate::index::IndexField;
pub use crate::model::{Airport, AirportLinks, AirportSummary, Coordinates};
pub use crate::stats::{AirportStats, ContinentStats, RankBy};
pub use crate::traits::NameMatch;
