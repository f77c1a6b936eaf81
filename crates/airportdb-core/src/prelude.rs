// crates/airportdb-core/src/prelude.rs
//! Glob-import for typical callers: `use airportdb_core::prelude::*;`

pub use crate::{
    Airport, AirportDb, AirportError, AirportStats, ContinentStats, DistanceMatrix, FilterValue,
    Filters, NameMatch, NearestAirport, RankBy, Result,
};
