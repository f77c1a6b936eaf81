// crates/airportdb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`AirportDb::stats`](crate::AirportDb::stats), these counts
/// reflect the materialized in-memory database after any country filter that
/// was applied at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub airports: usize,
    pub with_iata: usize,
    pub with_icao: usize,
    pub with_coordinates: usize,
    pub countries: usize,
    pub continents: usize,
}
