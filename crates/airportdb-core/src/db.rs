// crates/airportdb-core/src/db.rs

//! # Dataset Store
//!
//! [`AirportDb`] owns the normalized record collection. The records are
//! immutable after construction; the secondary indices are derived lazily,
//! at most once each, behind [`OnceCell`]s so concurrent first use blocks
//! until the single build finishes.

use crate::common::DbStats;
use crate::index::CodeIndex;
use crate::model::convert::from_raw;
use crate::model::Airport;
use crate::raw::AirportRaw;
use once_cell::sync::OnceCell;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct AirportDb {
    airports: Vec<Airport>,
    pub(crate) iata_index: OnceCell<CodeIndex>,
    pub(crate) icao_index: OnceCell<CodeIndex>,
}

impl AirportDb {
    /// Wraps already normalized records. Dataset order is preserved.
    pub fn from_airports(airports: Vec<Airport>) -> Self {
        Self {
            airports,
            iata_index: OnceCell::new(),
            icao_index: OnceCell::new(),
        }
    }

    /// Normalizes raw records (see [`crate::model::convert`]).
    pub fn from_raw(raw: Vec<AirportRaw>, filter_iso2: Option<&[&str]>) -> Self {
        Self::from_airports(from_raw(raw, filter_iso2))
    }

    /// Parses a JSON array of raw records from any reader.
    #[cfg(feature = "json")]
    pub fn from_reader<R: std::io::Read>(
        reader: R,
        filter_iso2: Option<&[&str]>,
    ) -> crate::Result<Self> {
        let raw: Vec<AirportRaw> = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw, filter_iso2))
    }

    #[cfg(feature = "json")]
    pub fn from_json_slice(bytes: &[u8]) -> crate::Result<Self> {
        let raw: Vec<AirportRaw> = serde_json::from_slice(bytes)?;
        Ok(Self::from_raw(raw, None))
    }

    /// Decompresses and parses a packaged gzip JSON blob.
    #[cfg(all(feature = "json", feature = "compact"))]
    pub fn from_gz_bytes(blob: &[u8]) -> crate::Result<Self> {
        let decoder = flate2::read::GzDecoder::new(blob);
        Self::from_reader(std::io::BufReader::new(decoder), None)
    }

    /// The full snapshot, in dataset order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn stats(&self) -> DbStats {
        let countries: HashSet<&str> = self
            .airports
            .iter()
            .map(|a| a.country_code.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        let continents: HashSet<&str> = self
            .airports
            .iter()
            .map(|a| a.continent.as_str())
            .filter(|c| !c.is_empty())
            .collect();

        DbStats {
            airports: self.airports.len(),
            with_iata: self.airports.iter().filter(|a| a.iata.is_some()).count(),
            with_icao: self.airports.iter().filter(|a| a.icao.is_some()).count(),
            with_coordinates: self
                .airports
                .iter()
                .filter(|a| a.coordinates().is_some())
                .count(),
            countries: countries.len(),
            continents: continents.len(),
        }
    }
}
