// crates/airportdb-core/src/model/load.rs
use crate::db::AirportDb;
use crate::model::Airport;
use bincode::Options;

/// Upper bound on a decoded binary snapshot.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

/// Bincode settings shared by every snapshot format.
pub(crate) fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

/// Keeps only the listed ISO-2 countries; an empty or missing list keeps all.
pub(crate) fn retain_countries(airports: &mut Vec<Airport>, filter_iso2: Option<&[&str]>) {
    if let Some(filter) = filter_iso2.filter(|f| !f.is_empty()) {
        airports.retain(|a| filter.contains(&a.country_code.as_str()));
    }
}

impl AirportDb {
    /// Reconstructs the database from its normalized binary snapshot,
    /// optionally keeping only the listed ISO-2 countries.
    pub fn from_bytes(data: &[u8], filter_iso2: Option<&[&str]>) -> Result<Self, bincode::Error> {
        let mut airports: Vec<Airport> = snapshot_options().deserialize(data)?;
        retain_countries(&mut airports, filter_iso2);
        Ok(AirportDb::from_airports(airports))
    }

    /// Serializes the records into the format [`AirportDb::from_bytes`] reads.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        snapshot_options().serialize(self.airports())
    }
}
