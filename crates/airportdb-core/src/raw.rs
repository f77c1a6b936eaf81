// crates/airportdb-core/src/raw.rs

//! Raw airport record as it comes from the packaged JSON.
//!
//! The source data is loosely typed: coordinates and runway figures arrive as
//! numbers or numeric strings, and `scheduled_service` mixes booleans with
//! `"yes"`/`"no"` spellings. Everything here is normalized into
//! [`crate::model::Airport`] by [`crate::model::convert`] and never escapes
//! the ingestion boundary.
use serde::Deserialize;

/// A number that may have been serialized as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

/// The tri-form boolean: native bool, or a case-insensitive spelling.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlagRaw {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirportRaw {
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub icao: Option<String>,
    /// Older dumps store the display name under `airport`.
    #[serde(default, alias = "airport")]
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub latitude: Option<NumberOrText>,
    #[serde(default)]
    pub longitude: Option<NumberOrText>,
    #[serde(default)]
    pub runway_length: Option<NumberOrText>,
    #[serde(default)]
    pub elevation: Option<NumberOrText>,
    #[serde(default)]
    pub scheduled_service: Option<FlagRaw>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
    #[serde(default)]
    pub flightradar24_url: Option<String>,
    #[serde(default)]
    pub radarbox_url: Option<String>,
    #[serde(default)]
    pub flightaware_url: Option<String>,
}

pub type AirportsRaw = Vec<AirportRaw>;
