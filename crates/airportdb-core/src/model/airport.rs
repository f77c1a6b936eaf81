// crates/airportdb-core/src/model/airport.rs
use crate::geo::haversine_km;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// One airport (or heliport, seaplane base, ...) in the normalized database.
///
/// Produced once at load time from the raw JSON; every engine reads these
/// through shared references and none of them ever mutates one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub name: String,
    pub city: Option<String>,
    pub country_code: String,
    pub continent: String,
    /// Facility category such as `large_airport` or `heliport`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Only set when the source value parsed to a finite number.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Feet.
    pub runway_length: Option<i64>,
    /// Feet above mean sea level.
    pub elevation: Option<i64>,
    pub scheduled_service: bool,
    /// IANA timezone identifier.
    #[serde(rename = "time")]
    pub timezone: Option<String>,
    pub website: Option<String>,
    pub wikipedia: Option<String>,
    pub flightradar24_url: Option<String>,
    pub radarbox_url: Option<String>,
    pub flightaware_url: Option<String>,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        haversine_km(*self, *other)
    }
}

/// External resources attached to an airport. Absent links are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AirportLinks {
    pub website: Option<String>,
    pub wikipedia: Option<String>,
    pub flightradar24: Option<String>,
    pub radarbox: Option<String>,
    pub flightaware: Option<String>,
}

impl AirportLinks {
    pub fn is_empty(&self) -> bool {
        self.website.is_none()
            && self.wikipedia.is_none()
            && self.flightradar24.is_none()
            && self.radarbox.is_none()
            && self.flightaware.is_none()
    }
}

/// Short description of an airport, keyed by the code the caller used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AirportSummary {
    pub code: String,
    pub name: String,
    pub iata: Option<String>,
    pub icao: Option<String>,
}

impl Airport {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iata(&self) -> &str {
        self.iata.as_deref().unwrap_or("")
    }

    pub fn icao(&self) -> &str {
        self.icao.as_deref().unwrap_or("")
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Both coordinates, or `None` when either is missing.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Runway length with missing values read as 0, the ranking convention.
    pub fn runway_or_zero(&self) -> i64 {
        self.runway_length.unwrap_or(0)
    }

    pub fn elevation_or_zero(&self) -> i64 {
        self.elevation.unwrap_or(0)
    }

    /// True for the airport-class subtypes (`small_airport`, `large_airport`, ...).
    pub fn is_airport_class(&self) -> bool {
        self.kind().contains("airport")
    }

    pub fn links(&self) -> AirportLinks {
        AirportLinks {
            website: self.website.clone(),
            wikipedia: self.wikipedia.clone(),
            flightradar24: self.flightradar24_url.clone(),
            radarbox: self.radarbox_url.clone(),
            flightaware: self.flightaware_url.clone(),
        }
    }

    pub fn summary(&self, code: &str) -> AirportSummary {
        AirportSummary {
            code: code.to_owned(),
            name: self.name.clone(),
            iata: self.iata.clone(),
            icao: self.icao.clone(),
        }
    }
}

impl NameMatch for Airport {
    fn name_str(&self) -> &str {
        &self.name
    }
}
