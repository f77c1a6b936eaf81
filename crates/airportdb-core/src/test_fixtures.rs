// crates/airportdb-core/src/test_fixtures.rs
use crate::raw::AirportRaw;
use crate::AirportDb;

/// Small dataset covering the awkward corners of the real one: duplicate
/// codes, string-encoded numbers, every spelling of the scheduled-service
/// flag and a record without usable coordinates.
pub(crate) const FIXTURE_JSON: &str = r#"[
  {"iata": "LHR", "icao": "EGLL", "airport": "London Heathrow Airport", "city": "London",
   "country_code": "GB", "continent": "EU", "type": "large_airport",
   "latitude": 51.4706, "longitude": -0.461941, "runway_length": 12802, "elevation": 83,
   "scheduled_service": "yes", "time": "Europe/London",
   "website": "https://www.heathrow.com/",
   "wikipedia": "https://en.wikipedia.org/wiki/Heathrow_Airport"},
  {"iata": "LGW", "icao": "EGKK", "airport": "London Gatwick Airport", "city": "London",
   "country_code": "GB", "continent": "EU", "type": "large_airport",
   "latitude": 51.148102, "longitude": -0.190278, "runway_length": 10879, "elevation": 202,
   "scheduled_service": true, "time": "Europe/London"},
  {"icao": "EGLW", "airport": "London Heliport", "city": "London",
   "country_code": "GB", "continent": "EU", "type": "heliport",
   "latitude": 51.469722, "longitude": -0.179444, "elevation": 18,
   "scheduled_service": "no", "time": "Europe/London"},
  {"iata": "", "icao": "", "airport": "Abandoned Farm Strip", "city": "Nowhere",
   "country_code": "GB", "continent": "EU", "latitude": "", "longitude": "",
   "scheduled_service": null, "time": ""},
  {"iata": "ETR", "icao": "EGTR", "airport": "Elstree Airfield", "city": "Borehamwood",
   "country_code": "GB", "continent": "EU", "type": "small_airport",
   "latitude": "51.6558", "longitude": "-0.325833", "runway_length": "2152", "elevation": "332",
   "scheduled_service": "No", "time": "Europe/London"},
  {"iata": "CDG", "icao": "LFPG", "airport": "Paris Charles de Gaulle Airport", "city": "Paris",
   "country_code": "FR", "continent": "EU", "type": "large_airport",
   "latitude": 49.012779, "longitude": 2.55, "runway_length": 13829, "elevation": 392,
   "scheduled_service": "YES", "time": "Europe/Paris"},
  {"iata": "ZRH", "icao": "LSZH", "airport": "Zürich Airport", "city": "Zurich",
   "country_code": "CH", "continent": "EU", "type": "large_airport",
   "latitude": 47.464699, "longitude": 8.54917, "runway_length": 12139, "elevation": 1416,
   "scheduled_service": "yes", "time": "Europe/Zurich"},
  {"iata": "JFK", "icao": "KJFK", "airport": "John F Kennedy International Airport",
   "city": "New York", "country_code": "US", "continent": "NA", "type": "large_airport",
   "latitude": 40.639801, "longitude": -73.7789, "runway_length": 14511, "elevation": 13,
   "scheduled_service": "true", "time": "America/New_York"},
  {"iata": "DUP", "icao": "XDU1", "airport": "Duplicate Field One", "city": "Springfield",
   "country_code": "US", "continent": "NA", "type": "small_airport",
   "latitude": 40.0, "longitude": -75.0, "runway_length": 3000, "elevation": 100,
   "scheduled_service": "no", "time": "America/New_York"},
  {"iata": "DUP", "icao": "XDU2", "airport": "Duplicate Field Two", "city": "Springfield",
   "country_code": "US", "continent": "NA", "type": "small_airport",
   "latitude": 41.0, "longitude": -75.0, "runway_length": "4000", "elevation": 200,
   "scheduled_service": false, "time": "America/New_York"},
  {"iata": "SIN", "icao": "WSSS", "airport": "Singapore Changi Airport", "city": "Singapore",
   "country_code": "SG", "continent": "AS", "type": "large_airport",
   "latitude": 1.35019, "longitude": 103.994003, "runway_length": 13123, "elevation": 22,
   "scheduled_service": "yes", "time": "Asia/Singapore"},
  {"iata": "HND", "icao": "RJTT", "airport": "Tokyo Haneda International Airport",
   "city": "Tokyo", "country_code": "JP", "continent": "AS", "type": "large_airport",
   "latitude": 35.552299, "longitude": 139.779999, "runway_length": 11024, "elevation": 35,
   "scheduled_service": "yes", "time": "Asia/Tokyo",
   "wikipedia": "https://en.wikipedia.org/wiki/Tokyo_International_Airport"},
  {"iata": "LXA", "icao": "ZULS", "airport": "Lhasa Gonggar Airport", "city": "Lhasa",
   "country_code": "CN", "continent": "AS", "type": "medium_airport",
   "latitude": 29.2978, "longitude": 90.911903, "runway_length": 13123, "elevation": 11713,
   "scheduled_service": "yes", "time": "Asia/Shanghai"}
]"#;

pub(crate) fn fixture_db() -> AirportDb {
    let raw: Vec<AirportRaw> = serde_json::from_str(FIXTURE_JSON).unwrap();
    AirportDb::from_raw(raw, None)
}
