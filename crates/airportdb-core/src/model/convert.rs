// crates/airportdb-core/src/model/convert.rs
use crate::model::Airport;
use crate::raw::{AirportRaw, FlagRaw, NumberOrText};
use crate::text::{non_empty, parse_finite, parse_int};

/// Collapses the tri-form boolean into a plain `bool`.
///
/// `true`, `"yes"` and `"true"` (any case) are truthy; everything else,
/// including a missing value, is `false`.
pub fn normalize_flag(flag: Option<&FlagRaw>) -> bool {
    match flag {
        Some(FlagRaw::Bool(b)) => *b,
        Some(FlagRaw::Text(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true")
        }
        None => false,
    }
}

fn to_f64(v: Option<NumberOrText>) -> Option<f64> {
    match v? {
        NumberOrText::Number(n) => Some(n).filter(|n| n.is_finite()),
        NumberOrText::Text(s) => parse_finite(&s),
    }
}

fn to_i64(v: Option<NumberOrText>) -> Option<i64> {
    match v? {
        NumberOrText::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        NumberOrText::Number(_) => None,
        NumberOrText::Text(s) => parse_int(&s),
    }
}

/// **Standard Converter:** Raw -> normalized [`Airport`].
pub fn airport_from_raw(raw: AirportRaw) -> Airport {
    let scheduled_service = normalize_flag(raw.scheduled_service.as_ref());
    Airport {
        iata: non_empty(raw.iata),
        icao: non_empty(raw.icao),
        name: raw.name.trim().to_owned(),
        city: non_empty(raw.city),
        country_code: non_empty(raw.country_code).unwrap_or_default(),
        continent: non_empty(raw.continent).unwrap_or_default(),
        kind: non_empty(raw.r#type),
        latitude: to_f64(raw.latitude),
        longitude: to_f64(raw.longitude),
        runway_length: to_i64(raw.runway_length),
        elevation: to_i64(raw.elevation),
        scheduled_service,
        timezone: non_empty(raw.time),
        website: non_empty(raw.website),
        wikipedia: non_empty(raw.wikipedia),
        flightradar24_url: non_empty(raw.flightradar24_url),
        radarbox_url: non_empty(raw.radarbox_url),
        flightaware_url: non_empty(raw.flightaware_url),
    }
}

/// Converts a whole raw dataset, keeping dataset order.
///
/// Records without a name are dropped. With a country filter, only records
/// whose `country_code` is listed are kept (case-sensitive; callers pass
/// upper-case ISO-2 codes).
pub fn from_raw(raw: Vec<AirportRaw>, filter_iso2: Option<&[&str]>) -> Vec<Airport> {
    let filter = filter_iso2.filter(|f| !f.is_empty());
    let mut unnamed = 0usize;
    let airports: Vec<Airport> = raw
        .into_iter()
        .map(airport_from_raw)
        .filter(|a| {
            if a.name.is_empty() {
                unnamed += 1;
                return false;
            }
            true
        })
        .filter(|a| filter.map_or(true, |f| f.contains(&a.country_code.as_str())))
        .collect();
    if unnamed > 0 {
        log::warn!("dropped {unnamed} airport record(s) without a name");
    }
    airports
}
