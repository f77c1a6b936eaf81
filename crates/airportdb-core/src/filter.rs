// crates/airportdb-core/src/filter.rs

//! # Filter Engine
//!
//! Multi-criteria matching. A [`Filters`] set maps record field names to
//! expected values; a record matches when every entry matches. Two keys get
//! special treatment:
//!
//! - `has_scheduled_service`: compares the normalized scheduled-service flag
//!   with a boolean.
//! - `min_runway_ft`: passes when the runway length (0 when unknown) is at
//!   least the given number.
//!
//! Every other key is exact equality against the field of the same name.
//! An empty set matches every record.

use crate::error::{AirportError, Result};
use crate::model::Airport;
use crate::AirportDb;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Number(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Number(v as f64)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Number(f64::from(v))
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl FromStr for FilterValue {
    type Err = std::convert::Infallible;

    /// `true`/`false` become booleans, finite numbers become numbers and
    /// anything else stays text.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("true") {
            return Ok(FilterValue::Bool(true));
        }
        if s.eq_ignore_ascii_case("false") {
            return Ok(FilterValue::Bool(false));
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(FilterValue::Number(n)),
            _ => Ok(FilterValue::Text(s.to_owned())),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Bool(b) => write!(f, "{b}"),
            FilterValue::Number(n) => write!(f, "{n}"),
            FilterValue::Text(s) => f.write_str(s),
        }
    }
}

/// A set of field -> expected value criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters {
    entries: BTreeMap<String, FilterValue>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        self.entries.insert(field.into(), value.into());
    }

    pub fn scheduled_service(self, yes: bool) -> Self {
        self.with("has_scheduled_service", yes)
    }

    pub fn min_runway_ft(self, feet: i64) -> Self {
        self.with("min_runway_ft", feet)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parses a `field=value` pair, e.g. `country_code=GB`.
    pub fn parse_pair(pair: &str) -> Result<(String, FilterValue)> {
        let (field, value) = pair.split_once('=').ok_or_else(|| {
            AirportError::validation(format!("expected field=value, got '{pair}'"))
        })?;
        let field = field.trim();
        if field.is_empty() {
            return Err(AirportError::validation(format!("missing field name in '{pair}'")));
        }
        let value = match value.parse::<FilterValue>() {
            Ok(v) => v,
            Err(never) => match never {},
        };
        Ok((field.to_owned(), value))
    }

    /// Checks every key and value type up front.
    fn compile(&self) -> Result<Vec<(Field, &FilterValue)>> {
        let mut compiled = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let field = Field::from_key(key)
                .ok_or_else(|| AirportError::validation(format!("unknown filter field '{key}'")))?;
            field.check_value(key, value)?;
            compiled.push((field, value));
        }
        Ok(compiled)
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Filters::new();
        for (k, v) in iter {
            filters.insert(k, v);
        }
        filters
    }
}

#[derive(Clone, Copy)]
enum Field {
    HasScheduledService,
    MinRunwayFt,
    Text(fn(&Airport) -> Option<&str>),
    Number(fn(&Airport) -> Option<f64>),
    ScheduledService,
}

impl Field {
    fn from_key(key: &str) -> Option<Field> {
        let field = match key {
            "has_scheduled_service" => Field::HasScheduledService,
            "min_runway_ft" => Field::MinRunwayFt,
            "scheduled_service" => Field::ScheduledService,
            "iata" => Field::Text(|a| a.iata.as_deref()),
            "icao" => Field::Text(|a| a.icao.as_deref()),
            "name" => Field::Text(|a| Some(a.name.as_str())),
            "city" => Field::Text(|a| a.city.as_deref()),
            "country_code" => Field::Text(|a| Some(a.country_code.as_str())),
            "continent" => Field::Text(|a| Some(a.continent.as_str())),
            "type" => Field::Text(|a| a.kind.as_deref()),
            "time" => Field::Text(|a| a.timezone.as_deref()),
            "website" => Field::Text(|a| a.website.as_deref()),
            "wikipedia" => Field::Text(|a| a.wikipedia.as_deref()),
            "flightradar24_url" => Field::Text(|a| a.flightradar24_url.as_deref()),
            "radarbox_url" => Field::Text(|a| a.radarbox_url.as_deref()),
            "flightaware_url" => Field::Text(|a| a.flightaware_url.as_deref()),
            "latitude" => Field::Number(|a| a.latitude),
            "longitude" => Field::Number(|a| a.longitude),
            "runway_length" => Field::Number(|a| a.runway_length.map(|v| v as f64)),
            "elevation" => Field::Number(|a| a.elevation.map(|v| v as f64)),
            _ => return None,
        };
        Some(field)
    }

    fn check_value(self, key: &str, value: &FilterValue) -> Result<()> {
        let ok = match self {
            Field::HasScheduledService => matches!(value, FilterValue::Bool(_)),
            Field::MinRunwayFt => matches!(value, FilterValue::Number(_)),
            _ => true,
        };
        if ok {
            Ok(())
        } else {
            Err(AirportError::validation(format!(
                "filter '{key}' has an invalid value: {value}"
            )))
        }
    }

    fn matches(self, airport: &Airport, expected: &FilterValue) -> bool {
        match (self, expected) {
            (Field::HasScheduledService | Field::ScheduledService, FilterValue::Bool(b)) => {
                airport.scheduled_service == *b
            }
            (Field::MinRunwayFt, FilterValue::Number(min)) => {
                airport.runway_or_zero() as f64 >= *min
            }
            (Field::Text(get), FilterValue::Text(s)) => get(airport) == Some(s.as_str()),
            (Field::Number(get), FilterValue::Number(n)) => get(airport) == Some(*n),
            _ => false,
        }
    }
}

impl AirportDb {
    /// Every airport matching all of `filters`, in dataset order.
    ///
    /// ```no_run
    /// use airportdb_core::{AirportDb, Filters};
    ///
    /// let db = AirportDb::load().unwrap();
    /// let busy_gb = db
    ///     .find(&Filters::new().with("country_code", "GB").scheduled_service(true))
    ///     .unwrap();
    /// assert!(busy_gb.iter().all(|a| a.scheduled_service));
    /// ```
    pub fn find(&self, filters: &Filters) -> Result<Vec<&Airport>> {
        let compiled = filters.compile()?;
        Ok(self
            .airports()
            .iter()
            .filter(|a| compiled.iter().all(|(field, value)| field.matches(a, value)))
            .collect())
    }
}
