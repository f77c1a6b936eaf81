// crates/airportdb-core/src/stats.rs

//! # Aggregation Engine
//!
//! Grouped statistics over the airports of a country or continent, and
//! top-N rankings within a continent.

use crate::codes::CodeKind;
use crate::error::{AirportError, Result};
use crate::model::Airport;
use crate::text::round_to;
use crate::AirportDb;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Bucket for records without a facility type.
pub const UNKNOWN_TYPE: &str = "unknown";
/// Default `limit` for [`AirportDb::largest_by_continent`].
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// Aggregate figures for one country or continent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportStats {
    pub code: String,
    pub total: usize,
    /// Count per facility type; always sums to `total`.
    pub by_type: BTreeMap<String, usize>,
    pub with_scheduled_service: usize,
    /// Mean over positive runway lengths, 0 when there are none.
    pub average_runway_ft: f64,
    /// Mean over known elevations, 0 when there are none.
    pub average_elevation_ft: f64,
    /// Distinct timezones, sorted.
    pub timezones: Vec<String>,
}

/// [`AirportStats`] plus a per-country breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentStats {
    #[serde(flatten)]
    pub summary: AirportStats,
    pub by_country: BTreeMap<String, usize>,
}

/// Sort key for [`AirportDb::largest_by_continent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankBy {
    #[default]
    Runway,
    Elevation,
}

impl RankBy {
    fn key(self, airport: &Airport) -> i64 {
        match self {
            RankBy::Runway => airport.runway_or_zero(),
            RankBy::Elevation => airport.elevation_or_zero(),
        }
    }
}

impl FromStr for RankBy {
    type Err = AirportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "runway" => Ok(RankBy::Runway),
            "elevation" => Ok(RankBy::Elevation),
            other => Err(AirportError::validation(format!(
                "unknown sort key '{other}', expected 'runway' or 'elevation'"
            ))),
        }
    }
}

impl fmt::Display for RankBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RankBy::Runway => "runway",
            RankBy::Elevation => "elevation",
        })
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, n) = values.fold((0i128, 0usize), |(s, n), v| (s + i128::from(v), n + 1));
    if n == 0 {
        0.0
    } else {
        round_to(sum as f64 / n as f64, 2)
    }
}

fn summarize(code: &str, airports: &[&Airport]) -> AirportStats {
    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut timezones: BTreeSet<&str> = BTreeSet::new();
    for a in airports {
        let kind = a.kind.as_deref().unwrap_or(UNKNOWN_TYPE);
        *by_type.entry(kind.to_owned()).or_default() += 1;
        if let Some(tz) = a.timezone() {
            timezones.insert(tz);
        }
    }

    AirportStats {
        code: code.to_owned(),
        total: airports.len(),
        by_type,
        with_scheduled_service: airports.iter().filter(|a| a.scheduled_service).count(),
        average_runway_ft: mean(
            airports
                .iter()
                .filter_map(|a| a.runway_length)
                .filter(|&r| r > 0),
        ),
        average_elevation_ft: mean(airports.iter().filter_map(|a| a.elevation)),
        timezones: timezones.into_iter().map(str::to_owned).collect(),
    }
}

impl AirportDb {
    pub fn stats_by_country(&self, code: &str) -> Result<AirportStats> {
        let airports = self.by_country(code)?;
        Ok(summarize(code, &airports))
    }

    pub fn stats_by_continent(&self, code: &str) -> Result<ContinentStats> {
        let airports = self.by_continent(code)?;
        let mut by_country: BTreeMap<String, usize> = BTreeMap::new();
        for a in &airports {
            *by_country.entry(a.country_code.clone()).or_default() += 1;
        }
        Ok(ContinentStats {
            summary: summarize(code, &airports),
            by_country,
        })
    }

    /// The `limit` largest airports of a continent by runway length or
    /// elevation, descending. Unknown values rank as 0 and ties keep dataset
    /// order. A continent without airports yields an empty list.
    pub fn largest_by_continent(
        &self,
        code: &str,
        limit: usize,
        rank_by: RankBy,
    ) -> Result<Vec<&Airport>> {
        CodeKind::Continent.validate(code)?;
        let mut hits: Vec<&Airport> = self
            .airports()
            .iter()
            .filter(|a| a.continent == code)
            .collect();
        hits.sort_by(|a, b| rank_by.key(b).cmp(&rank_by.key(a)));
        hits.truncate(limit);
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_db;

    #[test]
    fn country_stats() {
        let db = fixture_db();
        let gb = db.stats_by_country("GB").unwrap();
        assert_eq!(gb.total, 5);
        assert_eq!(gb.by_type.values().sum::<usize>(), gb.total);
        assert_eq!(gb.by_type["large_airport"], 2);
        assert_eq!(gb.by_type[UNKNOWN_TYPE], 1);
        assert_eq!(gb.with_scheduled_service, 2);
        assert_eq!(gb.average_runway_ft, 8611.0);
        assert_eq!(gb.average_elevation_ft, 158.75);
        assert_eq!(gb.timezones, ["Europe/London"]);
    }

    #[test]
    fn continent_stats_group_by_country() {
        let db = fixture_db();
        let eu = db.stats_by_continent("EU").unwrap();
        assert_eq!(eu.summary.total, 7);
        assert_eq!(eu.by_country["GB"], 5);
        assert_eq!(eu.by_country.values().sum::<usize>(), eu.summary.total);
        assert_eq!(
            eu.summary.timezones,
            ["Europe/London", "Europe/Paris", "Europe/Zurich"]
        );
    }

    #[test]
    fn stats_errors() {
        let db = fixture_db();
        assert!(matches!(db.stats_by_country("gb"), Err(AirportError::Format { .. })));
        assert!(db.stats_by_country("DE").unwrap_err().is_not_found());
        assert!(db.stats_by_continent("OC").unwrap_err().is_not_found());
    }

    #[test]
    fn averages_default_to_zero() {
        let db = fixture_db();
        let ch = db.stats_by_country("CH").unwrap();
        assert_eq!(ch.average_runway_ft, 12139.0);
        assert_eq!(mean(std::iter::empty()), 0.0);
    }

    #[cfg(feature = "json")]
    #[test]
    fn huge_values_do_not_overflow_the_average() {
        let db = AirportDb::from_json_slice(
            br#"[{"name": "High One", "country_code": "GB", "elevation": "9e18"},
                 {"name": "High Two", "country_code": "GB",
                  "elevation": 9000000000000000000, "runway_length": 9000000000000000000},
                 {"name": "High Three", "country_code": "GB",
                  "runway_length": 9000000000000000000}]"#,
        )
        .unwrap();
        let gb = db.stats_by_country("GB").unwrap();
        assert_eq!(gb.average_elevation_ft, 9e18);
        assert_eq!(gb.average_runway_ft, 9e18);
        assert_eq!(mean([i64::MAX, i64::MAX].into_iter()), i64::MAX as f64);
    }

    #[test]
    fn largest_by_runway_is_stable() {
        let db = fixture_db();
        let top = db.largest_by_continent("AS", 10, RankBy::Runway).unwrap();
        let codes: Vec<_> = top.iter().map(|a| a.iata()).collect();
        assert_eq!(codes, ["SIN", "LXA", "HND"]);

        let top2 = db.largest_by_continent("AS", 2, RankBy::Runway).unwrap();
        assert_eq!(top2.len(), 2);
        assert!(top2
            .windows(2)
            .all(|w| w[0].runway_or_zero() >= w[1].runway_or_zero()));
    }

    #[test]
    fn largest_by_elevation() {
        let db = fixture_db();
        let top = db.largest_by_continent("AS", 1, RankBy::Elevation).unwrap();
        assert_eq!(top[0].iata(), "LXA");
        assert!(db.largest_by_continent("AN", 5, RankBy::Runway).unwrap().is_empty());
        assert!(db.largest_by_continent("Asia", 5, RankBy::Runway).is_err());
    }

    #[test]
    fn rank_by_parsing() {
        assert_eq!("runway".parse::<RankBy>().unwrap(), RankBy::Runway);
        assert_eq!("Elevation".parse::<RankBy>().unwrap(), RankBy::Elevation);
        assert!("length".parse::<RankBy>().is_err());
        assert_eq!(RankBy::default(), RankBy::Runway);
    }
}
