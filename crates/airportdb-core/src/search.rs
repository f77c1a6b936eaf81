// crates/airportdb-core/src/search.rs

//! # Search Engine
//!
//! Substring search over airport names. Matching folds case and accents, so
//! `"zurich"` finds `"Zürich Airport"`.

use crate::error::{AirportError, Result};
use crate::model::Airport;
use crate::text::fold_key;
use crate::traits::NameMatch;
use crate::AirportDb;

/// Shortest query either entry point accepts.
pub const MIN_QUERY_CHARS: usize = 2;
/// Most suggestions [`AirportDb::autocomplete`] returns.
pub const AUTOCOMPLETE_LIMIT: usize = 10;

fn long_enough(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

impl AirportDb {
    /// Every airport whose name contains `query`, in dataset order.
    ///
    /// Fails with [`AirportError::Validation`] for queries shorter than
    /// [`MIN_QUERY_CHARS`] characters. Whitespace is part of the query.
    /// No match is an empty list.
    pub fn search_by_name(&self, query: &str) -> Result<Vec<&Airport>> {
        if !long_enough(query) {
            return Err(AirportError::validation(format!(
                "search query must be at least {MIN_QUERY_CHARS} characters"
            )));
        }
        let q = fold_key(query);
        Ok(self
            .airports()
            .iter()
            .filter(|a| a.name_contains_folded(&q))
            .collect())
    }

    /// Up to [`AUTOCOMPLETE_LIMIT`] airports whose name or IATA code
    /// contains `query`. Short queries yield no suggestions rather than an
    /// error.
    pub fn autocomplete(&self, query: &str) -> Vec<&Airport> {
        if !long_enough(query) {
            return Vec::new();
        }
        let q = fold_key(query);
        self.airports()
            .iter()
            .filter(|a| {
                a.name_contains_folded(&q) || a.iata().to_ascii_lowercase().contains(q.as_str())
            })
            .take(AUTOCOMPLETE_LIMIT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_db;

    #[test]
    fn name_search_is_case_insensitive() {
        let db = fixture_db();
        let hits = db.search_by_name("london").unwrap();
        let names: Vec<_> = hits.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            ["London Heathrow Airport", "London Gatwick Airport", "London Heliport"]
        );
        assert_eq!(db.search_by_name("HEATHROW").unwrap().len(), 1);
    }

    #[test]
    fn name_search_folds_accents() {
        let db = fixture_db();
        let hits = db.search_by_name("zurich").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].iata(), "ZRH");
    }

    #[test]
    fn short_query_is_rejected() {
        let db = fixture_db();
        assert!(matches!(db.search_by_name("L"), Err(AirportError::Validation(_))));
        assert!(db.search_by_name("no such place").unwrap().is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn whitespace_counts_toward_the_query() {
        let db = AirportDb::from_json_slice(br#"[{"name": "Gatwick L Field"}]"#).unwrap();
        assert_eq!(db.search_by_name(" L").unwrap().len(), 1);
        assert!(db.search_by_name("Field ").unwrap().is_empty());
        assert_eq!(db.autocomplete(" L").len(), 1);
        assert!(db.autocomplete(" ").is_empty());
    }

    #[test]
    fn autocomplete_matches_name_or_iata() {
        let db = fixture_db();
        let by_code = db.autocomplete("jf");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].iata(), "JFK");

        let by_name = db.autocomplete("London");
        assert!(by_name.iter().any(|a| a.iata() == "LHR"));
    }

    #[test]
    fn autocomplete_fails_soft_and_caps_results() {
        let db = fixture_db();
        assert!(db.autocomplete("a").is_empty());

        let template = db.airports()[0].clone();
        let many = AirportDb::from_airports(
            (0..15)
                .map(|i| Airport {
                    name: format!("Field {i}"),
                    ..template.clone()
                })
                .collect(),
        );
        let hits = many.autocomplete("field");
        assert_eq!(hits.len(), AUTOCOMPLETE_LIMIT);
        assert_eq!(hits[0].name(), "Field 0");
        assert_eq!(hits[9].name(), "Field 9");
    }
}
