// crates/airportdb-core/src/index.rs

//! # Index Builder
//!
//! Exact-code secondary indices over the dataset. Each index maps a code to
//! the positions of every record carrying it, in dataset order, so duplicate
//! codes are kept rather than overwritten.

use crate::db::AirportDb;
use crate::model::Airport;
use std::collections::HashMap;

/// The fields that carry a secondary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexField {
    Iata,
    Icao,
}

impl IndexField {
    fn key(self, airport: &Airport) -> Option<&str> {
        match self {
            IndexField::Iata => airport.iata.as_deref(),
            IndexField::Icao => airport.icao.as_deref(),
        }
    }
}

/// Code -> positions into [`AirportDb::airports`].
#[derive(Debug, Clone, Default)]
pub struct CodeIndex {
    positions: HashMap<String, Vec<usize>>,
}

impl CodeIndex {
    /// Single pass over the snapshot; empty codes are skipped.
    pub fn build(airports: &[Airport], field: IndexField) -> Self {
        let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, airport) in airports.iter().enumerate() {
            if let Some(code) = field.key(airport).filter(|c| !c.is_empty()) {
                positions.entry(code.to_owned()).or_default().push(pos);
            }
        }
        Self { positions }
    }

    /// Positions of the records carrying `code`; empty when absent.
    pub fn positions(&self, code: &str) -> &[usize] {
        self.positions.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.positions.contains_key(code)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl AirportDb {
    /// The index for `field`, built on first use and memoized.
    pub fn index(&self, field: IndexField) -> &CodeIndex {
        let cell = match field {
            IndexField::Iata => &self.iata_index,
            IndexField::Icao => &self.icao_index,
        };
        cell.get_or_init(|| {
            let index = CodeIndex::build(self.airports(), field);
            log::debug!(
                "built {:?} index: {} distinct codes over {} records",
                field,
                index.len(),
                self.len()
            );
            index
        })
    }

    /// Every record carrying `code` in `field`, in dataset order.
    pub(crate) fn indexed(&self, field: IndexField, code: &str) -> Vec<&Airport> {
        let airports = self.airports();
        self.index(field)
            .positions(code)
            .iter()
            .map(|&pos| &airports[pos])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_db;

    #[test]
    fn duplicate_codes_keep_dataset_order() {
        let db = fixture_db();
        let hits = db.indexed(IndexField::Iata, "DUP");
        let names: Vec<_> = hits.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Duplicate Field One", "Duplicate Field Two"]);
    }

    #[test]
    fn records_without_codes_are_not_indexed() {
        let db = fixture_db();
        let iata = db.index(IndexField::Iata);
        assert!(!iata.contains(""));
        let with_iata = db.airports().iter().filter(|a| a.iata.is_some()).count();
        let indexed: usize = db
            .airports()
            .iter()
            .filter_map(|a| a.iata.as_deref())
            .collect::<std::collections::HashSet<_>>()
            .iter()
            .map(|code| iata.positions(code).len())
            .sum();
        assert_eq!(indexed, with_iata);
    }

    #[test]
    fn index_is_built_once() {
        let db = fixture_db();
        let first = db.index(IndexField::Icao) as *const CodeIndex;
        let second = db.index(IndexField::Icao) as *const CodeIndex;
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_first_access_sees_one_index() {
        let db = fixture_db();
        let shared = &db;
        let addrs: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(move || shared.index(IndexField::Iata) as *const CodeIndex as usize)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
        assert!(!db.index(IndexField::Iata).is_empty());
    }
}
