// crates/airportdb-core/src/batch.rs

//! # Batch Engine
//!
//! Multi-key fetches and the all-pairs distance matrix, composed from
//! [`AirportDb::resolve`] and [`haversine_km`].

use crate::error::{AirportError, Result};
use crate::geo::haversine_km;
use crate::model::{Airport, AirportSummary};
use crate::AirportDb;
use serde::Serialize;
use std::collections::BTreeMap;

/// Pairwise great-circle distances between a set of airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    /// Input codes, in input order.
    pub codes: Vec<String>,
    /// One summary per input code, in input order.
    pub airports: Vec<AirportSummary>,
    /// `distances[a][b]` in whole kilometres; 0 on the diagonal.
    pub distances: BTreeMap<String, BTreeMap<String, u64>>,
}

impl DistanceMatrix {
    pub fn get(&self, from: &str, to: &str) -> Option<u64> {
        self.distances.get(from)?.get(to).copied()
    }
}

impl AirportDb {
    /// Resolves every code independently; unresolved codes leave `None` in
    /// their slot. Never fails.
    pub fn get_many<S: AsRef<str>>(&self, codes: &[S]) -> Vec<Option<&Airport>> {
        codes.iter().map(|c| self.resolve(c.as_ref())).collect()
    }

    /// Builds the code-by-code distance table.
    ///
    /// Needs at least two codes. If any code does not resolve to an airport
    /// with coordinates, fails once with [`AirportError::Unresolved`] listing
    /// all of them.
    pub fn distance_matrix<S: AsRef<str>>(&self, codes: &[S]) -> Result<DistanceMatrix> {
        if codes.len() < 2 {
            return Err(AirportError::validation(
                "a distance matrix needs at least two airport codes",
            ));
        }

        let resolved = self.get_many(codes);
        let mut points = Vec::with_capacity(codes.len());
        let mut missing = Vec::new();
        for (code, airport) in codes.iter().zip(&resolved) {
            match airport.and_then(|a| a.coordinates().map(|c| (a, c))) {
                Some(hit) => points.push(hit),
                None => missing.push(code.as_ref().to_owned()),
            }
        }
        if !missing.is_empty() {
            return Err(AirportError::Unresolved(missing));
        }

        let codes: Vec<String> = codes.iter().map(|c| c.as_ref().to_owned()).collect();
        let mut distances: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
        for (i, from) in codes.iter().enumerate() {
            distances.entry(from.clone()).or_default().insert(from.clone(), 0);
            for (j, to) in codes.iter().enumerate().skip(i + 1) {
                let km = haversine_km(points[i].1, points[j].1).round() as u64;
                distances.entry(from.clone()).or_default().insert(to.clone(), km);
                distances.entry(to.clone()).or_default().insert(from.clone(), km);
            }
        }

        let airports = codes
            .iter()
            .zip(&points)
            .map(|(code, (airport, _))| airport.summary(code))
            .collect();

        Ok(DistanceMatrix {
            codes,
            airports,
            distances,
        })
    }
}
