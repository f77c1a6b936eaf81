// crates/airportdb-core/src/geo.rs

//! # Geospatial Engine
//!
//! Great-circle geometry on a spherical Earth plus the radius and
//! nearest-neighbour scans built on it. Records without usable coordinates
//! are skipped by every scan.

use crate::error::Result;
use crate::filter::Filters;
use crate::model::{Airport, Coordinates};
use crate::text::round_to;
use crate::AirportDb;
use serde::Serialize;

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometres.
///
/// Symmetric, and zero exactly when the points coincide.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// The closest airport to a query point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestAirport<'a> {
    pub airport: &'a Airport,
    /// Rounded to two decimal places.
    pub distance_km: f64,
}

impl AirportDb {
    /// Distance in kilometres between the airports two codes resolve to.
    ///
    /// Codes are resolved with [`AirportDb::resolve`]; `None` when either
    /// side is unresolved or lacks coordinates.
    pub fn distance_between(&self, code1: &str, code2: &str) -> Option<f64> {
        let a = self.resolve(code1)?.coordinates()?;
        let b = self.resolve(code2)?.coordinates()?;
        Some(haversine_km(a, b))
    }

    /// Airports within `radius_km` of the point, boundary included, in
    /// dataset order.
    pub fn within_radius(&self, latitude: f64, longitude: f64, radius_km: f64) -> Vec<&Airport> {
        let center = Coordinates::new(latitude, longitude);
        self.airports()
            .iter()
            .filter(|a| {
                a.coordinates()
                    .is_some_and(|c| haversine_km(center, c) <= radius_km)
            })
            .collect()
    }

    /// The closest airport to the point among those matching `filters`.
    ///
    /// Ties keep the first record in dataset order. `Ok(None)` when no
    /// candidate has coordinates; invalid filters are an error.
    pub fn nearest(
        &self,
        latitude: f64,
        longitude: f64,
        filters: &Filters,
    ) -> Result<Option<NearestAirport<'_>>> {
        let center = Coordinates::new(latitude, longitude);
        let candidates = if filters.is_empty() {
            self.airports().iter().collect()
        } else {
            self.find(filters)?
        };

        let mut best: Option<(&Airport, f64)> = None;
        for airport in candidates {
            let Some(coords) = airport.coordinates() else {
                continue;
            };
            let d = haversine_km(center, coords);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((airport, d));
            }
        }

        Ok(best.map(|(airport, d)| NearestAirport {
            airport,
            distance_km: round_to(d, 2),
        }))
    }
}
