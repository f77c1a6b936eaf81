//! The shared snapshot and its indices are built once, whoever asks first.
#![cfg(all(feature = "json", feature = "compact"))]

use airportdb_core::{AirportDb, IndexField};
use std::thread;

#[test]
fn concurrent_first_access_sees_one_snapshot() {
    let addrs: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                s.spawn(move || {
                    let db = AirportDb::load().unwrap();
                    let code = if i % 2 == 0 { "LHR" } else { "JFK" };
                    assert_eq!(db.by_iata(code).unwrap()[0].iata(), code);
                    db as *const AirportDb as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn repeated_calls_reuse_snapshot_and_indices() {
    let first = AirportDb::load().unwrap();
    let iata = first.index(IndexField::Iata);
    let icao = first.index(IndexField::Icao);

    for _ in 0..100 {
        let again = AirportDb::load().unwrap();
        assert!(std::ptr::eq(first, again));
        assert!(std::ptr::eq(iata, again.index(IndexField::Iata)));
        assert!(std::ptr::eq(icao, again.index(IndexField::Icao)));
    }
    assert!(iata.contains("SIN"));
    assert!(!iata.contains(""));
}
