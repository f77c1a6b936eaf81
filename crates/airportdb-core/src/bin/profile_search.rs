// crates/airportdb-core/src/bin/profile_search.rs
//
// Quick wall-clock profile of the hot query paths against the embedded
// dataset. Run with `cargo run --release --bin profile_search`.

use airportdb_core::{AirportDb, Filters, RankBy, Result};
use std::hint::black_box;
use std::time::{Duration, Instant};

const ROUNDS: u32 = 1_000;

fn time<T>(label: &str, mut f: impl FnMut() -> T) {
    let start = Instant::now();
    for _ in 0..ROUNDS {
        black_box(f());
    }
    let per_call = start.elapsed() / ROUNDS;
    println!("{label:<28} {:>10.2?} / call", per_call);
}

fn main() -> Result<()> {
    let start = Instant::now();
    let db = AirportDb::load()?;
    let load_time: Duration = start.elapsed();
    println!("loaded {} airports in {:.2?}", db.len(), load_time);

    // First code lookups pay for the index builds.
    let start = Instant::now();
    db.by_iata("LHR")?;
    db.by_icao("EGLL")?;
    println!("index build                  {:>10.2?}", start.elapsed());

    time("by_iata", || db.by_iata("JFK").map(|v| v.len()));
    time("by_country", || db.by_country("US").map(|v| v.len()));
    time("search_by_name", || db.search_by_name("london").map(|v| v.len()));
    time("autocomplete", || db.autocomplete("Lo").len());
    time("within_radius 50km", || db.within_radius(51.5074, -0.1278, 50.0).len());

    let filters = Filters::new().scheduled_service(true).min_runway_ft(10_000);
    time("find", || db.find(&filters).map(|v| v.len()));
    time("nearest", || db.nearest(51.5074, -0.1278, &Filters::new()).map(|n| n.is_some()));
    time("largest_by_continent", || {
        db.largest_by_continent("EU", 10, RankBy::Runway).map(|v| v.len())
    });
    time("distance_matrix x4", || {
        db.distance_matrix(&["LHR", "JFK", "SIN", "SYD"]).map(|m| m.codes.len())
    });

    Ok(())
}
