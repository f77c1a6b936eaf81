//! Advanced filtering example for airportdb-rs
//!
//! This example demonstrates:
//! - Multi-criteria filtering with `Filters`
//! - Nearest-airport queries restricted by filters
//! - Country and continent aggregates
//! - Rankings and distance matrices

use airportdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== AirportDB-RS Advanced Filtering Example ===\n");

    let db = AirportDb::load()?;

    // Example 1: Combined filters
    println!("--- Example 1: Scheduled European airports with long runways ---");
    let filters = Filters::new()
        .with("continent", "EU")
        .scheduled_service(true)
        .min_runway_ft(12_000);
    for a in db.find(&filters)? {
        println!("  {} {:<40} {:>6} ft", a.iata(), a.name(), a.runway_or_zero());
    }
    println!();

    // Example 2: Filters parsed from text
    println!("--- Example 2: Parsing field=value pairs ---");
    let parsed: Filters = ["country_code=US", "type=heliport"]
        .iter()
        .map(|p| Filters::parse_pair(p))
        .collect::<Result<_>>()?;
    for a in db.find(&parsed)? {
        println!("  {} ({})", a.name(), a.icao());
    }
    println!();

    // Example 3: Nearest with and without filters
    println!("--- Example 3: Nearest airport to central London ---");
    let (lat, lon) = (51.5074, -0.1278);
    if let Some(hit) = db.nearest(lat, lon, &Filters::new())? {
        println!("  Any facility:   {} ({} km)", hit.airport.name(), hit.distance_km);
    }
    let scheduled = Filters::new().scheduled_service(true);
    if let Some(hit) = db.nearest(lat, lon, &scheduled)? {
        println!("  With scheduled: {} ({} km)", hit.airport.name(), hit.distance_km);
    }
    println!();

    // Example 4: Aggregates
    println!("--- Example 4: Country and continent statistics ---");
    let gb = db.stats_by_country("GB")?;
    println!("GB: {} airports, {} scheduled", gb.total, gb.with_scheduled_service);
    for (kind, count) in &gb.by_type {
        println!("  {kind:<16} {count}");
    }
    let eu = db.stats_by_continent("EU")?;
    println!(
        "EU: {} airports in {} countries, average runway {} ft",
        eu.summary.total,
        eu.by_country.len(),
        eu.summary.average_runway_ft
    );
    println!();

    // Example 5: Rankings and matrices
    println!("--- Example 5: Largest in Asia and a distance matrix ---");
    for (i, a) in db.largest_by_continent("AS", 5, RankBy::Runway)?.iter().enumerate() {
        println!("{}. {} ({} ft)", i + 1, a.name(), a.runway_or_zero());
    }
    let matrix = db.distance_matrix(&["SIN", "LHR", "JFK"])?;
    for from in &matrix.codes {
        let row: Vec<String> = matrix
            .codes
            .iter()
            .map(|to| format!("{:>6}", matrix.distances[from][to]))
            .collect();
        println!("{from} {}", row.join(" "));
    }

    Ok(())
}
