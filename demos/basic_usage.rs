//! Basic usage example for airportdb-rs
//!
//! This example demonstrates how to:
//! - Load the embedded airport database
//! - Look airports up by IATA, ICAO and country code
//! - Search names and get autocomplete suggestions
//! - Measure distances and search around a point

use airportdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== AirportDB-RS Basic Usage Example ===\n");

    println!("Loading airport database...");
    let db = AirportDb::load()?;
    let stats = db.stats();
    println!(
        "✓ {} airports in {} countries on {} continents\n",
        stats.airports, stats.countries, stats.continents
    );

    // Example 1: Code lookups
    println!("--- Example 1: Lookup by IATA and ICAO ---");
    for a in db.by_iata("LHR")? {
        println!("LHR -> {} ({})", a.name(), a.icao());
    }
    for a in db.by_icao("KJFK")? {
        println!("KJFK -> {} ({})", a.name(), a.iata());
    }
    println!();

    // Example 2: Country listing
    println!("--- Example 2: Airports in a country ---");
    let gb = db.by_country("GB")?;
    println!("Airports in GB: {}", gb.len());
    for (i, a) in gb.iter().take(5).enumerate() {
        println!("{}. {} [{}]", i + 1, a.name(), a.kind());
    }
    println!();

    // Example 3: Name search
    println!("--- Example 3: Search by name ---");
    for a in db.search_by_name("international")?.iter().take(5) {
        println!("  {} ({})", a.name(), a.country_code);
    }
    println!("Autocomplete 'Lo':");
    for a in db.autocomplete("Lo") {
        println!("  {} {}", a.iata(), a.name());
    }
    println!();

    // Example 4: Geography
    println!("--- Example 4: Distances and radius search ---");
    if let Some(km) = db.distance_between("LHR", "JFK") {
        println!("LHR -> JFK: {km:.0} km");
    }
    let around_london = db.within_radius(51.5074, -0.1278, 50.0);
    println!("Within 50 km of central London: {}", around_london.len());
    for a in &around_london {
        println!("  {}", a.name());
    }

    println!("\n✓ Done");
    Ok(())
}
