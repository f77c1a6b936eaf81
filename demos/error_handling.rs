//! Error handling example for airportdb-rs
//!
//! This example demonstrates the error contract and edge cases

use airportdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== AirportDB-RS Error Handling Example ===\n");

    // Example 1: Handling database load errors
    println!("--- Example 1: Loading database with error handling ---");
    match AirportDb::load() {
        Ok(db) => println!("✓ Database loaded successfully ({} airports)", db.len()),
        Err(e) => {
            eprintln!("✗ Failed to load database: {e}");
            return Err(e);
        }
    }
    println!();

    let db = AirportDb::load()?;

    // Example 2: Malformed vs. unknown codes
    println!("--- Example 2: Format errors vs. not found ---");
    for code in ["LHR", "ZZZ", "lhr", "LHRX", ""] {
        match db.by_iata(code) {
            Ok(hits) => println!("  {code:<5} -> {}", hits[0].name()),
            Err(e) if e.is_not_found() => println!("  {code:<5} -> not in the dataset"),
            Err(AirportError::Format { pattern, .. }) => {
                println!("  {code:<5} -> malformed, expected {pattern}")
            }
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 3: Validation errors
    println!("--- Example 3: Invalid inputs ---");
    if let Err(e) = db.search_by_name("L") {
        println!("  search_by_name(\"L\"): {e}");
    }
    println!("  autocomplete(\"L\") gives {} suggestions", db.autocomplete("L").len());
    if let Err(e) = db.find(&Filters::new().with("runway", 3000)) {
        println!("  unknown filter field: {e}");
    }
    if let Err(e) = db.distance_matrix(&["LHR"]) {
        println!("  one-code matrix: {e}");
    }
    println!();

    // Example 4: Batch operations
    println!("--- Example 4: Partial and aggregate failures ---");
    let hits = db.get_many(&["LHR", "XXX", "EGLL", "nope"]);
    for (code, hit) in ["LHR", "XXX", "EGLL", "nope"].iter().zip(&hits) {
        match hit {
            Some(a) => println!("  {code:<5} -> {}", a.name()),
            None => println!("  {code:<5} -> unresolved"),
        }
    }
    match db.distance_matrix(&["LHR", "XXX", "JFK", "YYY"]) {
        Ok(_) => println!("  unexpected success"),
        Err(AirportError::Unresolved(codes)) => println!("  unresolved: {}", codes.join(", ")),
        Err(e) => return Err(e),
    }
    println!();

    // Example 5: Optional results
    println!("--- Example 5: Missing data is None, not an error ---");
    println!("  distance LHR -> ZZZ: {:?}", db.distance_between("LHR", "ZZZ"));
    println!("  links for ZZZ: {:?}", db.links("ZZZ"));
    println!("  airports within 10 km of 0,0: {}", db.within_radius(0.0, 0.0, 10.0).len());

    Ok(())
}
