//! airportdb-cli: command-line interface for airportdb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ airportdb stats
//!
//! - Lookups
//!   $ airportdb iata LHR
//!   $ airportdb --filter=GB,FR country GB
//!
//! - Geography
//!   $ airportdb distance LHR JFK
//!   $ airportdb nearby 51.5074 -0.1278 --radius 50
//!   $ airportdb nearest 51.5074 -0.1278 --where has_scheduled_service=true
//!
//! - Aggregates (printed as JSON)
//!   $ airportdb continent-stats EU
//!   $ airportdb largest AS --limit 5 --by runway
//!   $ airportdb matrix SIN LHR JFK
//!
//! Set `RUST_LOG=debug` to see dataset and index diagnostics.
mod args;

use crate::args::{CliArgs, Commands};
use airportdb_core::{Airport, AirportDb, CodeKind, Filters};
use anyhow::{anyhow, Context};
use clap::Parser;
use serde::Serialize;
use std::borrow::Cow;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    // Parse filter if provided
    let iso_filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });
    let db = open_db(args.input.as_deref(), args.cache, iso_filter.as_deref())?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Airports: {}", stats.airports);
            println!("  With IATA code: {}", stats.with_iata);
            println!("  With ICAO code: {}", stats.with_icao);
            println!("  With coordinates: {}", stats.with_coordinates);
            println!("  Countries: {}", stats.countries);
            println!("  Continents: {}", stats.continents);
        }

        Commands::Iata { code } => print_airports(&db.by_iata(&code)?),
        Commands::Icao { code } => print_airports(&db.by_icao(&code)?),
        Commands::Country { code } => print_airports(&db.by_country(&code)?),
        Commands::Continent { code } => print_airports(&db.by_continent(&code)?),
        Commands::Type { kind } => print_airports(&db.by_type(&kind)?),
        Commands::Timezone { timezone } => print_airports(&db.by_timezone(&timezone)?),
        Commands::Search { query } => print_airports(&db.search_by_name(&query)?),
        Commands::Autocomplete { query } => print_airports(&db.autocomplete(&query)),

        Commands::Distance { from, to } => {
            let km = db
                .distance_between(&from, &to)
                .ok_or_else(|| {
                    anyhow!("could not resolve both {from} and {to} to airports with coordinates")
                })?;
            println!("{from} -> {to}: {km:.2} km");
        }

        Commands::Nearby {
            latitude,
            longitude,
            radius,
        } => print_airports(&db.within_radius(latitude, longitude, radius)),

        Commands::Nearest {
            latitude,
            longitude,
            filters,
        } => {
            let filters = parse_filters(&filters)?;
            match db.nearest(latitude, longitude, &filters)? {
                Some(hit) => print_json(&hit)?,
                None => println!("No airport with coordinates matches."),
            }
        }

        Commands::Find { filters } => print_airports(&db.find(&parse_filters(&filters)?)?),

        Commands::CountryStats { code } => print_json(&db.stats_by_country(&code)?)?,
        Commands::ContinentStats { code } => print_json(&db.stats_by_continent(&code)?)?,

        Commands::Largest { code, limit, by } => {
            println!("Top {limit} in {code} by {by}:");
            print_airports(&db.largest_by_continent(&code, limit, by)?);
        }

        Commands::Matrix { codes } => print_json(&db.distance_matrix(&codes)?)?,

        Commands::Links { code } => {
            let links = db
                .links(&code)
                .ok_or_else(|| anyhow!("no airport found for: {code}"))?;
            print_json(&links)?;
        }

        Commands::Validate { code } => {
            let (kind, known) = match CodeKind::classify(&code) {
                Some(CodeKind::Iata) => ("IATA", db.validate_iata(&code)),
                Some(CodeKind::Icao) => ("ICAO", db.validate_icao(&code)),
                _ => {
                    println!("{code}: not a well-formed IATA or ICAO code");
                    return Ok(());
                }
            };
            let status = if known { "known" } else { "unknown" };
            println!("{code}: well-formed {kind} code, {status}");
        }
    }

    Ok(())
}

/// The embedded snapshot, unless an input file or a country filter asks
/// for a private copy.
fn open_db(
    input: Option<&str>,
    cache: bool,
    filter: Option<&[&str]>,
) -> anyhow::Result<Cow<'static, AirportDb>> {
    let Some(path) = input else {
        return embedded(filter);
    };
    let db = if cache {
        cached(path, filter)?
    } else {
        AirportDb::load_from_path(path, filter)
            .with_context(|| format!("loading dataset from {path}"))?
    };
    Ok(Cow::Owned(db))
}

#[cfg(feature = "builder")]
fn cached(path: &str, filter: Option<&[&str]>) -> anyhow::Result<AirportDb> {
    AirportDb::load_cached(path, filter)
        .with_context(|| format!("loading dataset from {path} through its cache"))
}

#[cfg(not(feature = "builder"))]
fn cached(_path: &str, _filter: Option<&[&str]>) -> anyhow::Result<AirportDb> {
    Err(anyhow!("--cache needs the 'builder' feature"))
}

#[cfg(all(feature = "json", feature = "compact"))]
fn embedded(filter: Option<&[&str]>) -> anyhow::Result<Cow<'static, AirportDb>> {
    Ok(match filter {
        Some(iso2) if !iso2.is_empty() => {
            Cow::Owned(AirportDb::load_filtered_by_iso2(iso2)?)
        }
        _ => Cow::Borrowed(AirportDb::load()?),
    })
}

#[cfg(not(all(feature = "json", feature = "compact")))]
fn embedded(_filter: Option<&[&str]>) -> anyhow::Result<Cow<'static, AirportDb>> {
    let default = AirportDb::default_data_dir().join(AirportDb::default_dataset_filename());
    Err(anyhow!(
        "the embedded dataset needs the 'json' and 'compact' features; pass --input (e.g. {})",
        default.display()
    ))
}

fn parse_filters(pairs: &[String]) -> anyhow::Result<Filters> {
    let filters = pairs
        .iter()
        .map(|p| Filters::parse_pair(p))
        .collect::<Result<Filters, _>>()?;
    log::debug!("parsed {} filter(s)", filters.len());
    Ok(filters)
}

fn print_airports(airports: &[&Airport]) {
    if airports.is_empty() {
        println!("No airports found.");
        return;
    }
    for a in airports {
        println!(
            "{:<4} {:<5} {} ({}, {})",
            a.iata(),
            a.icao(),
            a.name(),
            a.city.as_deref().unwrap_or("-"),
            a.country_code
        );
    }
    println!("{} airport(s)", airports.len());
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
