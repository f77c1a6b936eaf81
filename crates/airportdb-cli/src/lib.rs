//! airportdb-cli
//! =============
//!
//! Command-line interface for the `airportdb-core` airport database.
//!
//! This crate primarily provides a binary (`airportdb-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install airportdb-cli
//! airportdb-cli --help
//! airportdb-cli stats
//! airportdb-cli iata LHR
//! airportdb-cli distance LHR JFK
//! airportdb-cli find country_code=GB has_scheduled_service=true
//! ```
//!
//! Every subcommand maps onto one query of [`airportdb_core`]; use that crate
//! directly for programmatic access.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
