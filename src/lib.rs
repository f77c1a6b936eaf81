//! Umbrella crate for the workspace; re-exports [`airportdb_core`] so the
//! demos can be run from the repository root.
pub use airportdb_core::*;
