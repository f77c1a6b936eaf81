// crates/airportdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates to the
//! payload parsers: normalized binary snapshots or raw JSON.
//!
//! The embedded dataset is materialized at most once per process; every
//! caller of [`AirportDb::load`] shares the same snapshot.

use crate::error::Result;
use crate::AirportDb;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;

#[cfg(feature = "builder")]
mod builder;

#[cfg(feature = "builder")]
pub use builder::CompressionMode;

#[cfg(all(feature = "json", feature = "compact"))]
static AIRPORT_DB_CACHE: OnceCell<AirportDb> = OnceCell::new();

/// The packaged dataset, gzip-compressed JSON.
#[cfg(all(feature = "json", feature = "compact"))]
static EMBEDDED_DATASET: &[u8] = include_bytes!("../../data/airports.json.gz");

impl AirportDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "airports.json.gz"
    }

    /// **Shared Loader:** the embedded dataset, parsed on first use.
    ///
    /// Concurrent first callers block until the single initialization
    /// finishes, then all observe the same instance.
    #[cfg(all(feature = "json", feature = "compact"))]
    pub fn load() -> Result<&'static AirportDb> {
        AIRPORT_DB_CACHE.get_or_try_init(|| {
            let db = Self::from_gz_bytes(EMBEDDED_DATASET).map_err(|e| {
                crate::AirportError::Dataset(format!("embedded airport dataset is unreadable: {e}"))
            })?;
            log::info!("loaded {} airports from the embedded dataset", db.len());
            Ok(db)
        })
    }

    /// A fresh, uncached copy of the embedded dataset restricted to the
    /// given ISO-2 countries.
    #[cfg(all(feature = "json", feature = "compact"))]
    pub fn load_filtered_by_iso2(iso2: &[&str]) -> Result<Self> {
        let decoder = flate2::read::GzDecoder::new(EMBEDDED_DATASET);
        let db = Self::from_reader(std::io::BufReader::new(decoder), Some(iso2))?;
        log::info!(
            "loaded {} airports for [{}] from the embedded dataset",
            db.len(),
            iso2.join(", ")
        );
        Ok(db)
    }

    /// **Path Loader:** reads a dataset file.
    ///
    /// `*.bin` files are taken as normalized snapshots. Anything else is a
    /// raw JSON array (gzip or plain). Nothing is written next to the file;
    /// see `load_cached` (feature `builder`) for the cached variant.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let db = if common_io::is_binary_snapshot(path) {
            Self::load_binary_file(path, filter)?
        } else {
            Self::load_source_file(path, filter)?
        };
        log::info!("loaded {} airports from {}", db.len(), path.display());
        Ok(db)
    }

    fn load_binary_file(path: &Path, filter: Option<&[&str]>) -> Result<Self> {
        let mut reader = common_io::open_stream(path)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes, filter)?)
    }

    #[cfg(feature = "json")]
    fn load_source_file(path: &Path, filter: Option<&[&str]>) -> Result<Self> {
        Self::from_reader(common_io::open_stream(path)?, filter)
    }

    #[cfg(not(feature = "json"))]
    fn load_source_file(path: &Path, _filter: Option<&[&str]>) -> Result<Self> {
        Err(crate::AirportError::InvalidData(format!(
            "{} is not a binary snapshot and the 'json' feature is disabled",
            path.display()
        )))
    }
}
