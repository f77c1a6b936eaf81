// crates/airportdb-core/src/loader/builder.rs
use super::common_io;
use crate::error::Result;
use crate::model::load::{retain_countries, snapshot_options};
use crate::model::{Airport, CACHE_SUFFIX};
use crate::AirportDb;

use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::UNIX_EPOCH;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl Default for CompressionMode {
    fn default() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

/// Identity of the source file a cache was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SourceStamp {
    len: u64,
    /// Seconds and nanoseconds since the epoch, when the platform reports it.
    modified: Option<(u64, u32)>,
}

impl SourceStamp {
    fn of(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        let modified = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| (d.as_secs(), d.subsec_nanos()));
        Ok(Self {
            len: meta.len(),
            modified,
        })
    }
}

#[derive(Serialize)]
struct CacheRef<'a> {
    source: SourceStamp,
    airports: &'a [Airport],
}

#[derive(Deserialize)]
struct CacheOwned {
    source: SourceStamp,
    airports: Vec<Airport>,
}

impl AirportDb {
    /// **Cached Load:** parses a JSON source through a binary cache kept at
    /// `<source>.<suffix>`.
    ///
    /// The cache is only reused when it was built from a source of the same
    /// length and modification time; otherwise the source is parsed again
    /// and the cache rewritten. The cache always holds the full source; the
    /// country filter is applied after loading.
    pub fn load_cached(source: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let source = source.as_ref();
        let cache_path = common_io::get_cache_path(source, CACHE_SUFFIX);
        let stamp = SourceStamp::of(source).map_err(|e| {
            crate::AirportError::Dataset(format!(
                "Dataset not found at {}: {}",
                source.display(),
                e
            ))
        })?;

        match read_cache(&cache_path) {
            Ok(cache) if cache.source == stamp => {
                log::debug!("using binary cache {}", cache_path.display());
                let mut airports = cache.airports;
                retain_countries(&mut airports, filter);
                return Ok(Self::from_airports(airports));
            }
            Ok(_) => log::info!("binary cache {} is stale, rebuilding", cache_path.display()),
            Err(e) if cache_path.exists() => {
                log::warn!("ignoring unreadable cache {}: {e}", cache_path.display())
            }
            Err(_) => {}
        }

        let db = Self::load_raw_json(source)?;
        let cache = CacheRef {
            source: stamp,
            airports: db.airports(),
        };
        let written = snapshot_options()
            .serialize(&cache)
            .map_err(crate::AirportError::from)
            .and_then(|bytes| {
                write_snapshot(&cache_path, &bytes, CompressionMode::default())
            });
        if let Err(e) = written {
            log::warn!("could not write binary cache {}: {e}", cache_path.display());
        }

        let mut airports = db.airports().to_vec();
        retain_countries(&mut airports, filter);
        Ok(Self::from_airports(airports))
    }

    /// Parses a raw JSON dataset, bypassing any cache.
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(common_io::open_stream(path.as_ref())?, None)
    }

    /// Writes the normalized binary snapshot, compressed when `compact` is on.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with(path, CompressionMode::default())
    }

    pub fn save_with(&self, path: impl AsRef<Path>, compression: CompressionMode) -> Result<()> {
        write_snapshot(path.as_ref(), &self.to_bytes()?, compression)
    }
}

fn read_cache(path: &Path) -> Result<CacheOwned> {
    let mut bytes = Vec::new();
    common_io::open_stream(path)?.read_to_end(&mut bytes)?;
    Ok(snapshot_options().deserialize(&bytes)?)
}

fn write_snapshot(path: &Path, bytes: &[u8], compression: CompressionMode) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::AirportError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    encoder.write_all(bytes)?;
    encoder.flush()?;
    Ok(())
}
