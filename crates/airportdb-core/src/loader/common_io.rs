// crates/airportdb-core/src/loader/common_io.rs
use crate::error::{AirportError, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a dataset file, buffered, transparently gunzipping it when the
/// content starts with the gzip magic bytes.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AirportError::Dataset(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let gzip = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(AirportError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

pub fn is_binary_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}

/// `airports.json.gz` -> `airports.json.gz.<suffix>`
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name = source
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("airports"));
    name.push(".");
    name.push(suffix);
    source.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("/data/airports.json.gz"), "comp.bin");
        assert_eq!(p, Path::new("/data/airports.json.gz.comp.bin"));
        assert!(is_binary_snapshot(&p));
        assert!(!is_binary_snapshot(Path::new("/data/airports.json.gz")));
    }
}
