// crates/airportdb-core/src/codes.rs

//! Shape validation for the code families the engines accept.

use crate::error::{AirportError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static IATA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(CodeKind::Iata.pattern()).unwrap());
static ICAO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(CodeKind::Icao.pattern()).unwrap());
static REGION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(CodeKind::Country.pattern()).unwrap());

/// The code families the lookup engines understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// 3-letter ticketing code, e.g. `LHR`.
    Iata,
    /// 4-character operational code, e.g. `EGLL`.
    Icao,
    /// ISO-3166 alpha-2 country code, e.g. `GB`.
    Country,
    /// 2-letter continent code, e.g. `EU`.
    Continent,
}

impl CodeKind {
    pub fn pattern(self) -> &'static str {
        match self {
            CodeKind::Iata => "^[A-Z]{3}$",
            CodeKind::Icao => "^[A-Z0-9]{4}$",
            CodeKind::Country | CodeKind::Continent => "^[A-Z]{2}$",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodeKind::Iata => "IATA code",
            CodeKind::Icao => "ICAO code",
            CodeKind::Country => "country code",
            CodeKind::Continent => "continent code",
        }
    }

    pub fn is_valid(self, code: &str) -> bool {
        let re = match self {
            CodeKind::Iata => &IATA_RE,
            CodeKind::Icao => &ICAO_RE,
            CodeKind::Country | CodeKind::Continent => &REGION_RE,
        };
        re.is_match(code)
    }

    /// Fails with [`AirportError::Format`] naming the expected pattern.
    pub fn validate(self, code: &str) -> Result<()> {
        if self.is_valid(code) {
            Ok(())
        } else {
            Err(AirportError::Format {
                kind: self.label(),
                pattern: self.pattern(),
                value: code.to_owned(),
            })
        }
    }

    pub(crate) fn not_found(self, code: &str) -> AirportError {
        AirportError::NotFound {
            kind: self.label(),
            code: code.to_owned(),
        }
    }

    /// Classifies a single-airport code by shape: IATA first, then ICAO.
    ///
    /// A three-letter string is always treated as IATA, so `"LHR"` never
    /// falls through to the ICAO index.
    pub fn classify(code: &str) -> Option<CodeKind> {
        if CodeKind::Iata.is_valid(code) {
            Some(CodeKind::Iata)
        } else if CodeKind::Icao.is_valid(code) {
            Some(CodeKind::Icao)
        } else {
            None
        }
    }
}
