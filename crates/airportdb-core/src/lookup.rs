// crates/airportdb-core/src/lookup.rs

//! # Lookup Engine
//!
//! Exact-match queries by code family. Every lookup validates the code's
//! shape first ([`AirportError::Format`]) and reports a well-formed code
//! with no matches as [`AirportError::NotFound`].
//!
//! IATA and ICAO go through the lazily built secondary indices; country and
//! continent are not unique keys and use a linear scan.

use crate::codes::CodeKind;
use crate::error::{AirportError, Result};
use crate::index::IndexField;
use crate::model::{Airport, AirportLinks};
use crate::AirportDb;

fn non_empty_or<'a>(
    kind: CodeKind,
    code: &str,
    hits: Vec<&'a Airport>,
) -> Result<Vec<&'a Airport>> {
    if hits.is_empty() {
        Err(kind.not_found(code))
    } else {
        Ok(hits)
    }
}

impl AirportDb {
    /// All airports with the given IATA code, in dataset order.
    ///
    /// ```no_run
    /// use airportdb_core::AirportDb;
    ///
    /// let db = AirportDb::load().unwrap();
    /// let heathrow = db.by_iata("LHR").unwrap();
    /// assert!(heathrow.iter().all(|a| a.iata() == "LHR"));
    /// ```
    pub fn by_iata(&self, code: &str) -> Result<Vec<&Airport>> {
        CodeKind::Iata.validate(code)?;
        non_empty_or(CodeKind::Iata, code, self.indexed(IndexField::Iata, code))
    }

    /// All airports with the given ICAO code, in dataset order.
    pub fn by_icao(&self, code: &str) -> Result<Vec<&Airport>> {
        CodeKind::Icao.validate(code)?;
        non_empty_or(CodeKind::Icao, code, self.indexed(IndexField::Icao, code))
    }

    pub fn by_country(&self, code: &str) -> Result<Vec<&Airport>> {
        CodeKind::Country.validate(code)?;
        let hits = self.airports().iter().filter(|a| a.country_code == code).collect();
        non_empty_or(CodeKind::Country, code, hits)
    }

    pub fn by_continent(&self, code: &str) -> Result<Vec<&Airport>> {
        CodeKind::Continent.validate(code)?;
        let hits = self.airports().iter().filter(|a| a.continent == code).collect();
        non_empty_or(CodeKind::Continent, code, hits)
    }

    /// Airports of a facility type, case-insensitive.
    ///
    /// The bare query `airport` is a family match: it returns every type
    /// containing `airport` (small, medium, large, ...). Unknown types give
    /// an empty list.
    pub fn by_type(&self, kind: &str) -> Result<Vec<&Airport>> {
        let q = kind.trim().to_ascii_lowercase();
        if q.is_empty() {
            return Err(AirportError::validation("airport type must not be empty"));
        }
        let family = q == "airport";
        Ok(self
            .airports()
            .iter()
            .filter(|a| {
                let t = a.kind().to_ascii_lowercase();
                if family {
                    t.contains("airport")
                } else {
                    t == q
                }
            })
            .collect())
    }

    /// Airports in the given IANA timezone (exact match).
    pub fn by_timezone(&self, timezone: &str) -> Result<Vec<&Airport>> {
        let tz = timezone.trim();
        if tz.is_empty() {
            return Err(AirportError::validation("timezone must not be empty"));
        }
        Ok(self
            .airports()
            .iter()
            .filter(|a| a.timezone() == Some(tz))
            .collect())
    }

    /// One representative airport for an IATA- or ICAO-shaped code.
    ///
    /// Returns the first match in dataset order. Codes of neither shape, and
    /// well-formed codes with no match, resolve to `None`.
    pub fn resolve(&self, code: &str) -> Option<&Airport> {
        let field = match CodeKind::classify(code)? {
            CodeKind::Iata => IndexField::Iata,
            _ => IndexField::Icao,
        };
        let pos = *self.index(field).positions(code).first()?;
        self.airports().get(pos)
    }

    /// External links of the airport `code` resolves to.
    pub fn links(&self, code: &str) -> Option<AirportLinks> {
        self.resolve(code).map(Airport::links)
    }

    /// True iff `code` is a well-formed IATA code present in the dataset.
    pub fn validate_iata(&self, code: &str) -> bool {
        CodeKind::Iata.is_valid(code) && self.index(IndexField::Iata).contains(code)
    }

    /// True iff `code` is a well-formed ICAO code present in the dataset.
    pub fn validate_icao(&self, code: &str) -> bool {
        CodeKind::Icao.is_valid(code) && self.index(IndexField::Icao).contains(code)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AirportError;
    use crate::test_fixtures::fixture_db;

    #[test]
    fn iata_lookup() {
        let db = fixture_db();
        let hits = db.by_iata("LHR").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].iata(), "LHR");
        assert!(hits[0].name.contains("Heathrow"));
    }

    #[test]
    fn iata_format_checked_before_lookup() {
        let db = fixture_db();
        for bad in ["lhr", "LH", "LHRX", "L1R", ""] {
            let err = db.by_iata(bad).unwrap_err();
            assert!(matches!(err, AirportError::Format { .. }), "{bad:?}: {err}");
        }
        let err = db.by_iata("ZZZ").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("ZZZ"));
    }

    #[test]
    fn duplicate_iata_returns_all_matches() {
        let db = fixture_db();
        let hits = db.by_iata("DUP").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].icao(), "XDU1");
        assert_eq!(hits[1].icao(), "XDU2");
    }

    #[test]
    fn icao_lookup() {
        let db = fixture_db();
        let hits = db.by_icao("EGLL").unwrap();
        assert_eq!(hits[0].iata(), "LHR");
        assert!(matches!(db.by_icao("egll"), Err(AirportError::Format { .. })));
        assert!(db.by_icao("ZZZZ").unwrap_err().is_not_found());
    }

    #[test]
    fn country_and_continent_scans() {
        let db = fixture_db();
        let gb = db.by_country("GB").unwrap();
        assert_eq!(gb.len(), 5);
        assert!(gb.iter().all(|a| a.country_code == "GB"));

        let asia = db.by_continent("AS").unwrap();
        assert_eq!(asia.len(), 3);
        assert!(asia.iter().all(|a| a.continent == "AS"));

        assert!(matches!(db.by_country("GBR"), Err(AirportError::Format { .. })));
        assert!(db.by_continent("AN").unwrap_err().is_not_found());
    }

    #[test]
    fn type_lookup_is_case_insensitive() {
        let db = fixture_db();
        let upper = db.by_type("LARGE_AIRPORT").unwrap();
        let lower = db.by_type("large_airport").unwrap();
        assert_eq!(upper.len(), lower.len());
        assert!(lower.iter().all(|a| a.kind() == "large_airport"));
        assert!(db.by_type("nonexistent_type").unwrap().is_empty());
        assert!(db.by_type("  ").is_err());
    }

    #[test]
    fn bare_airport_type_matches_the_family() {
        let db = fixture_db();
        let all = db.by_type("airport").unwrap();
        assert!(all.iter().all(|a| a.is_airport_class()));
        assert!(all.iter().any(|a| a.kind() == "small_airport"));
        assert!(all.iter().any(|a| a.kind() == "medium_airport"));
        assert!(!all.iter().any(|a| a.kind() == "heliport"));
    }

    #[test]
    fn timezone_lookup() {
        let db = fixture_db();
        let london = db.by_timezone("Europe/London").unwrap();
        assert_eq!(london.len(), 4);
        assert!(db.by_timezone("Mars/Olympus").unwrap().is_empty());
        assert!(db.by_timezone("").is_err());
    }

    #[test]
    fn resolve_by_shape() {
        let db = fixture_db();
        assert_eq!(db.resolve("JFK").map(|a| a.icao()), Some("KJFK"));
        assert_eq!(db.resolve("KJFK").map(|a| a.iata()), Some("JFK"));
        assert_eq!(db.resolve("DUP").map(|a| a.icao()), Some("XDU1"));
        assert!(db.resolve("ZZZ").is_none());
        assert!(db.resolve("jfk").is_none());
        assert!(db.resolve("").is_none());
    }

    #[test]
    fn links_of_resolved_airport() {
        let db = fixture_db();
        let links = db.links("LHR").unwrap();
        assert!(links.wikipedia.unwrap().contains("Heathrow_Airport"));
        assert!(links.website.is_some());

        let hnd = db.links("HND").unwrap();
        assert!(hnd.wikipedia.unwrap().contains("Tokyo_International_Airport"));
        assert!(hnd.website.is_none());

        assert!(db.links("EGLW").unwrap().is_empty());
        assert!(db.links("ZZZ").is_none());
    }

    #[test]
    fn code_validation() {
        let db = fixture_db();
        assert!(db.validate_iata("LHR"));
        assert!(!db.validate_iata("ZZZ"));
        assert!(!db.validate_iata("lhr"));
        assert!(db.validate_icao("EGLW"));
        assert!(!db.validate_icao("EGL"));
    }
}
