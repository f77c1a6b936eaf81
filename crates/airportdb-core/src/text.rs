// crates/airportdb-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// 1\) Transliterate Unicode → ASCII (e.g. `Zürich` -> `Zurich`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use airportdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Zürich Airport"), "zurich airport");
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Trims a string and maps the empty result to `None`.
pub(crate) fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Parses a decimal string, accepting only finite values.
pub(crate) fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses an integer string; decimal strings are truncated toward zero.
pub(crate) fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| parse_finite(s).map(|v| v.trunc() as i64))
}

/// Rounds to the given number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding_ignores_case_and_accents() {
        assert!(equals_folded("MÜNCHEN", "munchen"));
        assert!(!equals_folded("Berlin", "Paris"));
    }

    #[test]
    fn numeric_parsing() {
        assert_eq!(parse_finite(" 51.47 "), Some(51.47));
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_int("12802"), Some(12802));
        assert_eq!(parse_int("-11"), Some(-11));
        assert_eq!(parse_int("83.9"), Some(83));
        assert_eq!(parse_int("N/A"), None);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(23.4949, 2), 23.49);
        assert_eq!(round_to(5539.64, 0), 5540.0);
    }

    #[test]
    fn empty_strings_become_none() {
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(Some(" LHR ".into())), Some("LHR".into()));
        assert_eq!(non_empty(None), None);
    }
}
