// crates/airportdb-core/src/traits.rs
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`fold_key`]. Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use airportdb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Zürich Airport").is_named("zurich airport"));
/// assert!(Place("London Heathrow Airport").name_contains("heathrow"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_key(q))
    }

    /// Like [`NameMatch::name_contains`] for a query that is already folded,
    /// so scans fold the query once instead of once per record.
    #[inline]
    fn name_contains_folded(&self, folded_q: &str) -> bool {
        fold_key(self.name_str()).contains(folded_q)
    }
}
