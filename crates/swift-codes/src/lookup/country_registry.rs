//! JSON-driven country-name registry.
//!
//! Loads `countries.json` at compile time via `include_str!` and builds the
//! alpha-2 index once via `lazy_static`.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Deserialize;

use super::traits::CountryNameLookup;

// ── JSON schema ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CountryCatalog {
    countries: Vec<CountryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct CountryEntry {
    alpha2: String,
    name: String,
}

// ── Registry with pre-built index ────────────────────────────────────────────

struct CountryIndex {
    /// alpha-2 → English short name
    name_by_code: HashMap<String, String>,
}

lazy_static! {
    static ref COUNTRIES: CountryIndex = CountryIndex::load();
}

impl CountryIndex {
    fn load() -> Self {
        let json = include_str!("countries.json");
        let catalog: CountryCatalog =
            serde_json::from_str(json).expect("countries.json must be valid");

        let name_by_code = catalog
            .countries
            .into_iter()
            .map(|entry| (entry.alpha2, entry.name))
            .collect();

        CountryIndex { name_by_code }
    }
}

/// Check whether `code` is an assigned ISO 3166-1 alpha-2 country code.
///
/// Case-insensitive.
pub fn is_known_country_code(code: &str) -> bool {
    COUNTRIES.name_by_code.contains_key(&code.to_ascii_uppercase())
}

/// Built-in ISO 3166-1 country names.
///
/// # Example
///
/// ```
/// use swift_codes::{CountryNameLookup, CountryRegistry};
///
/// let registry = CountryRegistry;
/// assert_eq!(registry.country_name("DE").as_deref(), Some("Germany"));
/// assert_eq!(registry.country_name("XX"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryRegistry;

impl CountryRegistry {
    /// Number of countries in the registry.
    pub fn len(&self) -> usize {
        COUNTRIES.name_by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        COUNTRIES.name_by_code.is_empty()
    }
}

impl CountryNameLookup for CountryRegistry {
    fn country_name(&self, iso_code: &str) -> Option<String> {
        COUNTRIES
            .name_by_code
            .get(&iso_code.to_ascii_uppercase())
            .cloned()
    }
}
