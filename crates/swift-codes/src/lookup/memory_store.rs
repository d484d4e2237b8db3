//! In-memory reference data.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::{ReferenceDataset, ReferenceEntry};

use super::traits::ReferenceDataSource;

/// Reference datasets held in memory, keyed by uppercased country code.
///
/// # Example
///
/// ```
/// use swift_codes::{InMemoryReferenceStore, ReferenceDataSource, ReferenceEntry};
///
/// let store = InMemoryReferenceStore::new().with_entry(
///     "DE",
///     "DEUTDEFF",
///     ReferenceEntry::new("Deutsche Bank", "Frankfurt am Main", ""),
/// );
///
/// let dataset = store.dataset("DE").unwrap().unwrap();
/// assert_eq!(dataset["DEUTDEFF"].institution, "Deutsche Bank");
/// assert!(store.dataset("FR").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceStore {
    datasets: HashMap<String, Arc<ReferenceDataset>>,
}

impl InMemoryReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole dataset for a country.
    pub fn with_dataset(mut self, country_code: &str, dataset: ReferenceDataset) -> Self {
        self.datasets
            .insert(country_code.to_uppercase(), Arc::new(dataset));
        self
    }

    /// Add a single entry, creating the country's dataset if needed.
    pub fn with_entry(mut self, country_code: &str, code: &str, entry: ReferenceEntry) -> Self {
        let dataset = self
            .datasets
            .entry(country_code.to_uppercase())
            .or_default();
        Arc::make_mut(dataset).insert(code.to_uppercase(), entry);
        self
    }

    /// Countries with a dataset, sorted.
    pub fn countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self.datasets.keys().map(String::as_str).collect();
        countries.sort_unstable();
        countries
    }
}

impl ReferenceDataSource for InMemoryReferenceStore {
    fn dataset(&self, iso_code: &str) -> Result<Option<Arc<ReferenceDataset>>> {
        Ok(self.datasets.get(iso_code).cloned())
    }
}
