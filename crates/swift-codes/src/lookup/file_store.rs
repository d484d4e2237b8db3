//! File-backed reference data.
//!
//! One JSON document per country, `<data_dir>/<CC>.json`, mapping the full
//! formatted code to its names:
//!
//! ```json
//! {
//!   "DEUTDEFF500": {"institution": "Deutsche Bank", "city": "Frankfurt am Main", "branch": "Filiale 500"}
//! }
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, warn};

use crate::config::ReferenceDataConfig;
use crate::errors::{Result, SwiftCodeError};
use crate::models::{ReferenceDataset, COUNTRY_CODE_LEN};

use super::traits::ReferenceDataSource;

/// Reads per-country datasets from a directory of JSON files.
///
/// A missing file means "no dataset for this country". A file that exists but
/// cannot be read or parsed yields [`SwiftCodeError::LookupUnavailable`] and is
/// not cached, so a repaired file is picked up on the next call.
pub struct FileReferenceStore {
    data_dir: PathBuf,
    /// country code → loaded dataset, or None when no file exists
    cache: Option<DashMap<String, Option<Arc<ReferenceDataset>>>>,
}

impl FileReferenceStore {
    /// Create a caching store over `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::from_config(&ReferenceDataConfig::new(data_dir))
    }

    pub fn from_config(config: &ReferenceDataConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            cache: config.cache_datasets.then(DashMap::new),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the dataset file for a country.
    pub fn dataset_path(&self, iso_code: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", iso_code))
    }

    /// Drop every cached dataset.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Countries currently held in the cache (including known-absent ones), sorted.
    pub fn cached_countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = self
            .cache
            .iter()
            .flat_map(|cache| cache.iter().map(|entry| entry.key().clone()))
            .collect();
        countries.sort_unstable();
        countries
    }

    fn load(&self, iso_code: &str) -> Result<Option<Arc<ReferenceDataset>>> {
        let path = self.dataset_path(iso_code);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No reference dataset for {} at {}", iso_code, path.display());
                return Ok(None);
            }
            Err(e) => {
                warn!("Failed to read reference dataset {}: {}", path.display(), e);
                return Err(SwiftCodeError::lookup_unavailable(iso_code, e.to_string()));
            }
        };

        let dataset: ReferenceDataset = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse reference dataset {}: {}", path.display(), e);
            SwiftCodeError::lookup_unavailable(iso_code, e.to_string())
        })?;

        debug!(
            "Loaded {} reference entries for {} from {}",
            dataset.len(),
            iso_code,
            path.display()
        );
        Ok(Some(Arc::new(dataset)))
    }
}

/// Only plain alpha-2 codes map to a file name.
fn is_dataset_key(iso_code: &str) -> bool {
    iso_code.len() == COUNTRY_CODE_LEN && iso_code.bytes().all(|b| b.is_ascii_uppercase())
}

impl ReferenceDataSource for FileReferenceStore {
    fn dataset(&self, iso_code: &str) -> Result<Option<Arc<ReferenceDataset>>> {
        if !is_dataset_key(iso_code) {
            return Ok(None);
        }

        let Some(cache) = &self.cache else {
            return self.load(iso_code);
        };

        if let Some(cached) = cache.get(iso_code) {
            return Ok(cached.clone());
        }

        let loaded = self.load(iso_code)?;
        cache.insert(iso_code.to_string(), loaded.clone());
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DE_DATASET: &str = r#"{
        "DEUTDEFF": {"institution": "Deutsche Bank", "city": "Frankfurt am Main", "branch": ""},
        "DEUTDEFF500": {"institution": "Deutsche Bank", "city": "Frankfurt am Main", "branch": "Filiale 500"}
    }"#;

    fn make_store(cache: bool) -> (TempDir, FileReferenceStore) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("DE.json"), DE_DATASET).unwrap();
        let config = ReferenceDataConfig::new(dir.path()).with_cache(cache);
        let store = FileReferenceStore::from_config(&config);
        (dir, store)
    }

    #[test]
    fn test_loads_existing_dataset() {
        let (_dir, store) = make_store(true);

        let dataset = store.dataset("DE").unwrap().unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset["DEUTDEFF500"].branch, "Filiale 500");
    }

    #[test]
    fn test_missing_file_is_absent() {
        let (_dir, store) = make_store(true);
        assert!(store.dataset("FR").unwrap().is_none());
    }

    #[test]
    fn test_non_alpha2_key_is_absent() {
        let (_dir, store) = make_store(false);
        assert!(store.dataset("../DE").unwrap().is_none());
        assert!(store.dataset("de").unwrap().is_none());
        assert!(store.dataset("").unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_unavailable() {
        let (dir, store) = make_store(true);
        fs::write(dir.path().join("FR.json"), "{ not json").unwrap();

        let result = store.dataset("FR");
        match result {
            Err(SwiftCodeError::LookupUnavailable { country_code, .. }) => {
                assert_eq!(country_code, "FR")
            }
            other => panic!("expected LookupUnavailable, got {:?}", other),
        }
        // Failures are not cached.
        assert!(!store.cached_countries().contains(&"FR".to_string()));
    }

    #[test]
    fn test_cache_serves_after_file_removed() {
        let (dir, store) = make_store(true);
        assert!(store.dataset("DE").unwrap().is_some());
        assert!(store.dataset("FR").unwrap().is_none());
        assert_eq!(store.cached_countries(), vec!["DE", "FR"]);

        fs::remove_file(dir.path().join("DE.json")).unwrap();
        assert!(store.dataset("DE").unwrap().is_some());

        store.clear_cache();
        assert!(store.dataset("DE").unwrap().is_none());
    }

    #[test]
    fn test_uncached_store_rereads() {
        let (dir, store) = make_store(false);
        assert!(store.dataset("DE").unwrap().is_some());
        assert!(store.cached_countries().is_empty());

        fs::remove_file(dir.path().join("DE.json")).unwrap();
        assert!(store.dataset("DE").unwrap().is_none());
    }

    #[test]
    fn test_dataset_path() {
        let store = FileReferenceStore::new("/srv/bic");
        assert_eq!(store.dataset_path("DE"), PathBuf::from("/srv/bic/DE.json"));
        assert_eq!(store.data_dir(), Path::new("/srv/bic"));
    }
}
