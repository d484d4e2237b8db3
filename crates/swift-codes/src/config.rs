//! Reference data configuration.

use std::path::PathBuf;

use crate::errors::{Result, SwiftCodeError};

/// Environment variable naming the directory of per-country dataset files.
pub const DATA_DIR_VAR: &str = "SWIFT_REFERENCE_DATA_DIR";

/// Environment variable toggling the in-process dataset cache.
pub const CACHE_VAR: &str = "SWIFT_REFERENCE_CACHE";

const DEFAULT_DATA_DIR: &str = "./data/reference";

/// Settings for [`FileReferenceStore`](crate::lookup::FileReferenceStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDataConfig {
    /// Directory holding one `<CC>.json` file per country.
    pub data_dir: PathBuf,
    /// Keep loaded datasets in memory for subsequent lookups.
    pub cache_datasets: bool,
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cache_datasets: true,
        }
    }
}

impl ReferenceDataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_cache(mut self, cache_datasets: bool) -> Self {
        self.cache_datasets = cache_datasets;
        self
    }

    /// Read the configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let cache_datasets = match lookup(CACHE_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                SwiftCodeError::InvalidConfig(format!("{}={}", CACHE_VAR, raw))
            })?,
            None => true,
        };

        Ok(Self {
            data_dir,
            cache_datasets,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ReferenceDataConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ReferenceDataConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("./data/reference"));
        assert!(config.cache_datasets);
    }

    #[test]
    fn test_reads_variables() {
        let config = ReferenceDataConfig::from_lookup(lookup_from(&[
            (DATA_DIR_VAR, "/srv/bic"),
            (CACHE_VAR, "no"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/bic"));
        assert!(!config.cache_datasets);
    }

    #[test]
    fn test_blank_data_dir_falls_back_to_default() {
        let config =
            ReferenceDataConfig::from_lookup(lookup_from(&[(DATA_DIR_VAR, "  ")])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./data/reference"));
    }

    #[test]
    fn test_invalid_cache_flag_rejected() {
        let result = ReferenceDataConfig::from_lookup(lookup_from(&[(CACHE_VAR, "maybe")]));

        match result {
            Err(SwiftCodeError::InvalidConfig(message)) => {
                assert_eq!(message, "SWIFT_REFERENCE_CACHE=maybe")
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
