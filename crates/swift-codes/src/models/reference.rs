use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Human-readable names for one code in a country's reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Bank / institution name.
    pub institution: String,
    /// City of the location code.
    pub city: String,
    /// Branch name; may be empty for primary offices.
    #[serde(default)]
    pub branch: String,
}

impl ReferenceEntry {
    pub fn new(
        institution: impl Into<String>,
        city: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            institution: institution.into(),
            city: city.into(),
            branch: branch.into(),
        }
    }
}

/// One country's reference data, keyed by the full formatted code.
pub type ReferenceDataset = HashMap<String, ReferenceEntry>;
