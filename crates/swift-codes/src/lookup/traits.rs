//! Lookup traits for the swift-codes crate.
//!
//! Defines the two collaborators the enricher consults for a valid code:
//! country-name resolution and the per-country reference dataset.

use std::sync::Arc;

use crate::errors::Result;
use crate::models::ReferenceDataset;

/// Resolves an ISO 3166-1 alpha-2 country code to a display name.
pub trait CountryNameLookup: Send + Sync {
    /// Returns the country name, or `None` if the code is not recognized.
    ///
    /// An unknown code is a normal outcome, not an error.
    fn country_name(&self, iso_code: &str) -> Option<String>;
}

/// Supplies per-country reference datasets keyed by formatted code.
pub trait ReferenceDataSource: Send + Sync {
    /// Fetch the dataset for a country.
    ///
    /// # Arguments
    /// * `iso_code` - Uppercased ISO 3166-1 alpha-2 country code
    ///
    /// # Returns
    /// * `Ok(Some(dataset))` - The country has reference data
    /// * `Ok(None)` - No dataset exists for this country
    /// * `Err(LookupUnavailable)` - A dataset exists but could not be loaded
    fn dataset(&self, iso_code: &str) -> Result<Option<Arc<ReferenceDataset>>>;
}

impl<T: CountryNameLookup + ?Sized> CountryNameLookup for Arc<T> {
    fn country_name(&self, iso_code: &str) -> Option<String> {
        (**self).country_name(iso_code)
    }
}

impl<T: ReferenceDataSource + ?Sized> ReferenceDataSource for Arc<T> {
    fn dataset(&self, iso_code: &str) -> Result<Option<Arc<ReferenceDataset>>> {
        (**self).dataset(iso_code)
    }
}

/// Reference source with no data for any country.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReferenceData;

impl ReferenceDataSource for NoReferenceData {
    fn dataset(&self, _iso_code: &str) -> Result<Option<Arc<ReferenceDataset>>> {
        Ok(None)
    }
}
