use log::debug;

use crate::errors::Result;
use crate::lookup::{CountryNameLookup, ReferenceDataSource};
use crate::models::Enrichment;

/// Resolve display names for a valid code.
///
/// Unknown countries, missing datasets and missing keys all leave the
/// corresponding fields absent. The only error is a dataset that exists but
/// cannot be loaded.
pub fn enrich(
    formatted_code: &str,
    country_code: &str,
    countries: &dyn CountryNameLookup,
    reference: &dyn ReferenceDataSource,
) -> Result<Enrichment> {
    let mut enrichment = Enrichment {
        country_name: countries.country_name(country_code),
        ..Default::default()
    };

    let Some(dataset) = reference.dataset(&country_code.to_uppercase())? else {
        return Ok(enrichment);
    };

    match dataset.get(formatted_code) {
        Some(entry) => {
            enrichment.bank_name = Some(entry.institution.clone());
            enrichment.location_name = Some(entry.city.clone());
            enrichment.branch_name = Some(entry.branch.clone());
        }
        None => debug!("{} not found in {} reference data", formatted_code, country_code),
    }

    Ok(enrichment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SwiftCodeError;
    use crate::lookup::{CountryRegistry, InMemoryReferenceStore, NoReferenceData};
    use crate::models::{ReferenceDataset, ReferenceEntry};
    use std::sync::Arc;

    struct BrokenSource;

    impl ReferenceDataSource for BrokenSource {
        fn dataset(&self, iso_code: &str) -> Result<Option<Arc<ReferenceDataset>>> {
            Err(SwiftCodeError::lookup_unavailable(iso_code, "disk on fire"))
        }
    }

    fn make_store() -> InMemoryReferenceStore {
        InMemoryReferenceStore::new().with_entry(
            "DE",
            "DEUTDEFF500",
            ReferenceEntry::new("Deutsche Bank", "Frankfurt am Main", "Filiale 500"),
        )
    }

    #[test]
    fn test_full_match() {
        let enrichment = enrich("DEUTDEFF500", "DE", &CountryRegistry, &make_store()).unwrap();

        assert_eq!(enrichment.country_name.as_deref(), Some("Germany"));
        assert_eq!(enrichment.bank_name.as_deref(), Some("Deutsche Bank"));
        assert_eq!(enrichment.location_name.as_deref(), Some("Frankfurt am Main"));
        assert_eq!(enrichment.branch_name.as_deref(), Some("Filiale 500"));
    }

    #[test]
    fn test_key_is_full_code_not_prefix() {
        let enrichment = enrich("DEUTDEFF", "DE", &CountryRegistry, &make_store()).unwrap();

        assert_eq!(enrichment.country_name.as_deref(), Some("Germany"));
        assert!(enrichment.bank_name.is_none());
        assert!(enrichment.location_name.is_none());
        assert!(enrichment.branch_name.is_none());
    }

    #[test]
    fn test_no_dataset() {
        let enrichment = enrich("BNPAFRPP", "FR", &CountryRegistry, &NoReferenceData).unwrap();

        assert_eq!(enrichment.country_name.as_deref(), Some("France"));
        assert!(enrichment.bank_name.is_none());
    }

    #[test]
    fn test_unknown_country_is_silent() {
        let enrichment = enrich("ABCDXXFF", "XX", &CountryRegistry, &NoReferenceData).unwrap();
        assert!(enrichment.is_empty());
    }

    #[test]
    fn test_unavailable_dataset_propagates() {
        let result = enrich("DEUTDEFF", "DE", &CountryRegistry, &BrokenSource);
        assert!(matches!(
            result,
            Err(SwiftCodeError::LookupUnavailable { .. })
        ));
    }
}
