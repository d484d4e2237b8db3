//! The normalize → validate → decompose → enrich pipeline.

use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::lookup::{CountryNameLookup, CountryRegistry, NoReferenceData, ReferenceDataSource};
use crate::models::SwiftCode;

use super::decomposer::decompose;
use super::enricher::enrich;
use super::normalizer::normalize;
use super::validator::validate;

/// Parses raw strings into [`SwiftCode`] results.
///
/// Holds the two lookup collaborators; parsing itself is stateless, so one
/// parser can be shared across threads.
///
/// # Example
///
/// ```
/// use swift_codes::{InMemoryReferenceStore, ReferenceEntry, SwiftCodeParser, ViolationKind};
///
/// let reference = InMemoryReferenceStore::new().with_entry(
///     "DE",
///     "DEUTDEFF500",
///     ReferenceEntry::new("Deutsche Bank", "Frankfurt am Main", "Filiale 500"),
/// );
/// let parser = SwiftCodeParser::with_builtin_countries(reference);
///
/// let code = parser.parse("DEUT DE FF 500").unwrap();
/// assert_eq!(code.bank_name(), "Deutsche Bank");
/// assert_eq!(code.country_name(), "Germany");
///
/// let bad = parser.parse("AB").unwrap();
/// assert_eq!(bad.violations(), &[ViolationKind::TooShort, ViolationKind::BadFormat]);
/// ```
#[derive(Clone)]
pub struct SwiftCodeParser {
    countries: Arc<dyn CountryNameLookup>,
    reference: Arc<dyn ReferenceDataSource>,
}

impl SwiftCodeParser {
    pub fn new<C, R>(countries: C, reference: R) -> Self
    where
        C: CountryNameLookup + 'static,
        R: ReferenceDataSource + 'static,
    {
        Self {
            countries: Arc::new(countries),
            reference: Arc::new(reference),
        }
    }

    /// Parser using the built-in ISO 3166-1 country names.
    pub fn with_builtin_countries<R>(reference: R) -> Self
    where
        R: ReferenceDataSource + 'static,
    {
        Self::new(CountryRegistry, reference)
    }

    /// Parse one raw code.
    ///
    /// Malformed input is reported through [`SwiftCode::violations`], never as
    /// an error. `Err` only means reference data for a valid code's country
    /// exists but could not be loaded.
    pub fn parse(&self, raw: &str) -> Result<SwiftCode> {
        self.parse_opt(Some(raw))
    }

    /// Like [`parse`](Self::parse); absent input is treated as empty.
    pub fn parse_opt(&self, raw: Option<&str>) -> Result<SwiftCode> {
        let formatted_code = normalize(raw);

        let violations = validate(&formatted_code);
        if !violations.is_empty() {
            return Ok(SwiftCode::invalid(formatted_code, violations));
        }

        let components = decompose(&formatted_code);
        let enrichment = enrich(
            &formatted_code,
            &components.country_code,
            self.countries.as_ref(),
            self.reference.as_ref(),
        )?;
        debug!(
            "Parsed {} (country: {:?}, bank: {:?})",
            formatted_code, enrichment.country_name, enrichment.bank_name
        );

        Ok(SwiftCode::valid(formatted_code, components, enrichment))
    }

    /// Parse several codes, preserving input order.
    ///
    /// Stops at the first reference data failure.
    pub fn parse_batch<I, S>(&self, inputs: I) -> Result<Vec<SwiftCode>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|raw| self.parse(raw.as_ref()))
            .collect()
    }
}

impl Default for SwiftCodeParser {
    /// Built-in country names, no reference data.
    fn default() -> Self {
        Self::new(CountryRegistry, NoReferenceData)
    }
}
