use std::str::FromStr;

use serde::Serialize;

use super::components::{CodeComponents, LocationKind};
use super::violation::ViolationKind;
use crate::errors::SwiftCodeError;
use crate::parser::SwiftCodeParser;

/// Names resolved for a valid code. Every field is optional; a miss is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

impl Enrichment {
    /// True when nothing could be resolved.
    pub fn is_empty(&self) -> bool {
        self.country_name.is_none()
            && self.bank_name.is_none()
            && self.location_name.is_none()
            && self.branch_name.is_none()
    }
}

/// The outcome of processing one input string.
///
/// Built once by [`SwiftCodeParser`] and read-only afterwards. Accessors never
/// return `None`: an absent value reads as the empty string.
///
/// # Example
///
/// ```
/// use swift_codes::SwiftCode;
///
/// let code: SwiftCode = "deut-de-ff-500".parse().unwrap();
/// assert!(code.is_valid());
/// assert_eq!(code.formatted_code(), "DEUTDEFF500");
/// assert_eq!(code.branch_code(), "500");
/// assert_eq!(code.country_name(), "Germany");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiftCode {
    formatted_code: String,

    #[serde(flatten)]
    components: Option<CodeComponents>,

    #[serde(flatten)]
    enrichment: Enrichment,

    violations: Vec<ViolationKind>,
}

impl SwiftCode {
    /// Result for an input that failed at least one structural check.
    pub(crate) fn invalid(formatted_code: String, violations: Vec<ViolationKind>) -> Self {
        debug_assert!(!violations.is_empty());
        Self {
            formatted_code,
            components: None,
            enrichment: Enrichment::default(),
            violations,
        }
    }

    /// Result for a structurally valid input.
    pub(crate) fn valid(
        formatted_code: String,
        components: CodeComponents,
        enrichment: Enrichment,
    ) -> Self {
        Self {
            formatted_code,
            components: Some(components),
            enrichment,
            violations: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Structural violations, in check order. Empty iff the code is valid.
    pub fn violations(&self) -> &[ViolationKind] {
        &self.violations
    }

    /// The normalized (noise-stripped, uppercased) input.
    pub fn formatted_code(&self) -> &str {
        &self.formatted_code
    }

    /// Alias of [`formatted_code`](Self::formatted_code).
    pub fn formatted_swift(&self) -> &str {
        &self.formatted_code
    }

    pub fn bank_code(&self) -> &str {
        self.component(|c| &c.bank_code)
    }

    pub fn country_code(&self) -> &str {
        self.component(|c| &c.country_code)
    }

    pub fn location_code(&self) -> &str {
        self.component(|c| &c.location_code)
    }

    pub fn branch_code(&self) -> &str {
        self.component(|c| &c.branch_code)
    }

    pub fn country_name(&self) -> &str {
        self.enrichment.country_name.as_deref().unwrap_or_default()
    }

    pub fn bank_name(&self) -> &str {
        self.enrichment.bank_name.as_deref().unwrap_or_default()
    }

    pub fn location_name(&self) -> &str {
        self.enrichment.location_name.as_deref().unwrap_or_default()
    }

    pub fn branch_name(&self) -> &str {
        self.enrichment.branch_name.as_deref().unwrap_or_default()
    }

    /// Decomposed segments, present only for valid codes.
    pub fn components(&self) -> Option<&CodeComponents> {
        self.components.as_ref()
    }

    /// Resolved names, all absent for invalid codes.
    pub fn enrichment(&self) -> &Enrichment {
        &self.enrichment
    }

    /// The 8-character institution-level code, or empty if invalid.
    pub fn bic8(&self) -> String {
        self.components.as_ref().map(CodeComponents::bic8).unwrap_or_default()
    }

    /// True for a valid code addressing the primary office.
    pub fn is_primary_office(&self) -> bool {
        self.components
            .as_ref()
            .is_some_and(CodeComponents::is_primary_office)
    }

    /// Location classification, present only for valid codes.
    pub fn location_kind(&self) -> Option<LocationKind> {
        self.components.as_ref().map(CodeComponents::location_kind)
    }

    fn component<F>(&self, field: F) -> &str
    where
        F: Fn(&CodeComponents) -> &String,
    {
        self.components.as_ref().map(|c| field(c).as_str()).unwrap_or_default()
    }
}

impl FromStr for SwiftCode {
    type Err = SwiftCodeError;

    /// Parses with the built-in country names and no reference data.
    ///
    /// Malformed input still succeeds; check [`SwiftCode::is_valid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwiftCodeParser::default().parse(s)
    }
}
