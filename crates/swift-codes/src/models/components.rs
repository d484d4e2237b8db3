use serde::{Deserialize, Serialize};

use super::types::{BANK_CODE_LEN, COUNTRY_CODE_LEN, MIN_LEN, PRIMARY_OFFICE_BRANCH};

/// The fixed-width segments of a structurally valid code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeComponents {
    /// Institution code, 4 letters.
    pub bank_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// Location code, 2 alphanumerics.
    pub location_code: String,
    /// Branch code, 3 alphanumerics, or empty for a BIC8.
    pub branch_code: String,
}

impl CodeComponents {
    /// The 8-character institution-level code (bank + country + location).
    pub fn bic8(&self) -> String {
        let mut out = String::with_capacity(MIN_LEN);
        out.push_str(&self.bank_code);
        out.push_str(&self.country_code);
        out.push_str(&self.location_code);
        out
    }

    /// True when the code addresses the primary office (no branch, or `XXX`).
    pub fn is_primary_office(&self) -> bool {
        self.branch_code.is_empty() || self.branch_code == PRIMARY_OFFICE_BRANCH
    }

    /// Classifies the location code by its second character.
    pub fn location_kind(&self) -> LocationKind {
        LocationKind::from_location_code(&self.location_code)
    }
}

/// Participant classification encoded in the second location character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationKind {
    /// `0` - test and training code, not connected to the live network.
    Test,
    /// `1` - passive participant.
    PassiveParticipant,
    /// `2` - reverse billing, the receiver pays.
    ReverseBilling,
    Standard,
}

impl LocationKind {
    pub fn from_location_code(location_code: &str) -> Self {
        match location_code.chars().nth(1) {
            Some('0') => Self::Test,
            Some('1') => Self::PassiveParticipant,
            Some('2') => Self::ReverseBilling,
            _ => Self::Standard,
        }
    }
}

// Segment offsets, shared with the decomposer.
pub(crate) const COUNTRY_START: usize = BANK_CODE_LEN;
pub(crate) const LOCATION_START: usize = BANK_CODE_LEN + COUNTRY_CODE_LEN;
pub(crate) const BRANCH_START: usize = MIN_LEN;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_components(location: &str, branch: &str) -> CodeComponents {
        CodeComponents {
            bank_code: "DEUT".to_string(),
            country_code: "DE".to_string(),
            location_code: location.to_string(),
            branch_code: branch.to_string(),
        }
    }

    #[test]
    fn test_bic8() {
        assert_eq!(make_components("FF", "500").bic8(), "DEUTDEFF");
    }

    #[test]
    fn test_primary_office() {
        assert!(make_components("FF", "").is_primary_office());
        assert!(make_components("FF", "XXX").is_primary_office());
        assert!(!make_components("FF", "500").is_primary_office());
    }

    #[test]
    fn test_location_kind() {
        assert_eq!(make_components("F0", "").location_kind(), LocationKind::Test);
        assert_eq!(
            make_components("F1", "").location_kind(),
            LocationKind::PassiveParticipant
        );
        assert_eq!(
            make_components("F2", "").location_kind(),
            LocationKind::ReverseBilling
        );
        assert_eq!(make_components("FF", "").location_kind(), LocationKind::Standard);
    }
}
