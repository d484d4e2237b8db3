use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{MAX_LEN, MIN_LEN};

/// A structural reason a candidate code is not a valid SWIFT/BIC code.
///
/// Violations are collected, not raised: a single input may carry several of
/// them, reported in the order the checks run (declaration order below).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Fewer than 8 characters after normalization.
    TooShort,
    /// More than 11 characters after normalization.
    TooLong,
    /// Contains a character outside `[A-Z0-9]`.
    BadChars,
    /// Does not match bank(4 letters) + country(2 letters) + location(2) + branch(3, optional).
    BadFormat,
}

impl ViolationKind {
    /// All kinds, in check order.
    pub const ALL: [ViolationKind; 4] = [
        ViolationKind::TooShort,
        ViolationKind::TooLong,
        ViolationKind::BadChars,
        ViolationKind::BadFormat,
    ];

    /// Stable symbolic name, matching the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooShort => "TOO_SHORT",
            Self::TooLong => "TOO_LONG",
            Self::BadChars => "BAD_CHARS",
            Self::BadFormat => "BAD_FORMAT",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "code is shorter than {} characters", MIN_LEN),
            Self::TooLong => write!(f, "code is longer than {} characters", MAX_LEN),
            Self::BadChars => write!(f, "code contains characters other than A-Z and 0-9"),
            Self::BadFormat => write!(
                f,
                "code does not match the bank/country/location/branch layout"
            ),
        }
    }
}
