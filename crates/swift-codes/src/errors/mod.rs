//! Error types for the swift-codes crate.
//!
//! Malformed codes are *not* errors: they are reported through
//! [`ViolationKind`](crate::models::ViolationKind) on the parsed result.
//! [`SwiftCodeError`] only covers failures of the surrounding machinery,
//! chiefly a reference dataset that exists but cannot be loaded.

use thiserror::Error;

/// Type alias for Result using the crate error type.
pub type Result<T> = std::result::Result<T, SwiftCodeError>;

/// Errors that can occur while parsing or enriching SWIFT/BIC codes.
#[derive(Error, Debug)]
pub enum SwiftCodeError {
    /// A reference dataset exists for the country but could not be read or parsed.
    /// Parsing cannot complete for codes of this country until the source is fixed.
    #[error("Reference data unavailable for {country_code}: {message}")]
    LookupUnavailable {
        /// The ISO 3166-1 alpha-2 country code being looked up
        country_code: String,
        /// What went wrong while loading the dataset
        message: String,
    },

    /// A configuration value could not be interpreted.
    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SwiftCodeError {
    /// Creates a [`SwiftCodeError::LookupUnavailable`] for the given country.
    pub fn lookup_unavailable(country_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LookupUnavailable {
            country_code: country_code.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error aborts parsing of a structurally valid code.
    ///
    /// Configuration errors happen before any code is parsed, so they are
    /// not considered fatal for an individual parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use swift_codes::errors::SwiftCodeError;
    ///
    /// let error = SwiftCodeError::lookup_unavailable("DE", "truncated file");
    /// assert!(error.is_fatal());
    ///
    /// let error = SwiftCodeError::InvalidConfig("SWIFT_REFERENCE_CACHE=maybe".into());
    /// assert!(!error.is_fatal());
    /// ```
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::LookupUnavailable { .. } | Self::Io(_) | Self::Json(_) => true,
            Self::InvalidConfig(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unavailable_is_fatal() {
        let error = SwiftCodeError::lookup_unavailable("FR", "permission denied");
        assert!(error.is_fatal());
    }

    #[test]
    fn test_invalid_config_is_not_fatal() {
        let error = SwiftCodeError::InvalidConfig("bad".to_string());
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SwiftCodeError = json_err.into();
        assert!(matches!(error, SwiftCodeError::Json(_)));
        assert!(error.is_fatal());
    }

    #[test]
    fn test_error_display() {
        let error = SwiftCodeError::lookup_unavailable("DE", "expected value at line 1");
        assert_eq!(
            format!("{}", error),
            "Reference data unavailable for DE: expected value at line 1"
        );

        let error = SwiftCodeError::InvalidConfig("SWIFT_REFERENCE_CACHE=maybe".to_string());
        assert_eq!(
            format!("{}", error),
            "Invalid configuration value: SWIFT_REFERENCE_CACHE=maybe"
        );
    }
}
