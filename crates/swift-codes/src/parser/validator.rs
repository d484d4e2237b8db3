//! Structural validation.
//!
//! Every check runs on every input so the caller sees all violations at once.
//! Checks, in reporting order:
//! - length below the BIC8 minimum
//! - length above the BIC11 maximum
//! - characters outside `[A-Z0-9]`
//! - segment layout (letters for bank and country, alphanumerics after)

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{
    ViolationKind, BANK_CODE_LEN, BRANCH_CODE_LEN, COUNTRY_CODE_LEN, LOCATION_CODE_LEN, MAX_LEN,
    MIN_LEN,
};

lazy_static! {
    static ref LAYOUT: Regex = Regex::new(&format!(
        r"^[A-Z]{{{}}}[A-Z]{{{}}}[A-Z0-9]{{{}}}(?:[A-Z0-9]{{{}}})?$",
        BANK_CODE_LEN, COUNTRY_CODE_LEN, LOCATION_CODE_LEN, BRANCH_CODE_LEN
    ))
    .expect("layout pattern must compile");
}

/// Validate a normalized code.
///
/// Returns the violations in check order; an empty vector means valid.
pub fn validate(normalized: &str) -> Vec<ViolationKind> {
    let mut violations = Vec::new();
    let len = normalized.chars().count();

    check_min_length(len, &mut violations);
    check_max_length(len, &mut violations);
    check_charset(normalized, &mut violations);
    check_layout(normalized, &mut violations);

    if !violations.is_empty() {
        debug!("Rejected code {:?}: {:?}", normalized, violations);
    }
    violations
}

fn check_min_length(len: usize, violations: &mut Vec<ViolationKind>) {
    if len < MIN_LEN {
        violations.push(ViolationKind::TooShort);
    }
}

fn check_max_length(len: usize, violations: &mut Vec<ViolationKind>) {
    if len > MAX_LEN {
        violations.push(ViolationKind::TooLong);
    }
}

fn check_charset(normalized: &str, violations: &mut Vec<ViolationKind>) {
    if !normalized
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        violations.push(ViolationKind::BadChars);
    }
}

fn check_layout(normalized: &str, violations: &mut Vec<ViolationKind>) {
    if !LAYOUT.is_match(normalized) {
        violations.push(ViolationKind::BadFormat);
    }
}
