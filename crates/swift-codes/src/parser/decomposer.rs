use crate::models::{
    CodeComponents, BANK_CODE_LEN, BRANCH_START, COUNTRY_CODE_LEN, COUNTRY_START,
    LOCATION_CODE_LEN, LOCATION_START,
};

/// Slice a validated code into its fixed-width segments.
///
/// Callers must only pass codes with no violations; the slices are then
/// guaranteed to fall on ASCII boundaries. The branch is empty for a BIC8.
pub fn decompose(normalized: &str) -> CodeComponents {
    CodeComponents {
        bank_code: segment(normalized, 0, BANK_CODE_LEN),
        country_code: segment(normalized, COUNTRY_START, COUNTRY_CODE_LEN),
        location_code: segment(normalized, LOCATION_START, LOCATION_CODE_LEN),
        branch_code: normalized
            .get(BRANCH_START..)
            .unwrap_or_default()
            .to_string(),
    }
}

fn segment(code: &str, start: usize, len: usize) -> String {
    code.get(start..start + len).unwrap_or_default().to_string()
}
