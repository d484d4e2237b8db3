/// Length of the bank (institution) code segment.
pub const BANK_CODE_LEN: usize = 4;

/// Length of the country code segment.
pub const COUNTRY_CODE_LEN: usize = 2;

/// Length of the location code segment.
pub const LOCATION_CODE_LEN: usize = 2;

/// Length of the optional branch code segment.
pub const BRANCH_CODE_LEN: usize = 3;

/// Shortest valid code (BIC8): bank + country + location.
pub const MIN_LEN: usize = BANK_CODE_LEN + COUNTRY_CODE_LEN + LOCATION_CODE_LEN;

/// Longest valid code (BIC11): BIC8 + branch.
pub const MAX_LEN: usize = MIN_LEN + BRANCH_CODE_LEN;

/// Branch code reserved for the primary office.
pub const PRIMARY_OFFICE_BRANCH: &str = "XXX";
