//! SWIFT/BIC data models
//!
//! This module contains the data types produced and consumed by the parser:
//! - `types` - ISO 9362 segment layout constants
//! - `violation` - Structural violation kinds (ViolationKind)
//! - `components` - Decomposed code segments (CodeComponents, LocationKind)
//! - `reference` - Per-country reference data (ReferenceEntry, ReferenceDataset)
//! - `swift_code` - The parsed and enriched result (SwiftCode, Enrichment)

mod components;
mod reference;
mod swift_code;
mod types;
mod violation;

pub use components::{CodeComponents, LocationKind};
pub(crate) use components::{BRANCH_START, COUNTRY_START, LOCATION_START};
pub use reference::{ReferenceDataset, ReferenceEntry};
pub use swift_code::{Enrichment, SwiftCode};
pub use types::{
    BANK_CODE_LEN, BRANCH_CODE_LEN, COUNTRY_CODE_LEN, LOCATION_CODE_LEN, MAX_LEN, MIN_LEN,
    PRIMARY_OFFICE_BRANCH,
};
pub use violation::ViolationKind;
