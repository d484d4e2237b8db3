//! SWIFT/BIC Code Crate
//!
//! Parses, validates and enriches ISO 9362 bank identifier codes.
//!
//! # Overview
//!
//! Given a raw string, compact (`DEUTDEFF500`) or formatted (`deut-de-ff 500`),
//! the crate:
//! - normalizes it (strips spaces, tabs, newlines and hyphens, uppercases)
//! - checks it against the ISO 9362 layout, collecting every violation
//! - decomposes a valid code into bank, country, location and branch codes
//! - resolves the country name and, from per-country reference data, the
//!   bank, city and branch names
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   raw string     | --> |  SwiftCodeParser |
//! +------------------+     +------------------+
//!                                  |
//!                   +--------------+--------------+
//!                   v                             v
//!          +------------------+          +---------------------+
//!          | CountryNameLookup|          | ReferenceDataSource |
//!          | (CountryRegistry)|          | (FileReferenceStore,|
//!          +------------------+          |  InMemory, None)    |
//!                                        +---------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    SwiftCode     |  (immutable result)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`SwiftCodeParser`] - Runs the pipeline against two lookup collaborators
//! - [`SwiftCode`] - The parsed result with string accessors
//! - [`ViolationKind`] - Why a code is structurally invalid
//! - [`ReferenceEntry`] / [`ReferenceDataset`] - Per-country reference names
//! - [`SwiftCodeError`] - Failures of the lookup machinery (not of the input)

pub mod config;
pub mod errors;
pub mod lookup;
pub mod models;
pub mod parser;

pub use config::ReferenceDataConfig;
pub use errors::{Result, SwiftCodeError};

// Re-export all public types from models
pub use models::{
    CodeComponents, Enrichment, LocationKind, ReferenceDataset, ReferenceEntry,
    SwiftCode, ViolationKind,
};

// Re-export lookup types
pub use lookup::{
    is_known_country_code, CountryNameLookup, CountryRegistry, FileReferenceStore,
    InMemoryReferenceStore, NoReferenceData, ReferenceDataSource,
};

pub use parser::SwiftCodeParser;
