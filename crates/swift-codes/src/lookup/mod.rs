//! Name lookups used to enrich valid codes.
//!
//! - `traits` - The collaborator interfaces (CountryNameLookup, ReferenceDataSource)
//! - `country_registry` - Built-in ISO 3166-1 country names
//! - `file_store` - Per-country JSON datasets on disk, optionally cached
//! - `memory_store` - In-memory datasets

mod country_registry;
mod file_store;
mod memory_store;
mod traits;

pub use country_registry::{is_known_country_code, CountryRegistry};
pub use file_store::FileReferenceStore;
pub use memory_store::InMemoryReferenceStore;
pub use traits::{CountryNameLookup, NoReferenceData, ReferenceDataSource};
