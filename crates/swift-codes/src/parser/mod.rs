//! SWIFT/BIC parsing.
//!
//! ```text
//! raw ──► normalize ──► validate ──┬── violations ──► SwiftCode (invalid)
//!                                  │
//!                                  └── none ──► decompose ──► enrich ──► SwiftCode (valid)
//! ```
//!
//! Each stage is exposed on its own; [`SwiftCodeParser`] runs them in order.

mod decomposer;
mod enricher;
mod normalizer;
mod pipeline;
mod validator;

pub use decomposer::decompose;
pub use enricher::enrich;
pub use normalizer::normalize;
pub use pipeline::SwiftCodeParser;
pub use validator::validate;
