//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies and query strings and typed path ids.

mod path;
mod validated;

pub use path::IdPath;
pub use validated::{ValidatedJson, ValidatedQuery};
