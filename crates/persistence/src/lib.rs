//! JSON file adapter for the nutri-core store port.
pub mod error;
pub mod json_file;

pub use error::{PersistenceError, Result};
pub use json_file::{DataDir, JsonFile};
