//! Manual export/import of the budget
//!
//! The export payload is the same serialized form as the persistence slot,
//! so an exported file can be re-imported on any platform.

pub mod json;

pub use json::{export_json, import_json};
