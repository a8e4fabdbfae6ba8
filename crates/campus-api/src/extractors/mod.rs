//! Custom Axum extractors and path helpers.

pub mod json;
pub mod path;

pub use json::ValidatedJson;
pub use path::parse_id;
