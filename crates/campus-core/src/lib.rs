//! # campus-core
//!
//! Core crate for CampusShare. Contains the configuration schema, typed
//! identifiers, the storage provider trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CampusShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
