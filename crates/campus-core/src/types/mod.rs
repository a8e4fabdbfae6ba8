//! Core type definitions used across the CampusShare workspace.

pub mod id;

pub use id::*;
