//! Borrow requests and their resolution.

pub mod service;

pub use service::LendingService;
