//! Registration and login.

pub mod service;

pub use service::{RegisterUser, UserService, normalize_email};
