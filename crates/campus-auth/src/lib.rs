//! # campus-auth
//!
//! Credential handling for CampusShare: Argon2id password hashing and the
//! password policy applied at registration. Sessions and tokens are not
//! issued; login returns the user summary.

pub mod password;

pub use password::{PasswordHasher, PasswordValidator};
