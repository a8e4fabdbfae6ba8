//! Credential configuration.

use serde::{Deserialize, Serialize};

/// Password policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Minimum zxcvbn strength score (0-4). Zero disables the check.
    #[serde(default)]
    pub password_min_score: u8,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            password_min_score: 0,
        }
    }
}

fn default_password_min() -> usize {
    8
}
