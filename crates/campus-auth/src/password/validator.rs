//! Password policy enforcement for new passwords.

use campus_core::config::AuthConfig;
use campus_core::error::AppError;
use zxcvbn::Score;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
    /// Minimum zxcvbn score; `None` disables the entropy check.
    min_score: Option<Score>,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let min_score = match config.password_min_score {
            0 => None,
            1 => Some(Score::One),
            2 => Some(Score::Two),
            3 => Some(Score::Three),
            _ => Some(Score::Four),
        };
        Self {
            min_length: config.password_min_length,
            min_score,
        }
    }

    /// Validates a password against all configured policies.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if let Some(min_score) = self.min_score {
            let estimate = zxcvbn::zxcvbn(password, &[]);
            if estimate.score() < min_score {
                return Err(AppError::validation(
                    "Password is too weak. Please use a stronger password with more entropy.",
                ));
            }
        }

        Ok(())
    }
}
