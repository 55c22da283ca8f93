//! User domain errors

use thiserror::Error;

/// Errors that can occur in the user domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Username is blank or its trimmed length is outside [3, 50]
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Email is blank or lacks an '@' or a '.'
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

impl UserError {
    pub fn invalid_username(reason: impl Into<String>) -> Self {
        UserError::InvalidUsername(reason.into())
    }

    pub fn invalid_email(reason: impl Into<String>) -> Self {
        UserError::InvalidEmail(reason.into())
    }
}
