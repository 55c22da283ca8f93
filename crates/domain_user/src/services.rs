//! User domain services
//!
//! Stateless validation and lifecycle operations for users. Nothing here
//! interacts with order pricing.
//!
//! # Rules
//!
//! - Email: non-blank after trimming, contains `@` and `.`
//! - Username: trimmed length between 3 and 50 characters inclusive

use tracing::debug;

use crate::error::UserError;
use crate::user::User;

/// Minimum trimmed username length, in characters
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum trimmed username length, in characters
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Service for user registration and lifecycle changes
#[derive(Debug, Clone, Copy, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Returns true if the email is non-blank and contains both `@` and `.`
    pub fn is_valid_email(&self, email: &str) -> bool {
        !email.trim().is_empty() && email.contains('@') && email.contains('.')
    }

    /// Returns true if the trimmed username length is within [3, 50]
    pub fn is_valid_username(&self, username: &str) -> bool {
        let length = username.trim().chars().count();
        (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length)
    }

    /// Registers a new active user with trimmed username and email
    ///
    /// # Errors
    ///
    /// Returns `UserError::InvalidUsername` or `UserError::InvalidEmail`;
    /// the username is checked first.
    pub fn register(&self, username: &str, email: &str) -> Result<User, UserError> {
        if !self.is_valid_username(username) {
            return Err(UserError::invalid_username(format!(
                "'{}' must be {} to {} characters after trimming",
                username, MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
            )));
        }

        if !self.is_valid_email(email) {
            return Err(UserError::invalid_email(format!(
                "'{}' must contain '@' and '.'",
                email
            )));
        }

        let user = User::new(username.trim(), email.trim());
        debug!(user_id = %user.user_id(), "Registered user");
        Ok(user)
    }

    /// Creates a user, or `None` if either value is invalid
    pub fn create_user(&self, username: &str, email: &str) -> Option<User> {
        match self.register(username, email) {
            Ok(user) => Some(user),
            Err(err) => {
                debug!(error = %err, "User not created");
                None
            }
        }
    }

    /// Replaces the email with its trimmed form if it is valid
    ///
    /// Returns false and leaves the user unchanged otherwise.
    pub fn update_user_email(&self, user: &mut User, new_email: &str) -> bool {
        if !self.is_valid_email(new_email) {
            return false;
        }

        user.set_email(new_email.trim());
        true
    }

    pub fn activate_user(&self, user: &mut User) -> bool {
        user.set_active(true);
        true
    }

    pub fn deactivate_user(&self, user: &mut User) -> bool {
        user.set_active(false);
        true
    }

    pub fn is_user_active(&self, user: &User) -> bool {
        user.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        let service = UserService::new();
        assert!(service.is_valid_email("a@b.c"));
        assert!(!service.is_valid_email(""));
        assert!(!service.is_valid_email("   "));
        assert!(!service.is_valid_email("ab.c"));
        assert!(!service.is_valid_email("a@bc"));
    }

    #[test]
    fn test_username_length_bounds() {
        let service = UserService::new();
        assert!(!service.is_valid_username("ab"));
        assert!(service.is_valid_username("abc"));
        assert!(service.is_valid_username(&"x".repeat(50)));
        assert!(!service.is_valid_username(&"x".repeat(51)));
        assert!(service.is_valid_username("  abc  "));
        assert!(!service.is_valid_username("  ab  "));
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        let service = UserService::new();
        assert!(service.is_valid_username("ééé"));
        assert!(service.is_valid_username(&"é".repeat(50)));
    }

    #[test]
    fn test_register_trims() {
        let user = UserService::new()
            .register("  alice  ", " alice@example.com ")
            .unwrap();
        assert_eq!(user.username(), "alice");
        assert_eq!(user.email(), "alice@example.com");
        assert!(user.is_active());
    }

    #[test]
    fn test_register_reports_username_first() {
        let err = UserService::new().register("x", "bad").unwrap_err();
        assert!(matches!(err, UserError::InvalidUsername(_)));
    }
}
