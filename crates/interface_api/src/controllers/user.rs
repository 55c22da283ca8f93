//! User dispatch
//!
//! Thin passthroughs to `UserService`: any absent argument yields `None`
//! or `false` without reaching the service.

use domain_user::{User, UserService};

/// Controller for user operations
#[derive(Debug, Clone, Default)]
pub struct UserController {
    user_service: UserService,
}

impl UserController {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }

    /// Creates a user, or `None` if an argument is absent or invalid
    pub fn create_user(&self, username: Option<&str>, email: Option<&str>) -> Option<User> {
        match (username, email) {
            (Some(username), Some(email)) => self.user_service.create_user(username, email),
            _ => None,
        }
    }

    pub fn update_user_email(&self, user: Option<&mut User>, new_email: Option<&str>) -> bool {
        match (user, new_email) {
            (Some(user), Some(new_email)) => self.user_service.update_user_email(user, new_email),
            _ => false,
        }
    }

    pub fn activate_user(&self, user: Option<&mut User>) -> bool {
        user.map(|user| self.user_service.activate_user(user))
            .unwrap_or(false)
    }

    pub fn deactivate_user(&self, user: Option<&mut User>) -> bool {
        user.map(|user| self.user_service.deactivate_user(user))
            .unwrap_or(false)
    }

    pub fn is_user_active(&self, user: Option<&User>) -> bool {
        user.map(|user| self.user_service.is_user_active(user))
            .unwrap_or(false)
    }

    pub fn validate_email(&self, email: Option<&str>) -> bool {
        email.map(|email| self.user_service.is_valid_email(email))
            .unwrap_or(false)
    }

    pub fn validate_username(&self, username: Option<&str>) -> bool {
        username.map(|username| self.user_service.is_valid_username(username))
            .unwrap_or(false)
    }
}
