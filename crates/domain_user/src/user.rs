//! User entity

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use core_kernel::UserId;

/// A registered user
///
/// New users start active. Two users are the same entity iff their
/// `user_id`s are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    user_id: UserId,
    username: String,
    email: String,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Creates an active user with a fresh identifier
    ///
    /// Values are stored as given; use `UserService::register` to validate
    /// and trim them first.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(UserId::new(), username, email)
    }

    /// Creates an active user with a known identifier
    pub fn with_id(user_id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            email: email.into(),
            active: default_active(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {} ({}, {}, {})",
            self.user_id,
            self.username,
            self.email,
            if self.active { "active" } else { "inactive" }
        )
    }
}
