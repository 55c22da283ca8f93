//! User Lifecycle Domain
//!
//! Registration, contact validation, and activation state for users.
//!
//! # Example
//!
//! ```rust
//! use domain_user::UserService;
//!
//! let service = UserService::new();
//! let mut user = service.create_user(" alice ", "alice@example.com").unwrap();
//!
//! assert_eq!(user.username(), "alice");
//! assert!(service.deactivate_user(&mut user));
//! assert!(!service.is_user_active(&user));
//! ```

pub mod user;
pub mod error;
pub mod services;

pub use user::User;
pub use error::UserError;
pub use services::{UserService, MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};
