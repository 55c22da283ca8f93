//! Tests for the user lifecycle domain

use std::collections::HashSet;

use domain_user::{User, UserError, UserService};
use proptest::prelude::*;

// ============================================================================
// Registration Tests
// ============================================================================

mod registration_tests {
    use super::*;

    /// Verifies a valid registration stores trimmed values
    #[test]
    fn test_create_user_trims_values() {
        let user = UserService::new()
            .create_user("\tbob ", "  bob@example.org")
            .unwrap();

        assert_eq!(user.username(), "bob");
        assert_eq!(user.email(), "bob@example.org");
        assert!(user.is_active());
    }

    /// Verifies invalid usernames yield no user
    #[test]
    fn test_create_user_rejects_username() {
        let service = UserService::new();
        assert!(service.create_user("", "bob@example.org").is_none());
        assert!(service.create_user("ab", "bob@example.org").is_none());
        assert!(service.create_user(&"b".repeat(51), "bob@example.org").is_none());
    }

    /// Verifies invalid emails yield no user
    #[test]
    fn test_create_user_rejects_email() {
        let service = UserService::new();
        assert!(service.create_user("bob", "").is_none());
        assert!(service.create_user("bob", "bob.example.org").is_none());
        assert!(service.create_user("bob", "bob@localhost").is_none());
    }

    /// Verifies register names the failing field
    #[test]
    fn test_register_errors() {
        let service = UserService::new();

        assert!(matches!(
            service.register("bob", "nope"),
            Err(UserError::InvalidEmail(_))
        ));
        assert!(matches!(
            service.register("  ", "bob@example.org"),
            Err(UserError::InvalidUsername(_))
        ));
    }

    /// Verifies every registration gets its own identity
    #[test]
    fn test_registrations_are_distinct_entities() {
        let service = UserService::new();
        let a = service.create_user("carol", "carol@example.org").unwrap();
        let b = service.create_user("carol", "carol@example.org").unwrap();

        assert_ne!(a, b);
        let set: HashSet<User> = [a.clone(), b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    fn create_test_user() -> User {
        UserService::new()
            .create_user("dave", "dave@example.org")
            .unwrap()
    }

    /// Verifies a valid new email replaces the old one, trimmed
    #[test]
    fn test_update_email() {
        let service = UserService::new();
        let mut user = create_test_user();

        assert!(service.update_user_email(&mut user, " dave@new.example "));
        assert_eq!(user.email(), "dave@new.example");
    }

    /// Verifies an invalid email leaves the user unchanged
    #[test]
    fn test_update_email_rejected() {
        let service = UserService::new();
        let mut user = create_test_user();

        assert!(!service.update_user_email(&mut user, "   "));
        assert_eq!(user.email(), "dave@example.org");
    }

    /// Verifies activation state flips both ways
    #[test]
    fn test_activate_and_deactivate() {
        let service = UserService::new();
        let mut user = create_test_user();

        assert!(service.deactivate_user(&mut user));
        assert!(!service.is_user_active(&user));

        assert!(service.activate_user(&mut user));
        assert!(service.is_user_active(&user));

        assert!(service.activate_user(&mut user));
        assert!(service.is_user_active(&user));
    }

    /// Verifies the user serializes with its activation flag
    #[test]
    fn test_json_shape() {
        let user = create_test_user();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["username"], "dave");
        assert_eq!(json["active"], true);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Username validity depends only on the trimmed character count
    #[test]
    fn username_validity_matches_trimmed_length(
        core in "[a-z]{0,60}",
        pad in " {0,5}",
    ) {
        let service = UserService::new();
        let candidate = format!("{}{}{}", pad, core, pad);
        let expected = (3..=50).contains(&core.chars().count());
        prop_assert_eq!(service.is_valid_username(&candidate), expected);
    }

    /// Any local@domain.tld shape is a valid email
    #[test]
    fn simple_addresses_are_valid(
        local in "[a-z0-9]{1,10}",
        domain in "[a-z]{1,10}",
        tld in "[a-z]{2,4}",
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(UserService::new().is_valid_email(&email));
    }
}
