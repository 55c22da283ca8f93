//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! order pricing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built orders and configurations, including the
//!   reference pricing scenarios
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for priced orders
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
