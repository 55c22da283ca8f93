//! Core Kernel - Foundational types for the order pricing system
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Money with exact two-digit decimal arithmetic
//! - Rates expressed as decimal fractions
//! - Strongly typed identifiers

pub mod money;
pub mod identifiers;

pub use money::{round2, Money, MoneyError, Rate, MONEY_SCALE};
pub use identifiers::{OrderId, UserId};
