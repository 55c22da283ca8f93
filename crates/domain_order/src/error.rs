//! Order domain errors
//!
//! This module defines all error types that can occur within the
//! order pricing domain.

use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the order domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The order cannot be priced as given
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Discount configuration failed validation
    #[error("Invalid discount configuration: {0}")]
    InvalidConfiguration(String),

    /// Financial calculation error
    #[error("Financial error: {0}")]
    Financial(#[from] MoneyError),
}

impl OrderError {
    /// Creates an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        OrderError::InvalidInput(reason.into())
    }

    /// Creates an invalid configuration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        OrderError::InvalidConfiguration(reason.into())
    }

    /// Returns true for the engine-level rejection of an unpriceable order
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, OrderError::InvalidInput(_))
    }
}
