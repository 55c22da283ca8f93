//! API error handling

use domain_order::OrderError;
use thiserror::Error;

/// Errors surfaced by the dispatch layer
///
/// Invalid orders are not errors at this layer; the controllers report
/// them as "no result". What remains is configuration trouble and
/// unexpected domain failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Domain error: {0}")]
    Domain(#[from] OrderError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl ApiError {
    /// True if this wraps an engine-level invalid input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ApiError::Domain(err) if err.is_invalid_input())
    }
}
