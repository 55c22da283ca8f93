//! Tracing Bootstrap Tests
//!
//! Kept in its own test binary because the global subscriber can only be
//! installed once per process.

use interface_api::{init_tracing, ApiError};

/// A second installation reports an error instead of panicking
#[test]
fn test_second_init_is_reported() {
    let _ = init_tracing("debug", false);

    let err = init_tracing("info", true).unwrap_err();

    assert!(matches!(err, ApiError::Telemetry(_)));
}
