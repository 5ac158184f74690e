//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::ports::PortError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    let CoreError::Validation(msg) = error;
    assert_eq!(msg, "Invalid input");
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_port_error_display_includes_context() {
    let error = PortError::ServiceUnavailable {
        service: "claims-backend".to_string(),
    };
    assert!(error.is_transient());
    assert_eq!(error.to_string(), "Service unavailable: claims-backend");

    let unauthorized = PortError::Unauthorized {
        message: "token expired".to_string(),
    };
    assert!(!unauthorized.is_transient());
    assert!(unauthorized.to_string().contains("token expired"));
}
