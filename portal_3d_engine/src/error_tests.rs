//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Engine not initialized".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Engine not initialized"));
}

#[test]
fn test_invalid_level_display() {
    let err = Error::InvalidLevel("sector has 2 walls".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Invalid level: sector has 2 walls");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("Wall key not found".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("Wall key not found"));
}

#[test]
fn test_lock_poisoned_display() {
    let err = Error::LockPoisoned("level".to_string());
    assert_eq!(format!("{}", err), "Lock poisoned: level");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidLevel("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::InvalidLevel("a".to_string()));
    assert!(debug1.contains("InvalidLevel"));

    let debug2 = format!("{:?}", Error::LockPoisoned("b".to_string()));
    assert!(debug2.contains("LockPoisoned"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::InvalidResource("res".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::InvalidLevel("dangling portal".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    let result = outer();
    assert!(matches!(result, Err(Error::InvalidLevel(_))));
}
