//! Error types for the Portal3D engine
//!
//! Geometry itself never fails: invalid primitives are represented by NaN
//! sentinels and predicates simply return `false`. This module covers the
//! fallible surface around it (level editing and validation, engine
//! singleton access).

use std::fmt;

/// Result type for Portal3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Portal3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Initialization failed (engine singleton, level registration)
    InitializationFailed(String),

    /// Level graph is malformed (bad vertex index, dangling portal, ...)
    InvalidLevel(String),

    /// A key or index does not refer to a live resource
    InvalidResource(String),

    /// A global lock was poisoned by a panicking thread
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidLevel(msg) => write!(f, "Invalid level: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
