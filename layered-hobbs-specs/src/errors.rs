//! Error types for the fixture harness.
//!
//! This module defines error types for parsing, fixture loading,
//! and assertion failures.

use thiserror::Error;

/// Errors that can occur while loading or checking fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture, name table or config file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error reading a file from disk.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// A resolution did not match what the fixture expects.
    #[error("assertion failed: {message}")]
    Assertion { message: String },
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;

impl SpecError {
    pub(crate) fn load(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        SpecError::Load {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
