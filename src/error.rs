//! Error types for Jetcheck operations.
//!
//! This module defines [`JetcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The resolution engine itself never errors: malformed or missing data
//!   degrades to `"unknown"` values that are routed into issues or blockers
//!   in the output report.
//! - `JetcheckError` is reserved for the boundary: unreadable inputs,
//!   unwritable outputs, unsupported tutorial sources.
//! - Boundary failures surface as a single diagnostic line and a non-zero
//!   exit; they never leave a partially written output document behind.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Jetcheck operations.
#[derive(Debug, Error)]
pub enum JetcheckError {
    /// An input document does not exist at the given path.
    #[error("Input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// An input document exists but could not be parsed as JSON.
    #[error("Failed to parse {path}: {message}")]
    InputParseError { path: PathBuf, message: String },

    /// The compatibility matrix is structurally invalid.
    #[error("Invalid compatibility matrix: {message}")]
    InvalidMatrix { message: String },

    /// A tutorial source that the extractor cannot read (URLs, HTML).
    #[error("Unsupported tutorial source: {source_ref}")]
    UnsupportedSource { source_ref: String },

    /// Failed to write an output document.
    #[error("Failed to write {path}: {message}")]
    OutputWriteError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Jetcheck operations.
pub type Result<T> = std::result::Result<T, JetcheckError>;
