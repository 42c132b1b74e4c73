//! # Error Types
//!
//! Structured error types for wb_core. Every failure is reported at the point
//! of first violation with enough context for a caller (human, form layer or
//! API client) to tell which input or configuration value is at fault.
//!
//! ## Example
//!
//! ```rust
//! use wb_core::errors::{WbError, WbResult};
//!
//! fn validate_fuel(fuel_lb: f64) -> WbResult<()> {
//!     if fuel_lb < 0.0 {
//!         return Err(WbError::InvalidInput {
//!             field: "fuel".to_string(),
//!             value: fuel_lb.to_string(),
//!             reason: "Fuel quantity cannot be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wb_core operations
pub type WbResult<T> = Result<T, WbError>;

/// Structured error type for weight-and-balance operations.
///
/// The first four variants make up the engine's taxonomy. The remaining
/// ones belong to the configuration-file layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WbError {
    /// A load request value is out of domain (negative count, negative fuel, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An aircraft or zone referenced by the request is not configured
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// The configuration is structurally broken
    #[error("Invalid configuration at '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Total weight of zero reached a division
    #[error("Division undefined: {context}")]
    DivisionUndefined { context: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl WbError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        WbError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        WbError::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        WbError::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionUndefined error
    pub fn division_undefined(context: impl Into<String>) -> Self {
        WbError::DivisionUndefined {
            context: context.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        WbError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization_error(reason: impl Into<String>) -> Self {
        WbError::SerializationError { reason: reason.into() }
    }

    /// Create a VersionMismatch error
    pub fn version_mismatch(file_version: impl Into<String>, expected_version: impl Into<String>) -> Self {
        WbError::VersionMismatch {
            file_version: file_version.into(),
            expected_version: expected_version.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Nothing in the engine is transient, so this is always false.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WbError::InvalidInput { .. } => "INVALID_INPUT",
            WbError::NotFound { .. } => "NOT_FOUND",
            WbError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            WbError::DivisionUndefined { .. } => "DIVISION_UNDEFINED",
            WbError::FileError { .. } => "FILE_ERROR",
            WbError::SerializationError { .. } => "SERIALIZATION_ERROR",
            WbError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
