//! # Error Types
//!
//! Structured error types for roof_core. Every failure is caller-correctable:
//! the host fixes the offending field and recomputes. Errors serialize to JSON
//! so a form can highlight the field named in the payload.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::errors::{RoofError, RoofResult};
//!
//! fn validate_width(width_mm: f64) -> RoofResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(RoofError::invalid_geometry(
//!             "internal_width_mm",
//!             width_mm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_width(-1.0).unwrap_err().error_code(), "INVALID_GEOMETRY");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roof_core operations
pub type RoofResult<T> = Result<T, RoofError>;

/// Structured error type for roof calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RoofError {
    /// A scalar input is out of its accepted range (pitch, price)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Non-positive or contradictory dimensions (e.g. negative ridge length)
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// Target finished height is not a finite positive number
    #[error("Invalid target height: {value} - {reason}")]
    InvalidTarget { value: String, reason: String },

    /// Rafter spacing or truss thickness cannot produce a truss count
    #[error("Invalid spacing for '{field}': {value} - {reason}")]
    InvalidSpacing {
        field: String,
        value: String,
        reason: String,
    },
}

impl RoofError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RoofError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RoofError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidTarget error
    pub fn invalid_target(value: impl Into<String>, reason: impl Into<String>) -> Self {
        RoofError::InvalidTarget {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSpacing error
    pub fn invalid_spacing(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RoofError::InvalidSpacing {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, if the error refers to one
    pub fn field(&self) -> Option<&str> {
        match self {
            RoofError::InvalidInput { field, .. }
            | RoofError::InvalidGeometry { field, .. }
            | RoofError::InvalidSpacing { field, .. } => Some(field),
            RoofError::InvalidTarget { .. } => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RoofError::InvalidInput { .. } => "INVALID_INPUT",
            RoofError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            RoofError::InvalidTarget { .. } => "INVALID_TARGET",
            RoofError::InvalidSpacing { .. } => "INVALID_SPACING",
        }
    }
}
