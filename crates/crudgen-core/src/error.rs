//! Error handling for the crudgen code generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! Validation errors are kept apart from every other kind so the HTTP boundary
//! can answer them with `400 Bad Request` while everything else maps to `500`.
//!
//! # Examples
//!
//! ```
//! use crudgen_core::error::{Error, Result};
//!
//! fn check_entity(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::validation("entity must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_entity("").unwrap_err().is_validation());
//! ```

use thiserror::Error;

/// Result type for crudgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for crudgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request rejected before any side effect
    #[error("{0}")]
    Validation(String),

    /// Request body has the wrong shape (not an object, wrong value types)
    #[error("Malformed request: {0}")]
    Malformed(String),

    /// Template error
    #[error("Template error: {0}")]
    Template(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new malformed-request error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error was raised while validating a request
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
