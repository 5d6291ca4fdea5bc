//! Error handling for the Umlgen code generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! # Examples
//!
//! ```
//! use umlgen_core::error::{Error, Result};
//!
//! fn needs_folder(folder: Option<&str>) -> Result<&str> {
//!     folder.ok_or(Error::NoOutputFolder)
//! }
//!
//! assert!(needs_folder(None).is_err());
//! ```

use thiserror::Error;

/// Result type for Umlgen generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Umlgen generation operations
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

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// HTTP error while fetching a model
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Model error
    #[error("Model error: {0}")]
    Model(String),

    /// No model was available when generation was requested
    #[error("no source model is available")]
    ModelUnavailable,

    /// Generation was requested without an output folder
    #[error("no output folder was selected")]
    NoOutputFolder,

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
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new model error
    pub fn model<S: Into<String>>(msg: S) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
