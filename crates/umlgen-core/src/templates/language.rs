//! Target languages and their template/extension table.
//!
//! Each language maps to a template file in the template directory and to the
//! extension of the files it produces.
//!
//! # Examples
//!
//! ```
//! use umlgen_core::templates::Language;
//! use std::str::FromStr;
//!
//! let language = Language::from_str("java").unwrap();
//! assert_eq!(language, Language::Java);
//! assert_eq!(language.extension(), "java");
//! assert_eq!(language.template_file_name(), "java.tera");
//!
//! // The default language is Java
//! assert_eq!(Language::default(), Language::Java);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// File extension of template sources
pub const TEMPLATE_EXTENSION: &str = "tera";

/// Supported target languages
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

impl Language {
    /// Returns the language identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
        }
    }

    /// Extension of generated files, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Java => "java",
        }
    }

    /// Name of the template file inside the template directory
    pub fn template_file_name(&self) -> String {
        format!("{}.{}", self.as_str(), TEMPLATE_EXTENSION)
    }

    /// Output file name for a generated type or model
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }

    /// Returns an iterator over all supported languages
    pub fn all() -> impl Iterator<Item = Self> {
        [Language::Java].iter().copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
