//! Configuration management for Umlgen code generation.
//!
//! This module defines the `Config` struct holding the settings of a
//! generation run. The configuration can be loaded from a YAML, TOML or JSON
//! file (chosen by extension), created programmatically, or assembled from
//! command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use umlgen_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> umlgen_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("shop.uml.json", "generated");
//! config.multiple = true;
//!
//! // Or load from a config file
//! let config = Config::from_file("umlgen.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::{
    generate::DEFAULT_SINGLE_FILE_STEM,
    request::{GenerationMode, GenerationRequest},
    templates::Language,
};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for a Umlgen generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target language
    #[serde(default)]
    pub language: Language,

    /// Path or URL of the UML source model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Folder generated files are written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_folder: Option<String>,

    /// Generate one file per top-level type instead of a single file
    #[serde(default)]
    pub multiple: bool,

    /// Optional path to the template directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<String>,

    /// File name (without extension) of single-file output
    #[serde(default = "default_single_file_stem")]
    pub single_file_stem: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            model: None,
            output_folder: None,
            multiple: false,
            template_dir: None,
            single_file_stem: default_single_file_stem(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new(model: impl Into<String>, output_folder: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            output_folder: Some(output_folder.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = match ConfigFormat::of(path) {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
        };
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = match ConfigFormat::of(path) {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        };
        fs::write(path, content).await?;
        Ok(())
    }

    /// The generation request described by this configuration
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.language,
            self.output_folder.as_ref().map(PathBuf::from),
            GenerationMode::from_multiple(self.multiple),
        )
    }
}

enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

fn default_single_file_stem() -> String {
    DEFAULT_SINGLE_FILE_STEM.to_string()
}
