//! Generation requests and their results

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::templates::Language;

/// Whether to write one combined file or one file per top-level type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Render the whole model once into a single file
    #[default]
    Single,
    /// Render every generated top-level type into its own file
    Multiple,
}

impl GenerationMode {
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple {
            Self::Multiple
        } else {
            Self::Single
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple)
    }
}

/// One user-initiated generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub language: Language,
    /// Output folder; generation is refused while it is `None`
    pub folder: Option<PathBuf>,
    pub mode: GenerationMode,
}

impl GenerationRequest {
    pub fn new(language: Language, folder: Option<PathBuf>, mode: GenerationMode) -> Self {
        Self {
            language,
            folder,
            mode,
        }
    }

    /// Single-file Java request into `folder`
    pub fn single(folder: impl Into<PathBuf>) -> Self {
        Self::new(Language::Java, Some(folder.into()), GenerationMode::Single)
    }

    /// One-file-per-type Java request into `folder`
    pub fn multiple(folder: impl Into<PathBuf>) -> Self {
        Self::new(Language::Java, Some(folder.into()), GenerationMode::Multiple)
    }
}

/// A file that could not be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    /// Output path or type name the failure belongs to
    pub target: String,
    pub reason: String,
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.reason)
    }
}

/// Outcome of a generation request that passed its preconditions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written, in request order
    pub written: Vec<PathBuf>,
    /// Types that are never generated (primitive types)
    pub skipped: Vec<String>,
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of files written
    pub fn count(&self) -> usize {
        self.written.len()
    }

    pub(crate) fn fail(&mut self, target: impl Into<String>, reason: impl fmt::Display) {
        let failure = GenerationFailure {
            target: target.into(),
            reason: reason.to_string(),
        };
        log::error!("Generation failed for {}", failure);
        self.failures.push(failure);
    }
}
