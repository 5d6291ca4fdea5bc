//! State of the code generation panel.
//!
//! The panel collects the target language, the output mode and the output
//! folder, turns them into request actions and reacts to the responses. It
//! holds no I/O of its own; a front end renders it and forwards actions.
//!
//! ```
//! use std::path::PathBuf;
//! use umlgen_core::panel::GenerationPanel;
//! use umlgen_core::protocol::{Action, SelectFolderActionResponse};
//!
//! let mut panel = GenerationPanel::new();
//! assert!(panel.generate_request().is_none());
//!
//! panel.on_action(&Action::SelectFolderResponse(SelectFolderActionResponse {
//!     response_id: String::new(),
//!     folder_path: Some(PathBuf::from("out")),
//! }));
//! assert!(panel.generate_request().is_some());
//! ```

use std::path::Path;

use crate::{
    protocol::{Action, LanguageOptions},
    templates::Language,
};

/// Result of the last generation request shown by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    Succeeded { count: usize },
    Failed { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPanel {
    options: LanguageOptions,
    generation_disabled: bool,
    status: Option<PanelStatus>,
}

impl Default for GenerationPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationPanel {
    /// A panel with no folder chosen; generating is disabled until one is
    pub fn new() -> Self {
        Self {
            options: LanguageOptions::default(),
            generation_disabled: true,
            status: None,
        }
    }

    pub fn options(&self) -> &LanguageOptions {
        &self.options
    }

    pub fn folder(&self) -> Option<&Path> {
        self.options.folder.as_deref()
    }

    pub fn language(&self) -> Language {
        self.options.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.options.language = language;
    }

    pub fn is_multiple(&self) -> bool {
        self.options.multiple
    }

    pub fn toggle_multiple(&mut self) {
        self.options.multiple = !self.options.multiple;
    }

    pub fn is_generation_disabled(&self) -> bool {
        self.generation_disabled
    }

    pub fn status(&self) -> Option<PanelStatus> {
        self.status
    }

    pub fn select_folder_request(&self) -> Action {
        Action::request_select_folder()
    }

    /// The generation request for the current options, or `None` while disabled
    pub fn generate_request(&self) -> Option<Action> {
        if self.generation_disabled {
            return None;
        }
        Some(Action::request_code_generation(self.options.clone()))
    }

    /// Apply a response action to the panel state
    pub fn on_action(&mut self, action: &Action) {
        match action {
            Action::SelectFolderResponse(response) => {
                // an empty path is treated as a cancelled pick
                self.options.folder = response
                    .folder_path
                    .clone()
                    .filter(|folder| !folder.as_os_str().is_empty());
                self.generation_disabled = self.options.folder.is_none();
            }
            Action::CodeGenerationResponse(response) => {
                self.status = Some(if response.success {
                    PanelStatus::Succeeded {
                        count: response.count,
                    }
                } else {
                    PanelStatus::Failed {
                        count: response.count,
                    }
                });
            }
            Action::RequestCodeGeneration(_) | Action::RequestSelectFolder(_) => {}
        }
    }

    /// One-line summary for display
    pub fn status_line(&self) -> String {
        let folder = self
            .folder()
            .map_or_else(|| "None".to_string(), |f| f.display().to_string());
        let mode = if self.is_multiple() {
            "multiple files"
        } else {
            "single file"
        };
        let last = match self.status {
            None => "not generated yet".to_string(),
            Some(PanelStatus::Succeeded { count }) => format!("generated {} file(s)", count),
            Some(PanelStatus::Failed { count }) => {
                format!("generation failed ({} file(s) written)", count)
            }
        };
        format!(
            "Language: {} | Selected Folder: {} | Mode: {} | {}",
            self.language(),
            folder,
            mode,
            last
        )
    }
}
