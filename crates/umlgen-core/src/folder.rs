//! Output folder selection.

use std::path::PathBuf;

/// Asks the user for a single output folder.
///
/// Implementations are blocking (they wait on the user) and return `None`
/// when the user cancels.
pub trait FolderSelector: Send + Sync {
    fn pick_folder(&self) -> Option<PathBuf>;
}

/// Always answers with the same folder, or always cancels
#[derive(Debug, Clone, Default)]
pub struct FixedFolderSelector {
    folder: Option<PathBuf>,
}

impl FixedFolderSelector {
    pub fn new(folder: Option<PathBuf>) -> Self {
        Self { folder }
    }

    pub fn cancelled() -> Self {
        Self { folder: None }
    }
}

impl FolderSelector for FixedFolderSelector {
    fn pick_folder(&self) -> Option<PathBuf> {
        self.folder.clone()
    }
}
