//! Template directory resolution

use std::io;
use std::path::{Path, PathBuf};

use super::Language;

/// Environment variable overriding the template directory
pub const TEMPLATE_DIR_ENV: &str = "UMLGEN_TEMPLATE_DIR";

/// Directory holding one template file per language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDir {
    root_dir: PathBuf,
}

impl TemplateDir {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Returns a displayable version of the template path
    pub fn display(&self) -> std::path::Display<'_> {
        self.root_dir.display()
    }

    /// Resolve the template directory, preferring `custom_dir` when given
    pub fn discover(custom_dir: Option<&Path>) -> io::Result<Self> {
        if let Some(dir) = custom_dir {
            if !dir.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Template directory not found: {}", dir.display()),
                ));
            }
            return Ok(Self::new(dir));
        }

        Self::find_template_dir().map(Self::new).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not find template directory in any standard location",
            )
        })
    }

    /// Find the template directory by checking standard locations
    fn find_template_dir() -> Option<PathBuf> {
        // 1. Environment variable
        if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
            let path = PathBuf::from(dir);
            if path.is_dir() {
                return Some(path);
            }
        }

        // 2. Current directory
        let templates_dir = PathBuf::from("templates");
        if templates_dir.is_dir() {
            return Some(templates_dir);
        }

        // 3. Workspace checkout (development builds)
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        if let Some(templates_dir) = manifest_dir
            .ancestors()
            .map(|dir| dir.join("templates"))
            .find(|dir| dir.is_dir())
        {
            return Some(templates_dir);
        }

        // 4. User's home directory
        if let Some(home_dir) = dirs::home_dir() {
            let templates_dir = home_dir.join(".umlgen").join("templates");
            if templates_dir.is_dir() {
                return Some(templates_dir);
            }
        }

        None
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Path of the template file for `language`
    pub fn template_path(&self, language: Language) -> PathBuf {
        self.root_dir.join(language.template_file_name())
    }

    pub fn exists(&self) -> bool {
        self.root_dir.is_dir()
    }
}
