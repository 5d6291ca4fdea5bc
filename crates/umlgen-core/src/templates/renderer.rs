//! Template compilation and rendering

// Internal imports (std, crate)
use std::{collections::HashMap, path::PathBuf, sync::Arc};

use crate::error::{Error, Result};

use super::{testers, Language, TemplateDir};

// External imports (alphabetized)
use serde_json::Value as JsonValue;
use tera::{Context, Tera};
use tokio::sync::RwLock;

/// A compiled template for one language
#[derive(Debug)]
pub struct CompiledTemplate {
    language: Language,
    tera: Tera,
}

impl CompiledTemplate {
    /// Compile template `source` for `language` with the model testers registered
    pub fn compile(language: Language, source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        testers::register(&mut tera);
        tera.add_raw_template(language.as_str(), source)
            .map_err(|e| {
                Error::template(format!(
                    "Failed to compile {} template: {}",
                    language,
                    tera_error_chain(&e)
                ))
            })?;
        Ok(Self { language, tera })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Render against `data`, which must be a JSON object
    pub fn render(&self, data: &JsonValue) -> Result<String> {
        if !data.is_object() {
            return Err(Error::template(format!(
                "Render data for {} template must be a JSON object",
                self.language
            )));
        }
        let context = Context::from_serialize(data)?;

        self.tera
            .render(self.language.as_str(), &context)
            .map_err(|e| {
                log::error!("Rendering {} template failed: {}", self.language, e);
                Error::template(format!(
                    "Failed to render {} template: {}",
                    self.language,
                    tera_error_chain(&e)
                ))
            })
    }
}

/// Loads templates from a [`TemplateDir`] and caches them per language
#[derive(Debug)]
pub struct TemplateRenderer {
    template_dir: TemplateDir,
    cache: RwLock<HashMap<Language, Arc<CompiledTemplate>>>,
}

impl TemplateRenderer {
    pub fn new(template_dir: TemplateDir) -> Self {
        Self {
            template_dir,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create a renderer over `template_dir`, or over the discovered default location
    pub fn discover(template_dir: Option<PathBuf>) -> Result<Self> {
        let template_dir = TemplateDir::discover(template_dir.as_deref())?;
        log::debug!("Using templates from: {}", template_dir.display());
        Ok(Self::new(template_dir))
    }

    pub fn template_dir(&self) -> &TemplateDir {
        &self.template_dir
    }

    /// Get the compiled template for `language`, reading and compiling it on first use
    pub async fn compile(&self, language: Language) -> Result<Arc<CompiledTemplate>> {
        if let Some(compiled) = self.cache.read().await.get(&language) {
            return Ok(Arc::clone(compiled));
        }

        let path = self.template_dir.template_path(language);
        log::debug!("Compiling {} template from {}", language, path.display());
        let source = tokio::fs::read_to_string(&path).await.map_err(|e| {
            Error::template(format!(
                "Failed to read {} template at {}: {}",
                language,
                path.display(),
                e
            ))
        })?;
        let compiled = Arc::new(CompiledTemplate::compile(language, &source)?);

        let mut cache = self.cache.write().await;
        let entry = cache.entry(language).or_insert(compiled);
        Ok(Arc::clone(entry))
    }

    /// Compile (if needed) and render in one step
    pub async fn render(&self, language: Language, data: &JsonValue) -> Result<String> {
        self.compile(language).await?.render(data)
    }

    /// Drop all cached templates so the next request reads them from disk again
    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }

    pub async fn is_cached(&self, language: Language) -> bool {
        self.cache.read().await.contains_key(&language)
    }
}

/// Tera hides the interesting part of an error in its source chain
fn tera_error_chain(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
