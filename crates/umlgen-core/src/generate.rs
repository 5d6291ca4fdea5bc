//! Code generation for Umlgen.
//!
//! [`Generator`] runs one [`GenerationRequest`] against a source model:
//! it resolves reference names, renders the language template and writes
//! the resulting files. [`generate`] is the config-driven entry point used
//! by the CLI.

// Internal imports (std, crate)
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    config::Config,
    error::{Error, Result},
    model::{annotate, ModelSource, SourceModel, TypeNames},
    request::{GenerationMode, GenerationReport, GenerationRequest},
    templates::{CompiledTemplate, TemplateRenderer},
    utils::is_safe_file_stem,
};

// External imports (alphabetized)
use futures::future::join_all;

/// File stem used in single-file mode unless configured otherwise
pub const DEFAULT_SINGLE_FILE_STEM: &str = "test";

/// Runs generation requests against a shared template renderer
#[derive(Debug, Clone)]
pub struct Generator {
    renderer: Arc<TemplateRenderer>,
    single_file_stem: String,
}

impl Generator {
    pub fn new(renderer: Arc<TemplateRenderer>) -> Self {
        Self {
            renderer,
            single_file_stem: DEFAULT_SINGLE_FILE_STEM.to_string(),
        }
    }

    /// Use `stem` as the file name of single-file output
    pub fn with_single_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.single_file_stem = stem.into();
        self
    }

    pub fn renderer(&self) -> &Arc<TemplateRenderer> {
        &self.renderer
    }

    /// Fetch the current model from `source` and generate from it
    pub async fn generate_from<S: ModelSource>(
        &self,
        source: &S,
        request: &GenerationRequest,
    ) -> Result<GenerationReport> {
        let model = source.source_model().await;
        self.generate(model.as_ref(), request).await
    }

    /// Generate files for `request`.
    ///
    /// A missing model, a missing output folder or a template that cannot be
    /// loaded fail the whole request before anything is written. Failures of
    /// individual files are collected in the returned report and do not stop
    /// the remaining files.
    pub async fn generate(
        &self,
        model: Option<&SourceModel>,
        request: &GenerationRequest,
    ) -> Result<GenerationReport> {
        let model = model.ok_or(Error::ModelUnavailable)?;
        let folder = request
            .folder
            .as_deref()
            .filter(|folder| !folder.as_os_str().is_empty())
            .ok_or(Error::NoOutputFolder)?;
        let template = self.renderer.compile(request.language).await?;

        let names = TypeNames::from_model(model);
        let annotated = SourceModel::new(annotate(model.as_json(), &names));
        log::debug!(
            "Generating {} ({:?}) for {} named types into {}",
            request.language,
            request.mode,
            names.len(),
            folder.display()
        );

        let mut report = GenerationReport::default();
        let outputs = match request.mode {
            GenerationMode::Single => {
                self.render_single(&template, &annotated, folder, &mut report)
            }
            GenerationMode::Multiple => {
                Self::render_per_type(&template, &annotated, &names, folder, &mut report)
            }
        };

        if !outputs.is_empty() {
            tokio::fs::create_dir_all(folder).await?;
        }

        let writes = outputs.into_iter().map(|(path, content)| async move {
            let result = tokio::fs::write(&path, content).await;
            (path, result)
        });
        for (path, result) in join_all(writes).await {
            match result {
                Ok(()) => {
                    log::debug!("Wrote {}", path.display());
                    report.written.push(path);
                }
                Err(e) => report.fail(path.display().to_string(), e),
            }
        }

        log::info!(
            "Generated {} file(s) with {} failure(s)",
            report.count(),
            report.failures.len()
        );
        Ok(report)
    }

    fn render_single(
        &self,
        template: &CompiledTemplate,
        annotated: &SourceModel,
        folder: &Path,
        report: &mut GenerationReport,
    ) -> Vec<(PathBuf, String)> {
        if !is_safe_file_stem(&self.single_file_stem) {
            report.fail(&self.single_file_stem, "not a valid file name");
            return Vec::new();
        }

        let path = folder.join(template.language().file_name(&self.single_file_stem));
        match template.render(annotated.as_json()) {
            Ok(content) => vec![(path, content)],
            Err(e) => {
                report.fail(path.display().to_string(), e);
                Vec::new()
            }
        }
    }

    fn render_per_type(
        template: &CompiledTemplate,
        annotated: &SourceModel,
        names: &TypeNames,
        folder: &Path,
        report: &mut GenerationReport,
    ) -> Vec<(PathBuf, String)> {
        let mut outputs = Vec::new();
        // lowercased so case-insensitive file systems cannot merge two outputs
        let mut taken = HashSet::new();

        for entry in names.iter() {
            if !entry.kind.is_generated() {
                log::debug!("Skipping {} {}", entry.kind, entry.name);
                report.skipped.push(entry.name.clone());
                continue;
            }
            if !is_safe_file_stem(&entry.name) {
                report.fail(&entry.name, "type name is not a valid file name");
                continue;
            }
            let file_name = template.language().file_name(&entry.name);
            if !taken.insert(file_name.to_lowercase()) {
                report.fail(&entry.name, "duplicate output file name");
                continue;
            }

            let fragment = annotated.with_only_element(&entry.id);
            match template.render(fragment.as_json()) {
                Ok(content) => outputs.push((folder.join(file_name), content)),
                Err(e) => report.fail(&entry.name, e),
            }
        }

        outputs
    }
}

/// Load the model and templates named by `config` and run its request
pub async fn generate(config: &Config) -> Result<GenerationReport> {
    let location = config
        .model
        .as_deref()
        .ok_or_else(|| Error::config("no model location configured"))?;
    let model = SourceModel::from_location(location).await?;

    let template_dir = config.template_dir.as_ref().map(PathBuf::from);
    let renderer = Arc::new(TemplateRenderer::discover(template_dir)?);
    let generator = Generator::new(renderer).with_single_file_stem(&config.single_file_stem);

    generator.generate(Some(&model), &config.request()).await
}
