//! Regenerate on changes to the model file or the template directory

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use umlgen_core::{
    Config, FileModelSource, GenerationRequest, Generator, TemplateRenderer,
};

/// Generate once, then again after every relevant file system event.
/// Runs until the process is interrupted.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let location = config
        .model
        .clone()
        .context("No model location configured")?;
    if location.starts_with("http://") || location.starts_with("https://") {
        anyhow::bail!("--watch needs a local model file, got {}", location);
    }
    let model_path = std::fs::canonicalize(&location)
        .with_context(|| format!("Model file {} not found", location))?;

    let renderer = TemplateRenderer::discover(config.template_dir.as_ref().map(PathBuf::from))
        .context("Failed to locate templates")?;
    let template_root = std::fs::canonicalize(renderer.template_dir().root_dir())
        .unwrap_or_else(|_| renderer.template_dir().root_dir().to_path_buf());
    let generator =
        Generator::new(Arc::new(renderer)).with_single_file_stem(&config.single_file_stem);
    let source = FileModelSource::new(location);
    let request = config.request();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        // the receiver only goes away on shutdown
        let _ = tx.send(res);
    })?;
    // Editors often replace the file, so watch its directory instead
    let model_dir = model_path.parent().unwrap_or(Path::new("."));
    watcher.watch(model_dir, RecursiveMode::NonRecursive)?;
    watcher.watch(&template_root, RecursiveMode::Recursive)?;

    regenerate(&generator, &source, &request).await;
    tracing::info!(
        "Watching {} and {} for changes",
        model_path.display(),
        template_root.display()
    );

    while let Some(res) = rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Watch error: {}", e);
                continue;
            }
        };
        if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
            continue;
        }

        let templates_changed = event.paths.iter().any(|p| p.starts_with(&template_root));
        let model_changed = event.paths.iter().any(|p| p == &model_path);
        if templates_changed {
            tracing::info!("Templates changed, reloading");
            generator.renderer().clear().await;
        }
        if templates_changed || model_changed {
            regenerate(&generator, &source, &request).await;
        }
    }
    Ok(())
}

async fn regenerate(generator: &Generator, source: &FileModelSource, request: &GenerationRequest) {
    match generator.generate_from(source, request).await {
        Ok(report) => {
            if let Err(e) = crate::print_report(&report) {
                tracing::error!("{}", e);
            }
        }
        Err(e) => tracing::error!("Code generation failed: {}", e),
    }
}
