//! umlgen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

mod prompt;
mod watch;

// Internal imports (std, crate)
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;
use umlgen_core::{
    CodeGenerationHandler, Config, FileModelSource, FixedFolderSelector, GenerationReport,
    Generator, Language, TemplateRenderer,
};

#[derive(Parser)]
#[command(name = "umlgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate source files from a UML model
    Generate {
        /// Path or URL of the UML source model (JSON or YAML)
        #[arg(long)]
        model: Option<String>,
        /// Configuration file (YAML, TOML or JSON); flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
        /// Target language
        #[arg(long, value_enum)]
        language: Option<Language>,
        /// Folder to write generated files to
        #[arg(long)]
        folder: Option<PathBuf>,
        /// Write one file per class, interface and enumeration
        #[arg(long)]
        multiple: bool,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// File name (without extension) used in single-file mode
        #[arg(long)]
        single_file_stem: Option<String>,
        /// Regenerate whenever the model or a template changes
        #[arg(long)]
        watch: bool,
    },
    /// Choose the output folder and mode interactively, then generate
    Panel {
        /// Path or URL of the UML source model (JSON or YAML)
        #[arg(long)]
        model: String,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
    /// Answer JSON actions read line by line from stdin
    Serve {
        /// Path or URL of the UML source model (JSON or YAML)
        #[arg(long)]
        model: String,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Folder returned for folder selection requests (cancelled when absent)
        #[arg(long)]
        folder: Option<PathBuf>,
    },
    /// Write a configuration file with default values
    InitConfig {
        /// Where to write the configuration (format chosen by extension)
        path: PathBuf,
        /// Model location to put in the configuration
        #[arg(long)]
        model: Option<String>,
        /// Output folder to put in the configuration
        #[arg(long)]
        folder: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `serve` can use stdout for responses
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            model,
            config,
            language,
            folder,
            multiple,
            template_dir,
            single_file_stem,
            watch,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(model) = model {
                config.model = Some(model);
            }
            if let Some(language) = language {
                config.language = language;
            }
            if let Some(folder) = folder {
                config.output_folder = Some(folder.to_string_lossy().to_string());
            }
            if multiple {
                config.multiple = true;
            }
            if let Some(dir) = template_dir {
                config.template_dir = Some(dir.to_string_lossy().to_string());
            }
            if let Some(stem) = single_file_stem {
                config.single_file_stem = stem;
            }

            if config.model.is_none() {
                anyhow::bail!("No model given; pass --model or set `model` in the config");
            }
            if config.output_folder.is_none() {
                anyhow::bail!("No output folder given; pass --folder or set `output_folder` in the config");
            }

            if watch {
                watch::run(&config).await?;
            } else {
                let report = umlgen_core::generate(&config)
                    .await
                    .context("Code generation failed")?;
                print_report(&report)?;
            }
        }
        Commands::Panel {
            model,
            template_dir,
        } => {
            let handler = CodeGenerationHandler::new(
                generator(template_dir)?,
                FileModelSource::new(model),
                prompt::DialoguerFolderSelector,
            );
            prompt::run_panel(&handler).await?;
        }
        Commands::Serve {
            model,
            template_dir,
            folder,
        } => {
            let handler = CodeGenerationHandler::new(
                generator(template_dir)?,
                FileModelSource::new(model),
                FixedFolderSelector::new(folder),
            );

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut stdout = tokio::io::stdout();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                match handler.handle_json(&line).await {
                    Ok(Some(reply)) => {
                        stdout.write_all(reply.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!("Ignoring malformed action: {}", e),
                }
            }
        }
        Commands::InitConfig {
            path,
            model,
            folder,
        } => {
            let config = Config {
                model,
                output_folder: folder.map(|f| f.to_string_lossy().to_string()),
                ..Config::default()
            };
            config
                .save(&path)
                .await
                .with_context(|| format!("Failed to write config {}", path.display()))?;
            println!("Wrote configuration to {}", path.display());
        }
    }
    Ok(())
}

fn generator(template_dir: Option<PathBuf>) -> anyhow::Result<Generator> {
    let renderer =
        TemplateRenderer::discover(template_dir).context("Failed to locate templates")?;
    Ok(Generator::new(Arc::new(renderer)))
}

/// Print what was generated; failures turn into an error exit
pub(crate) fn print_report(report: &GenerationReport) -> anyhow::Result<()> {
    for path in &report.written {
        println!("Generated {}", path.display());
    }
    for name in &report.skipped {
        tracing::debug!("Skipped primitive type {}", name);
    }
    for failure in &report.failures {
        eprintln!("Failed {}", failure);
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} file(s) could not be generated",
            report.failures.len()
        );
    }
    println!("✅ Generated {} file(s)", report.count());
    Ok(())
}
