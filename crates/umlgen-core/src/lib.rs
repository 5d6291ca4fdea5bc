//! Umlgen Core Library
//!
//! This library provides the core functionality for generating source code
//! from UML source models using per-language templates.

pub mod config;
pub mod error;
pub mod folder;
pub mod generate;
pub mod handler;
pub mod model;
pub mod panel;
pub mod protocol;
pub mod request;
pub mod templates;
pub mod utils;

pub use crate::{
    config::Config,
    error::{Error, Result},
    folder::{FixedFolderSelector, FolderSelector},
    generate::{generate, Generator},
    handler::CodeGenerationHandler,
    model::{FileModelSource, ModelSource, SourceModel, TypeNames},
    panel::GenerationPanel,
    request::{GenerationMode, GenerationReport, GenerationRequest},
    templates::{Language, TemplateDir, TemplateRenderer},
};
