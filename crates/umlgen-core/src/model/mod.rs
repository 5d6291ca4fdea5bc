//! UML source model loading and utilities.
//!
//! A source model is a nested JSON object describing a UML package. Its
//! top-level elements live in the `packagedElement` array; every element has
//! an `id`, a `name` and a `$type` discriminator. Elements point at each other
//! through `{ "$ref": "<id>" }` objects instead of embedding.
//!
//! # Examples
//!
//! ```no_run
//! use umlgen_core::model::SourceModel;
//! use umlgen_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let model = SourceModel::from_location("model.uml.json").await?;
//! for element in model.elements() {
//!     println!("{:?} {:?}", element.kind(), element.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod annotate;
pub mod element;
pub mod source;
pub mod type_names;

// Internal imports (std, crate)
use std::path::Path;

pub use annotate::annotate;
pub use element::{ElementKind, PackagedElement};
pub use source::{FileModelSource, ModelSource};
pub use type_names::{TypeEntry, TypeNames};

// External imports (alphabetized)
use serde::Serialize;
use serde_json::Value as JsonValue;
use tokio::fs;

/// Field holding the top-level elements of a package
pub const PACKAGED_ELEMENT_KEY: &str = "packagedElement";
/// Discriminator field of an element
pub const TYPE_KEY: &str = "$type";
/// Reference field pointing at another element's id
pub const REF_KEY: &str = "$ref";
pub const ID_KEY: &str = "id";
pub const NAME_KEY: &str = "name";

/// A UML source model as supplied by the model server
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SourceModel {
    /// The raw JSON value of the model
    pub json: JsonValue,
}

impl SourceModel {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Load a model from a file path or an HTTP(S) URL
    pub async fn from_location<S: AsRef<str>>(location: S) -> crate::Result<Self> {
        let location = location.as_ref();

        if location.starts_with("http://") || location.starts_with("https://") {
            let url = url::Url::parse(location).map_err(|e| {
                crate::Error::model(format!("Invalid model URL {}: {}", location, e))
            })?;
            return Self::from_url(&url).await;
        }

        Self::from_file(location).await
    }

    /// Load a model from a file (supports both JSON and YAML)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            crate::Error::model(format!(
                "Failed to parse model at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Fetch a model from a URL (supports both JSON and YAML bodies)
    pub async fn from_url(url: &url::Url) -> crate::Result<Self> {
        let response = reqwest::get(url.clone()).await?;

        if !response.status().is_success() {
            return Err(crate::Error::model(format!(
                "Failed to fetch model from {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let content = response.text().await?;
        Self::parse_content(&content).map_err(|e| {
            crate::Error::model(format!("Failed to parse model from {}: {}", url, e))
        })
    }

    /// Parse content as either JSON or YAML. The root must be an object.
    pub fn parse_content(content: &str) -> Result<Self, String> {
        let json: JsonValue = match serde_json::from_str(content) {
            Ok(json) => json,
            Err(_) => serde_yaml::from_str(content)
                .map_err(|_| "content is neither valid JSON nor YAML".to_string())?,
        };

        if !json.is_object() {
            return Err("model root must be an object".to_string());
        }
        Ok(Self { json })
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.json
    }

    /// Name of the package, if it has one
    pub fn name(&self) -> Option<&str> {
        self.json.get(NAME_KEY)?.as_str()
    }

    /// Top-level packaged elements (empty when the model has none)
    pub fn packaged_elements(&self) -> &[JsonValue] {
        self.json
            .get(PACKAGED_ELEMENT_KEY)
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Typed views over the top-level packaged elements
    pub fn elements(&self) -> impl Iterator<Item = PackagedElement<'_>> {
        self.packaged_elements().iter().map(PackagedElement::new)
    }

    /// Deep copy of this model whose `packagedElement` holds only the element with `id`.
    ///
    /// When several elements share `id` the last one is kept, matching [`TypeNames`].
    pub fn with_only_element(&self, id: &str) -> Self {
        let mut json = self.json.clone();
        if let Some(JsonValue::Array(elements)) = json.get_mut(PACKAGED_ELEMENT_KEY) {
            let kept = elements
                .iter()
                .rposition(|element| PackagedElement::new(element).id() == Some(id));
            let only = match kept {
                Some(index) => vec![elements.swap_remove(index)],
                None => Vec::new(),
            };
            *elements = only;
        }
        Self { json }
    }
}
