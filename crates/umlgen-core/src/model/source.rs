//! Access to the current source model.

use std::future::Future;

use super::SourceModel;

/// Supplies the current UML source model at call time.
///
/// `None` means no model is available (no open diagram, model server
/// unreachable, unreadable file); callers treat that as a failed request.
pub trait ModelSource: Send + Sync {
    fn source_model(&self) -> impl Future<Output = Option<SourceModel>> + Send;
}

/// Reads the model from a file path or URL on every request
#[derive(Debug, Clone)]
pub struct FileModelSource {
    location: String,
}

impl FileModelSource {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl ModelSource for FileModelSource {
    async fn source_model(&self) -> Option<SourceModel> {
        match SourceModel::from_location(&self.location).await {
            Ok(model) => Some(model),
            Err(e) => {
                log::warn!("Model at {} is unavailable: {}", self.location, e);
                None
            }
        }
    }
}

/// A fixed, possibly absent, model
impl ModelSource for Option<SourceModel> {
    async fn source_model(&self) -> Option<SourceModel> {
        self.clone()
    }
}
