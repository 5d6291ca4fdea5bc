//! Request handling for generation and folder selection actions.

// Internal imports (std, crate)
use std::sync::Arc;

use crate::{
    folder::FolderSelector,
    generate::Generator,
    model::ModelSource,
    protocol::{
        Action, CodeGenerationActionResponse, RequestCodeGenerationAction,
        RequestSelectFolderAction, SelectFolderActionResponse,
    },
    request::GenerationRequest,
};

/// Answers generation and folder selection requests.
///
/// The model is fetched from the [`ModelSource`] on every generation request,
/// so each request sees the model as it is at that moment.
#[derive(Debug)]
pub struct CodeGenerationHandler<M, F> {
    generator: Generator,
    models: M,
    folders: Arc<F>,
}

impl<M, F> CodeGenerationHandler<M, F>
where
    M: ModelSource,
    F: FolderSelector + 'static,
{
    pub fn new(generator: Generator, models: M, folders: F) -> Self {
        Self {
            generator,
            models,
            folders: Arc::new(folders),
        }
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Answer a request action. Returns `None` for actions this handler does not serve.
    pub async fn handle(&self, action: Action) -> Option<Action> {
        match action {
            Action::RequestCodeGeneration(request) => Some(Action::CodeGenerationResponse(
                self.generate(request).await,
            )),
            Action::RequestSelectFolder(request) => Some(Action::SelectFolderResponse(
                self.select_folder(request).await,
            )),
            other => {
                log::debug!("Ignoring action of kind {}", other.kind());
                None
            }
        }
    }

    /// Parse a JSON action, handle it, and serialize the response
    pub async fn handle_json(&self, message: &str) -> crate::Result<Option<String>> {
        let action: Action = serde_json::from_str(message)?;
        match self.handle(action).await {
            Some(response) => Ok(Some(serde_json::to_string(&response)?)),
            None => Ok(None),
        }
    }

    async fn generate(&self, action: RequestCodeGenerationAction) -> CodeGenerationActionResponse {
        let request = GenerationRequest::from(&action.language_options);
        let (success, count) = match self.generator.generate_from(&self.models, &request).await {
            Ok(report) => {
                for failure in &report.failures {
                    log::warn!("Not generated: {}", failure);
                }
                (report.is_success(), report.count())
            }
            Err(e) => {
                log::error!("Code generation failed: {}", e);
                (false, 0)
            }
        };

        CodeGenerationActionResponse {
            response_id: action.request_id,
            success,
            count,
        }
    }

    async fn select_folder(&self, action: RequestSelectFolderAction) -> SelectFolderActionResponse {
        let folders = Arc::clone(&self.folders);
        let folder_path = match tokio::task::spawn_blocking(move || folders.pick_folder()).await {
            Ok(folder) => folder,
            Err(e) => {
                log::error!("Folder selection did not complete: {}", e);
                None
            }
        };

        SelectFolderActionResponse {
            response_id: action.request_id,
            folder_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        folder::FixedFolderSelector,
        model::SourceModel,
        protocol::LanguageOptions,
        templates::{Language, TemplateDir, TemplateRenderer},
    };
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    async fn handler(
        model: Option<SourceModel>,
        folders: FixedFolderSelector,
    ) -> crate::Result<(TempDir, CodeGenerationHandler<Option<SourceModel>, FixedFolderSelector>)>
    {
        let templates = tempdir()?;
        tokio::fs::write(
            templates.path().join("java.tera"),
            "{% for e in packagedElement %}{{ e.name }}{% endfor %}",
        )
        .await?;
        let renderer = TemplateRenderer::new(TemplateDir::new(templates.path()));
        let generator = Generator::new(Arc::new(renderer));
        Ok((templates, CodeGenerationHandler::new(generator, model, folders)))
    }

    fn model() -> SourceModel {
        SourceModel::new(json!({
            "packagedElement": [
                {"$type": "Class", "id": "1", "name": "Foo"},
                {"$type": "PrimitiveType", "id": "2", "name": "Bar"}
            ]
        }))
    }

    fn generation(folder: Option<PathBuf>, multiple: bool) -> Action {
        Action::RequestCodeGeneration(RequestCodeGenerationAction {
            request_id: "42".to_string(),
            language_options: LanguageOptions {
                language: Language::Java,
                folder,
                multiple,
            },
        })
    }

    #[tokio::test]
    async fn test_generation_success() -> crate::Result<()> {
        let (_t, handler) = handler(Some(model()), FixedFolderSelector::cancelled()).await?;
        let out = tempdir()?;

        let response = handler
            .handle(generation(Some(out.path().to_path_buf()), true))
            .await;
        assert_eq!(
            response,
            Some(Action::CodeGenerationResponse(CodeGenerationActionResponse {
                response_id: "42".to_string(),
                success: true,
                count: 1,
            }))
        );
        assert!(out.path().join("Foo.java").exists());
        assert!(!out.path().join("Bar.java").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_generation_without_model_fails() -> crate::Result<()> {
        let (_t, handler) = handler(None, FixedFolderSelector::cancelled()).await?;
        let out = tempdir()?;

        let response = handler
            .handle(generation(Some(out.path().to_path_buf()), false))
            .await;
        let Some(Action::CodeGenerationResponse(response)) = response else {
            panic!("expected a generation response");
        };
        assert!(!response.success);
        assert_eq!(response.count, 0);
        assert!(!out.path().join("test.java").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_generation_without_folder_fails() -> crate::Result<()> {
        let (_t, handler) = handler(Some(model()), FixedFolderSelector::cancelled()).await?;

        let response = handler.handle(generation(None, false)).await;
        let Some(Action::CodeGenerationResponse(response)) = response else {
            panic!("expected a generation response");
        };
        assert!(!response.success);
        Ok(())
    }

    #[tokio::test]
    async fn test_select_folder() -> crate::Result<()> {
        let (_t, handler) = handler(
            Some(model()),
            FixedFolderSelector::new(Some(PathBuf::from("/tmp/chosen"))),
        )
        .await?;

        let response = handler.handle(Action::request_select_folder()).await;
        assert_eq!(
            response,
            Some(Action::SelectFolderResponse(SelectFolderActionResponse {
                response_id: String::new(),
                folder_path: Some(PathBuf::from("/tmp/chosen")),
            }))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_select_folder_cancelled() -> crate::Result<()> {
        let (_t, handler) = handler(Some(model()), FixedFolderSelector::cancelled()).await?;

        let response = handler.handle(Action::request_select_folder()).await;
        let Some(Action::SelectFolderResponse(response)) = response else {
            panic!("expected a folder response");
        };
        assert_eq!(response.folder_path, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_responses_are_not_handled() -> crate::Result<()> {
        let (_t, handler) = handler(Some(model()), FixedFolderSelector::cancelled()).await?;

        let response = handler
            .handle(Action::SelectFolderResponse(SelectFolderActionResponse::default()))
            .await;
        assert_eq!(response, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_handle_json() -> crate::Result<()> {
        let (_t, handler) = handler(
            Some(model()),
            FixedFolderSelector::new(Some(PathBuf::from("out"))),
        )
        .await?;

        let reply = handler
            .handle_json(r#"{"kind": "requestSelectFolder", "requestId": "a"}"#)
            .await?
            .expect("a response");
        let reply: serde_json::Value = serde_json::from_str(&reply)?;
        assert_eq!(
            reply,
            json!({"kind": "selectFolderResponse", "responseId": "a", "folderPath": "out"})
        );

        assert!(handler.handle_json("not json").await.is_err());
        Ok(())
    }
}
