//! Action messages exchanged between the generation panel and the handler.
//!
//! Actions are JSON objects tagged by `kind`, with camelCase fields:
//!
//! ```
//! use umlgen_core::protocol::Action;
//!
//! let action: Action = serde_json::from_str(
//!     r#"{"kind": "requestCodeGeneration", "requestId": "7",
//!         "languageOptions": {"language": "java", "folder": "/tmp/out", "multiple": true}}"#,
//! ).unwrap();
//! assert!(matches!(action, Action::RequestCodeGeneration(_)));
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    request::{GenerationMode, GenerationRequest},
    templates::Language,
};

/// User choices sent along with a generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub folder: Option<PathBuf>,
    #[serde(default)]
    pub multiple: bool,
}

impl From<&LanguageOptions> for GenerationRequest {
    fn from(options: &LanguageOptions) -> Self {
        GenerationRequest::new(
            options.language,
            options.folder.clone(),
            GenerationMode::from_multiple(options.multiple),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCodeGenerationAction {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub language_options: LanguageOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeGenerationActionResponse {
    #[serde(default)]
    pub response_id: String,
    pub success: bool,
    /// Number of files written by the request
    #[serde(default)]
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSelectFolderAction {
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectFolderActionResponse {
    #[serde(default)]
    pub response_id: String,
    /// `None` when the user cancelled the picker
    pub folder_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Action {
    #[serde(rename = "requestCodeGeneration")]
    RequestCodeGeneration(RequestCodeGenerationAction),
    #[serde(rename = "codeGenerationResponse")]
    CodeGenerationResponse(CodeGenerationActionResponse),
    #[serde(rename = "requestSelectFolder")]
    RequestSelectFolder(RequestSelectFolderAction),
    #[serde(rename = "selectFolderResponse")]
    SelectFolderResponse(SelectFolderActionResponse),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RequestCodeGeneration(_) => "requestCodeGeneration",
            Self::CodeGenerationResponse(_) => "codeGenerationResponse",
            Self::RequestSelectFolder(_) => "requestSelectFolder",
            Self::SelectFolderResponse(_) => "selectFolderResponse",
        }
    }

    pub fn request_code_generation(language_options: LanguageOptions) -> Self {
        Self::RequestCodeGeneration(RequestCodeGenerationAction {
            request_id: String::new(),
            language_options,
        })
    }

    pub fn request_select_folder() -> Self {
        Self::RequestSelectFolder(RequestSelectFolderAction::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let action = Action::RequestCodeGeneration(RequestCodeGenerationAction {
            request_id: "1".to_string(),
            language_options: LanguageOptions {
                language: Language::Java,
                folder: Some(PathBuf::from("/tmp/out")),
                multiple: true,
            },
        });

        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({
                "kind": "requestCodeGeneration",
                "requestId": "1",
                "languageOptions": {"language": "java", "folder": "/tmp/out", "multiple": true}
            })
        );
    }

    #[test]
    fn test_responses_wire_format() {
        let response = Action::CodeGenerationResponse(CodeGenerationActionResponse {
            response_id: "1".to_string(),
            success: true,
            count: 3,
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"kind": "codeGenerationResponse", "responseId": "1", "success": true, "count": 3})
        );

        let cancelled = Action::SelectFolderResponse(SelectFolderActionResponse::default());
        assert_eq!(
            serde_json::to_value(&cancelled).unwrap(),
            json!({"kind": "selectFolderResponse", "responseId": "", "folderPath": null})
        );
    }

    #[test]
    fn test_lenient_request_parsing() {
        let action: Action = serde_json::from_value(json!({"kind": "requestSelectFolder"})).unwrap();
        assert_eq!(action, Action::request_select_folder());

        let action: Action =
            serde_json::from_value(json!({"kind": "requestCodeGeneration"})).unwrap();
        let Action::RequestCodeGeneration(request) = action else {
            panic!("expected a generation request");
        };
        assert_eq!(request.language_options.folder, None);
        assert!(!request.language_options.multiple);

        assert!(serde_json::from_value::<Action>(json!({"kind": "somethingElse"})).is_err());
    }

    #[test]
    fn test_options_to_request() {
        let options = LanguageOptions {
            language: Language::Java,
            folder: Some(PathBuf::from("out")),
            multiple: true,
        };
        let request = GenerationRequest::from(&options);
        assert_eq!(request, GenerationRequest::multiple("out"));
    }

    #[test]
    fn test_kind_matches_tag() {
        for action in [
            Action::request_select_folder(),
            Action::request_code_generation(LanguageOptions::default()),
            Action::CodeGenerationResponse(CodeGenerationActionResponse::default()),
            Action::SelectFolderResponse(SelectFolderActionResponse::default()),
        ] {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["kind"], action.kind());
        }
    }
}
