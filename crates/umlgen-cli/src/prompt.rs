//! Interactive terminal front end for the generation panel

use std::path::{Path, PathBuf};

use dialoguer::{theme::ColorfulTheme, Input, Select};
use umlgen_core::{
    panel::GenerationPanel, CodeGenerationHandler, FolderSelector, Language, ModelSource,
};

/// Prompts for an existing directory; an empty answer cancels
pub struct DialoguerFolderSelector;

impl FolderSelector for DialoguerFolderSelector {
    fn pick_folder(&self) -> Option<PathBuf> {
        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Select Folder (empty to cancel)")
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() || Path::new(input.trim()).is_dir() {
                    Ok(())
                } else {
                    Err(format!("{} is not a directory", input.trim()))
                }
            })
            .interact_text();

        match answer {
            Ok(input) if input.trim().is_empty() => None,
            Ok(input) => Some(PathBuf::from(input.trim())),
            Err(e) => {
                tracing::warn!("Folder prompt failed: {}", e);
                None
            }
        }
    }
}

enum MenuItem {
    SelectFolder,
    ToggleMultiple,
    Language,
    Generate,
    Quit,
}

const MENU: [MenuItem; 5] = [
    MenuItem::SelectFolder,
    MenuItem::ToggleMultiple,
    MenuItem::Language,
    MenuItem::Generate,
    MenuItem::Quit,
];

impl MenuItem {
    fn label(&self, panel: &GenerationPanel) -> String {
        match self {
            Self::SelectFolder => "Select Folder".to_string(),
            Self::ToggleMultiple => format!(
                "[{}] Generate multiple files",
                if panel.is_multiple() { "x" } else { " " }
            ),
            Self::Language => format!("Language: {}", panel.language()),
            Self::Generate if panel.is_generation_disabled() => {
                "Generate (select a folder first)".to_string()
            }
            Self::Generate => "Generate".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Run the panel until the user quits. Every action goes through `handler`.
pub async fn run_panel<M: ModelSource>(
    handler: &CodeGenerationHandler<M, DialoguerFolderSelector>,
) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let mut panel = GenerationPanel::new();

    loop {
        println!("{}", panel.status_line());
        let labels: Vec<String> = MENU.iter().map(|item| item.label(&panel)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Code Generation")
            .items(&labels)
            .default(0)
            .interact()?;

        match MENU[choice] {
            MenuItem::SelectFolder => {
                if let Some(response) = handler.handle(panel.select_folder_request()).await {
                    panel.on_action(&response);
                }
            }
            MenuItem::ToggleMultiple => panel.toggle_multiple(),
            MenuItem::Language => {
                let languages: Vec<Language> = Language::all().collect();
                let names: Vec<&str> = languages.iter().map(Language::as_str).collect();
                let selected = Select::with_theme(&theme)
                    .with_prompt("Language")
                    .items(&names)
                    .default(0)
                    .interact()?;
                panel.set_language(languages[selected]);
            }
            MenuItem::Generate => match panel.generate_request() {
                Some(request) => {
                    if let Some(response) = handler.handle(request).await {
                        panel.on_action(&response);
                    }
                }
                None => println!("Select a folder before generating"),
            },
            MenuItem::Quit => return Ok(()),
        }
    }
}
