use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

use crate::controls::ControlDefaults;
use crate::forms::FormDefinition;

/// Library settings: control defaults from `forma.toml` plus the form
/// definitions found under `forms/`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub defaults: ControlDefaults,
    #[serde(skip)]
    pub forms: Vec<NamedForm>,
}

/// A form definition loaded from disk, named after its file stem
#[derive(Debug, Clone, PartialEq)]
pub struct NamedForm {
    pub name: String,
    pub definition: FormDefinition,
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Load `{root}/forma.{toml,json,yaml}` (optional) and every definition
    /// in `{root}/forms`
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let root = root.as_ref();
        let s = Config::builder()
            .add_source(File::from(root.join("forma")).required(false))
            .set_default("defaults.input_type", "text")?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        settings.load_forms_from_dir(&root.join("forms"))?;

        validator::SettingsValidator::validate(&settings).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })?;

        Ok(settings)
    }

    pub fn form(&self, name: &str) -> Option<&FormDefinition> {
        self.forms
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.definition)
    }

    fn load_forms_from_dir(&mut self, dir: &Path) -> Result<(), anyhow::Error> {
        let pattern = format!("{}/*", dir.display());
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => {
                    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                        continue;
                    };
                    if !matches!(ext, "json" | "yaml" | "yml") {
                        tracing::debug!("Skipping {}", path.display());
                        continue;
                    }
                    let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                        tracing::warn!("Skipping form file with unreadable name: {}", path.display());
                        continue;
                    };

                    let content = std::fs::read_to_string(&path)?;
                    let definition = if ext == "json" {
                        FormDefinition::from_json(&content)
                    } else {
                        FormDefinition::from_yaml(&content)
                    }
                    .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

                    tracing::info!("Loaded form '{}' with {} fields", name, definition.len());
                    self.forms.push(NamedForm {
                        name: name.to_string(),
                        definition,
                    });
                }
                Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
            }
        }
        Ok(())
    }
}
