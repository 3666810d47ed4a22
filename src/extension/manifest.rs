use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::config::NavConfig;
use crate::msg::Command;

const DEFAULT_WHEN: &str = "editorTextFocus";

/// Contributions the host needs to register: commands and their keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub commands: Vec<CommandDef>,
    #[serde(default)]
    pub keybindings: Vec<KeybindingDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDef {
    pub command: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeybindingDef {
    pub command: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
}

impl Manifest {
    /// Default contributions with the configured key overrides applied.
    ///
    /// Overrides naming an unknown command are skipped with a warning.
    pub fn from_config(config: &NavConfig) -> Self {
        let commands = Command::ALL
            .iter()
            .map(|command| CommandDef {
                command: command.id().to_string(),
                title: command.title().to_string(),
            })
            .collect();

        let mut keybindings: Vec<KeybindingDef> = Command::ALL
            .iter()
            .map(|command| KeybindingDef {
                command: command.id().to_string(),
                key: command.default_key().to_string(),
                when: Some(DEFAULT_WHEN.to_string()),
            })
            .collect();

        for user in &config.keybindings {
            let Some(binding) = keybindings.iter_mut().find(|b| b.command == user.command) else {
                tracing::warn!("keybinding for unknown command ignored: {}", user.command);
                continue;
            };
            binding.key = user.key.clone();
            if user.when.is_some() {
                binding.when = user.when.clone();
            }
        }

        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            commands,
            keybindings,
        }
    }

    pub fn key_for(&self, command: Command) -> Option<&str> {
        self.keybindings
            .iter()
            .find(|binding| binding.command == command.id())
            .map(|binding| binding.key.as_str())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
