use std::collections::HashMap;

use crate::error::{NavError, Result};
use crate::extension::manifest::Manifest;
use crate::host::Workbench;
use crate::model::config::NavConfig;
use crate::model::cursor::Selection;
use crate::msg::Command;
use crate::nav::{Navigation, exchange_point_and_mark, sexp};

/// Result of running one command against the workbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// No active editor; nothing was touched.
    NoEditor,
    /// Exchange ran; `None` when the selection was empty.
    Exchanged(Option<Selection>),
    Moved(Navigation),
}

/// Registered commands, keyed by their host id.
#[derive(Debug, Default)]
pub struct Extension {
    commands: HashMap<&'static str, Command>,
    manifest: Option<Manifest>,
}

impl Extension {
    pub fn activate(config: &NavConfig, workbench: &mut dyn Workbench) -> Self {
        let mut extension = Self::default();
        for command in Command::ALL {
            extension.commands.insert(command.id(), command);
        }
        extension.manifest = Some(Manifest::from_config(config));

        tracing::info!("registered {} commands", extension.commands.len());
        if config.messages.announce_activation {
            workbench.show_information_message(&extension.summary_notification());
        }

        extension
    }

    pub fn deactivate(&mut self) {
        self.commands.clear();
        self.manifest = None;
        tracing::info!("deactivated");
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    pub fn command_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.commands.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn summary_notification(&self) -> String {
        let keys = self
            .manifest
            .as_ref()
            .map_or(0, |manifest| manifest.keybindings.len());
        format!(
            "advanced-navigation: {} commands ready, {keys} keybindings",
            self.commands.len()
        )
    }

    pub async fn execute(
        &self,
        id: &str,
        workbench: &mut dyn Workbench,
    ) -> Result<CommandOutcome> {
        let command = self
            .commands
            .get(id)
            .copied()
            .ok_or_else(|| NavError::UnknownCommand(id.to_string()))?;

        run_command(command, workbench).await
    }
}

/// Runs `command` against the active editor, if there is one.
pub async fn run_command(
    command: Command,
    workbench: &mut dyn Workbench,
) -> Result<CommandOutcome> {
    tracing::debug!("running {command}");

    let Some((direction, extend)) = command.sexp_motion() else {
        let Some(editor) = workbench.active_editor() else {
            tracing::trace!("{command}: no active editor");
            return Ok(CommandOutcome::NoEditor);
        };
        return Ok(CommandOutcome::Exchanged(exchange_point_and_mark(editor)));
    };

    let navigation = sexp::navigate_active(workbench, direction, extend).await?;
    Ok(navigation.map_or(CommandOutcome::NoEditor, CommandOutcome::Moved))
}
