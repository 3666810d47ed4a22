use std::io::{self, Write};

use anyhow::Result;

use advanced_navigation::model::config::NavConfig;
use advanced_navigation::{Manifest, logging};

/// Prints the command and keybinding manifest the host registers.
fn main() -> Result<()> {
    let config = NavConfig::load()?;

    // Log to file only; stdout carries the manifest.
    let _guard = logging::init(&config.log_dir(), &config.log.filter)?;
    tracing::info!("advnav starting");

    let manifest = Manifest::from_config(&config);
    let rendered = manifest.to_toml()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    tracing::info!(
        "wrote manifest: {} commands, {} keybindings",
        manifest.commands.len(),
        manifest.keybindings.len()
    );
    Ok(())
}
