use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by commands and configuration loading.
///
/// A missing active editor is not an error: commands treat it as a no-op.
#[derive(Debug, Error)]
pub enum NavError {
    /// A host movement primitive rejected the request.
    #[error("host command failed: {0}")]
    Host(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot render manifest: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
