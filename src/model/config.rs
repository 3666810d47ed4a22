use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NavError, Result};

const DEFAULTS: &str = include_str!("../../config/default.toml");
const DEFAULT_LOG_FILTER: &str = "advanced_navigation=info";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub log: LogConfig,
    pub messages: MessageConfig,
    pub keybindings: Vec<KeybindingConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Tell the user once the commands are registered.
    pub announce_activation: bool,
}

/// A user override for one command's key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeybindingConfig {
    pub command: String,
    pub key: String,
    #[serde(default)]
    pub when: Option<String>,
}

impl NavConfig {
    /// Load configuration with layering: defaults → user config.
    pub fn load() -> Result<Self> {
        Self::load_from(user_config_path().as_deref())
    }

    pub fn load_from(user_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::parse(DEFAULTS, Path::new("<defaults>"))?;

        if let Some(path) = user_path.filter(|p| p.exists()) {
            let raw = fs::read_to_string(path)?;
            config = Self::parse(&raw, path)?;
            tracing::debug!("loaded user config from {}", path.display());
        }

        if let Some(dir) = config.log.dir.as_mut()
            && dir.starts_with('~')
            && let Some(home) = dirs_home()
        {
            *dir = dir.replacen('~', &home.to_string_lossy(), 1);
        }

        Ok(config)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self> {
        toml::from_str(raw).map_err(|source| NavError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Directory log files are written to.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = self.log.dir.as_ref() {
            return PathBuf::from(dir);
        }

        directories::ProjectDirs::from("", "", "advanced-navigation")
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("advanced-navigation"))
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "advanced-navigation")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}
