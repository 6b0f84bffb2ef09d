use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::animation::Entrance;
use crate::error::ConfigError;

/// Pointer event that reveals a step's detail list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RevealTrigger {
    #[default]
    Hover,
    Click,
}

fn default_dark_mode() -> bool {
    true
}

fn default_nerd_font() -> bool {
    true
}

fn default_transition_ms() -> u64 {
    200
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start in the dark theme
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    /// Hover or click to reveal step details
    #[serde(default)]
    pub reveal: RevealTrigger,

    /// Ease active cards in, or snap
    #[serde(default)]
    pub entrance: Entrance,

    /// Use Nerd Font glyphs for step icons
    #[serde(default = "default_nerd_font")]
    pub nerd_font: bool,

    /// Length of the entrance transition
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            reveal: RevealTrigger::default(),
            entrance: Entrance::default(),
            nerd_font: default_nerd_font(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl AppConfig {
    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("devpath");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path`. A missing file is not an error; unreadable or
    /// malformed files are logged and replaced by defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return AppConfig::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}", e);
                AppConfig::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to `path`, creating the parent directory
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Could not create config directory: {}", e);
            }
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
