use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MARKER: &str = "TODO:";

#[derive(Serialize, Deserialize, Debug)]
pub struct FileConfig {
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
        }
    }
}

fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("todo-finder")
        .join("config.toml"))
}

/// Reads the per-user config file; a missing file falls back to defaults.
pub fn load() -> Result<FileConfig> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(&path)
        .context(format!("Failed to read config at {:?}", path))?;

    let parsed = toml::from_str(&content).context("Failed to parse config.toml")?;

    Ok(parsed)
}

/// Persists a new marker value, creating the config directory if needed.
pub fn store_marker(marker: &str) -> Result<()> {
    let path = config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create config directory {:?}", parent))?;
    }

    let config = FileConfig {
        marker: marker.to_string(),
    };
    let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    fs::write(&path, content).context(format!("Failed to write config at {:?}", path))?;

    Ok(())
}
