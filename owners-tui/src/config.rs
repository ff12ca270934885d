//! Bar configuration: TOML file with defaults for every field.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Box metrics and limits for the owners-stack bar, in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Blank cells on each side of an owner label.
    pub item_padding: u16,
    /// Gap after each owner button.
    pub item_margin: u16,
    /// Dropdown rows shown before the list is cut off.
    pub dropdown_max_rows: u16,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            item_padding: 1,
            item_margin: 1,
            dropdown_max_rows: 12,
        }
    }
}

/// `<config dir>/owners-stack/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("owners-stack").join("config.toml"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<BarConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BarConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
