use cellseg_engine::{IndentOptions, cells::CellOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid tab_size in config file at {config_path}: must be at least 1")]
    InvalidTabSize { config_path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Columns a tab advances when measuring leaf widths.
    pub tab_size: usize,
    /// Prefix of a line that opens a new cell.
    pub cell_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: IndentOptions::default().tab_size,
            cell_marker: CellOptions::default().marker_prefix,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.tab_size == 0 {
            return Err(ConfigError::InvalidTabSize {
                config_path: config_path.to_path_buf(),
            });
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/cellseg");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn indent_options(&self) -> IndentOptions {
        IndentOptions {
            tab_size: self.tab_size,
        }
    }

    pub fn cell_options(&self) -> CellOptions {
        CellOptions {
            marker_prefix: self.cell_marker.clone(),
        }
    }
}
