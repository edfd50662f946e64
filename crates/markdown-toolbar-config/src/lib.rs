use markdown_toolbar_engine::{InsertMode, StyleError, StyleRegistry, StyleSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document length cap used when the config does not set one
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

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

    #[error("Invalid style definition: {0}")]
    InvalidStyle(#[from] StyleError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum document length in bytes; 0 disables the cap
    pub max_length: usize,
    /// Use the host's native insert when it has one
    pub incremental_insert: bool,
    /// Extra TOML file with a `[styles]` table, loaded before the inline styles
    pub styles_path: Option<PathBuf>,
    /// Style definitions that add to or replace the built-in ones
    pub styles: BTreeMap<String, StyleSpec>,
}

/// Shape of a file referenced by `styles_path`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleFile {
    styles: BTreeMap<String, StyleSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            incremental_insert: true,
            styles_path: None,
            styles: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let mut config: Config = read_toml(config_path)?;

        // Expand shell variables and tilde in the styles path
        config.styles_path = config
            .styles_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Load the config file, falling back to defaults when there is none
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
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
        let config_dir = shellexpand::tilde("~/.config/markdown-toolbar");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Length cap for hosts, `None` when disabled
    pub fn max_len(&self) -> Option<usize> {
        (self.max_length > 0).then_some(self.max_length)
    }

    /// Commit mode to force on the toolbar, `None` to let it probe the host
    pub fn forced_insert_mode(&self) -> Option<InsertMode> {
        (!self.incremental_insert).then_some(InsertMode::Overwrite)
    }

    /// Built-in styles with the style file and inline styles layered on top
    pub fn registry(&self) -> Result<StyleRegistry, ConfigError> {
        let mut registry = StyleRegistry::builtin();
        if let Some(styles_path) = &self.styles_path {
            let file: StyleFile = read_toml(styles_path)?;
            log::debug!(
                "Loaded {} styles from {}",
                file.styles.len(),
                styles_path.display()
            );
            registry.extend(file.styles)?;
        }
        registry.extend(self.styles.clone())?;
        Ok(registry)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigReadError {
            config_path: path.to_path_buf(),
            source,
        })?;

    toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
        config_path: path.to_path_buf(),
        source,
    })
}
