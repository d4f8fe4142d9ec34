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
}

/// User settings, all optional in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that relative file paths are resolved against
    pub documents_path: Option<PathBuf>,
    /// Characters of title text shown in the outline panel
    pub outline_preview_chars: usize,
    /// Extension added on save when the path has none
    pub default_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            documents_path: None,
            outline_preview_chars: 30,
            default_extension: "txt".to_string(),
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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded documents path
        config.documents_path = config
            .documents_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    /// Load the config at `config_path`, writing the defaults there first
    /// when no file exists yet so the user has one to edit
    ///
    /// Failing to write the defaults is not fatal; they are still returned.
    pub fn load_or_create_at<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        if let Some(config) = Self::load_from_path(config_path)? {
            log::info!("Loaded config from {}", config_path.display());
            return Ok(config);
        }

        let config = Self::default();
        match config.save_to_path(config_path) {
            Ok(()) => log::info!("Created default config file at {}", config_path.display()),
            Err(e) => log::warn!("Failed to create default config file: {e}"),
        }
        Ok(config)
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

    pub fn config_dir() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.config/textblocks").as_ref())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Log file kept next to the config file at `config_path`
    pub fn log_path_for(config_path: &Path) -> PathBuf {
        let dir = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        dir.join("textblocks.log")
    }

    /// Turn a path typed by the user into one to open or save
    ///
    /// Shell variables and `~` are expanded; relative paths are taken from
    /// `documents_path` when one is configured.
    pub fn resolve_path(&self, input: &str) -> PathBuf {
        let path = PathBuf::from(input.trim());
        let path = Self::expand_path(&path).unwrap_or(path);

        match &self.documents_path {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        }
    }

    /// Add `default_extension` when `path` has no extension
    pub fn with_default_extension(&self, path: &Path) -> PathBuf {
        if path.extension().is_some() || self.default_extension.is_empty() {
            path.to_path_buf()
        } else {
            path.with_extension(&self.default_extension)
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
