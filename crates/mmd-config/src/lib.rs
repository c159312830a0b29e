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

    #[error("Invalid syntax.{field} {value:?}: {reason}")]
    InvalidSyntax {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Fence tokens recognised by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    pub header_open: String,
    pub header_close: String,
    pub code_fence: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            header_open: "+++ header".to_string(),
            header_close: "+++".to_string(),
            code_fence: "+++".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub syntax: SyntaxConfig,
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
        config.validate()?;

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
        let config_dir = shellexpand::tilde("~/.config/mmd");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Fence tokens must be non-blank, and the code fence must be a single
    /// word since its info tag follows after a space.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let syntax = &self.syntax;
        for (field, value) in [
            ("header_open", &syntax.header_open),
            ("header_close", &syntax.header_close),
            ("code_fence", &syntax.code_fence),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidSyntax {
                    field,
                    value: value.clone(),
                    reason: "must not be empty",
                });
            }
        }
        if syntax.code_fence.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidSyntax {
                field: "code_fence",
                value: syntax.code_fence.clone(),
                reason: "must not contain whitespace",
            });
        }
        Ok(())
    }
}
