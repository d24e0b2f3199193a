//! Configuration file parser for multiple formats

use crate::{ConfigError, DashboardConfig, Result};
use std::fs;
use std::path::Path;

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Map a file extension (case-insensitive) to a format
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Json => "JSON",
            ConfigFormat::Toml => "TOML",
        }
    }

    fn error(&self, action: &str, err: impl std::fmt::Display) -> ConfigError {
        ConfigError::Parse(format!("{} {} error: {}", self.name(), action, err))
    }
}

/// Configuration parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse configuration from a file, picking the format from its extension
    pub fn parse_file(path: impl AsRef<Path>) -> Result<DashboardConfig> {
        let path = path.as_ref();
        let format = Self::detect_format(path)?;
        let content = fs::read_to_string(path)?;
        log::debug!("Parsing {} dashboard config from {}", format.name(), path.display());
        Self::parse_string(&content, format)
    }

    /// Parse configuration from a string
    pub fn parse_string(content: &str, format: ConfigFormat) -> Result<DashboardConfig> {
        match format {
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| format.error("parse", e))
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| format.error("parse", e))
            }
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| format.error("parse", e)),
        }
    }

    /// Detect configuration format from the file extension of `path`
    pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ConfigFormat::from_extension(ext).ok_or_else(|| {
                ConfigError::Parse(format!(
                    "Dashboard config {} has unsupported extension .{}",
                    path.display(),
                    ext
                ))
            }),
            None => Err(ConfigError::Parse(format!(
                "Dashboard config {} has no file extension",
                path.display()
            ))),
        }
    }
}

/// Configuration serializer
pub struct ConfigSerializer;

impl ConfigSerializer {
    /// Write `config` to `path` in the format its extension names
    pub fn serialize_file(config: &DashboardConfig, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = Self::serialize_string(config, ConfigParser::detect_format(path)?)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn serialize_string(config: &DashboardConfig, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Yaml => {
                serde_yaml::to_string(config).map_err(|e| format.error("serialize", e))
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(config).map_err(|e| format.error("serialize", e))
            }
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| format.error("serialize", e))
            }
        }
    }
}
