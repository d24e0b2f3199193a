//! Configuration for the education dashboard
//! Loads tooltip behavior and chart settings from YAML, JSON or TOML

use std::path::Path;

use edu_dashboard_shared::{DashboardError, TooltipConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parser;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser, ConfigSerializer};
pub use validation::ConfigValidator;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        DashboardError::InvalidConfig {
            message: err.to_string(),
            field: None,
        }
    }
}

/// Top-level dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub version: String,
    pub tooltip: TooltipConfig,
    pub charts: ChartSettings,
    pub data: DataSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            tooltip: TooltipConfig::default(),
            charts: ChartSettings::default(),
            data: DataSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// How many rows of the topic ranking to plot (the table holds ten)
    pub top_topics: usize,
    pub show_percentages: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            top_topics: 10,
            show_percentages: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Run the table consistency checks when the dashboard starts
    pub validate_on_start: bool,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            validate_on_start: true,
        }
    }
}

/// Load and validate a config file, or fall back to defaults when `path` is `None`
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let config = match path {
        Some(path) => {
            log::info!("Loading dashboard config from {}", path.display());
            ConfigParser::parse_file(path)?
        }
        None => {
            log::info!("No dashboard config given, using defaults");
            DashboardConfig::default()
        }
    };
    ConfigValidator::validate(&config)?;
    Ok(config)
}
