//! Configuration validation utilities

use crate::{ChartSettings, ConfigError, DashboardConfig, Result};
use edu_dashboard_shared::TooltipConfig;

/// Largest number of topic rows available to plot
pub const MAX_TOP_TOPICS: usize = 10;

/// Largest tooltip offset accepted, in pixels
pub const MAX_TOOLTIP_OFFSET: f64 = 500.0;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &DashboardConfig) -> Result<()> {
        if config.version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Version cannot be empty".to_string(),
            ));
        }

        Self::validate_tooltip(&config.tooltip)?;
        Self::validate_charts(&config.charts)?;

        Ok(())
    }

    fn validate_tooltip(tooltip: &TooltipConfig) -> Result<()> {
        for (name, value) in [("offset_x", tooltip.offset_x), ("offset_y", tooltip.offset_y)] {
            if !value.is_finite() || value.abs() > MAX_TOOLTIP_OFFSET {
                return Err(ConfigError::Validation(format!(
                    "Invalid tooltip {}: {}. Must be finite and within ±{}",
                    name, value, MAX_TOOLTIP_OFFSET
                )));
            }
        }
        Ok(())
    }

    fn validate_charts(charts: &ChartSettings) -> Result<()> {
        if charts.top_topics == 0 || charts.top_topics > MAX_TOP_TOPICS {
            return Err(ConfigError::Validation(format!(
                "Invalid top_topics: {}. Must be between 1 and {}",
                charts.top_topics, MAX_TOP_TOPICS
            )));
        }
        Ok(())
    }
}
