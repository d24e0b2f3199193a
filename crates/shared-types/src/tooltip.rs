//! Tooltip state shared between the store and whatever renders the tooltip

use serde::{Deserialize, Serialize};

/// Snapshot of the single dashboard tooltip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    /// Whether the tooltip should currently render
    pub visible: bool,

    /// Label/body text. Only meaningful while `visible` is true
    pub content: String,

    /// X position hint, in the caller's coordinate space
    pub x: f64,

    /// Y position hint, in the caller's coordinate space
    pub y: f64,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            content: String::new(),
            x: 0.0,
            y: 0.0,
        }
    }
}

impl TooltipState {
    /// State produced by a `show` call
    pub fn shown(content: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            visible: true,
            content: content.into(),
            x,
            y,
        }
    }

    /// Logical phase of the tooltip
    pub fn phase(&self) -> TooltipPhase {
        if self.visible {
            TooltipPhase::Shown
        } else {
            TooltipPhase::Hidden
        }
    }
}

/// The two logical states of the tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPhase {
    Hidden,
    Shown,
}

/// What `hide` does with the last shown content and position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HidePolicy {
    /// Only `visible` flips; content and coordinates keep their last shown values
    #[default]
    Retain,
    /// Content is emptied and coordinates reset to zero
    Clear,
}

/// Configuration for tooltip behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Horizontal offset added to the pointer position, in pixels
    pub offset_x: f64,

    /// Vertical offset added to the pointer position, in pixels
    pub offset_y: f64,

    pub hide_policy: HidePolicy,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            hide_policy: HidePolicy::Retain,
        }
    }
}
