//! Error types shared by the dashboard crates
//!
//! The tooltip store and the table accessors are total and never produce
//! these. They exist for collaborators that turn a missing lookup into a
//! reportable failure, and for the configuration layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DashboardError {
    #[error("Unknown region code: {code}")]
    UnknownRegion { code: u8 },

    #[error("Unknown complaint status code: {code}")]
    UnknownStatus { code: u8 },

    #[error("Unknown institution id: {id}")]
    UnknownInstitution { id: u32 },

    #[error("Unknown project: {id}")]
    UnknownProject { id: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    #[error("Dataset validation failed: {errors:?}")]
    DatasetValidation {
        errors: Vec<String>,
        warnings: Vec<String>,
    },
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error payload handed to the presentation layer
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: DashboardError,
}

impl ErrorResponse {
    pub fn new(error: DashboardError) -> Self {
        Self {
            success: false,
            error,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"InvalidConfig","details":{"message":"Failed to serialize error","field":null}}}"#.to_string()
        })
    }
}

/// Turn an `Option` from a table lookup into a `DashboardResult`
pub trait OrDashboardError<T> {
    fn or_dashboard_error(self, err: impl FnOnce() -> DashboardError) -> DashboardResult<T>;
}

impl<T> OrDashboardError<T> for Option<T> {
    fn or_dashboard_error(self, err: impl FnOnce() -> DashboardError) -> DashboardResult<T> {
        self.ok_or_else(err)
    }
}
