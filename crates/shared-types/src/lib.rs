//! Shared types for the education dashboard
//!
//! This crate contains the types passed between the data tables, the UI
//! state layer and the configuration crate. Everything here is plain data.

pub mod errors;
pub mod events;
pub mod tooltip;

pub use errors::{DashboardError, DashboardResult, ErrorResponse, OrDashboardError};
pub use events::{PointerEvent, PointerPosition};
pub use tooltip::{HidePolicy, TooltipConfig, TooltipPhase, TooltipState};
