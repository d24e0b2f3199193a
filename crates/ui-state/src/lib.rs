//! UI state layer for the education dashboard
//!
//! Holds the single tooltip shared by every chart on a page and the
//! controller that feeds it from pointer events.

pub mod pointer_controller;
pub mod tooltip_store;

pub use pointer_controller::ChartPointerController;
pub use tooltip_store::{Subscription, TooltipStore};
