//! Pointer events delivered by chart elements

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Hover interaction over a single chart element (bar, slice, map region)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Enter { position: PointerPosition },
    Move { position: PointerPosition },
    Leave,
}

impl PointerEvent {
    pub fn position(&self) -> Option<PointerPosition> {
        match self {
            PointerEvent::Enter { position } | PointerEvent::Move { position } => Some(*position),
            PointerEvent::Leave => None,
        }
    }
}
