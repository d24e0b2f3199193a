use edu_dashboard_shared::{PointerEvent, PointerPosition, TooltipConfig};

use crate::TooltipStore;

/// Turns hover events over one chart element into tooltip store calls
pub struct ChartPointerController {
    store: TooltipStore,
    config: TooltipConfig,
    last_position: Option<PointerPosition>,
}

impl ChartPointerController {
    pub fn new(store: TooltipStore, config: TooltipConfig) -> Self {
        Self {
            store,
            config,
            last_position: None,
        }
    }

    /// Handle an event for the element labelled `label`
    pub fn handle_pointer_event(&mut self, event: PointerEvent, label: &str) {
        match event.position() {
            Some(position) => self.handle_pointer_over(position, label),
            None => {
                self.last_position = None;
                self.store.hide();
            }
        }
    }

    fn handle_pointer_over(&mut self, position: PointerPosition, label: &str) {
        let state = self.store.state();
        // Skip redundant updates while the pointer rests on the same element
        if state.visible && state.content == label && self.last_position == Some(position) {
            return;
        }
        self.last_position = Some(position);
        self.store.show(
            label,
            position.x + self.config.offset_x,
            position.y + self.config.offset_y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn config() -> TooltipConfig {
        TooltipConfig {
            offset_x: 10.0,
            offset_y: -5.0,
            ..TooltipConfig::default()
        }
    }

    #[test]
    fn test_enter_shows_with_offset() {
        let store = TooltipStore::new();
        let mut controller = ChartPointerController::new(store.clone(), config());

        controller.handle_pointer_event(
            PointerEvent::Enter {
                position: PointerPosition::new(100.0, 50.0),
            },
            "Maule",
        );

        let state = store.state();
        assert!(state.visible);
        assert_eq!(state.content, "Maule");
        assert_eq!((state.x, state.y), (110.0, 45.0));
    }

    #[test]
    fn test_leave_hides() {
        let store = TooltipStore::new();
        let mut controller = ChartPointerController::new(store.clone(), config());

        controller.handle_pointer_event(
            PointerEvent::Move {
                position: PointerPosition::new(1.0, 1.0),
            },
            "Aysén",
        );
        controller.handle_pointer_event(PointerEvent::Leave, "Aysén");

        let state = store.state();
        assert!(!state.visible);
        assert_eq!(state.content, "Aysén");
    }

    #[test]
    fn test_repeated_move_at_same_position_is_ignored() {
        let store = TooltipStore::new();
        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));
        let mut controller = ChartPointerController::new(store.clone(), TooltipConfig::default());

        let event = PointerEvent::Move {
            position: PointerPosition::new(4.0, 4.0),
        };
        controller.handle_pointer_event(event, "Ñuble");
        controller.handle_pointer_event(event, "Ñuble");

        // initial delivery + one show
        assert_eq!(notifications.get(), 2);
    }
}
