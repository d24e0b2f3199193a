//! Integration tests for the tooltip store

use std::cell::RefCell;
use std::rc::Rc;

use edu_dashboard_config::{ConfigFormat, ConfigParser, ConfigValidator};
use edu_dashboard_data::complaints::{region_name, region_row};
use edu_dashboard_shared::{
    HidePolicy, PointerEvent, PointerPosition, TooltipConfig, TooltipState,
};
use edu_dashboard_state::{ChartPointerController, TooltipStore};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn record(store: &TooltipStore) -> (Rc<RefCell<Vec<TooltipState>>>, edu_dashboard_state::Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    (seen, sub)
}

#[test]
fn test_fresh_subscriber_sees_last_show() {
    init_logging();
    let store = TooltipStore::new();
    store.show("Araucanía", 7.5, -2.0);

    let (seen, _sub) = record(&store);

    assert_eq!(*seen.borrow(), vec![TooltipState::shown("Araucanía", 7.5, -2.0)]);
}

#[test]
fn test_fresh_subscriber_after_hide_sees_retained_content() {
    init_logging();
    let store = TooltipStore::new();
    store.show("Coquimbo", 1.0, 2.0);
    store.hide();

    let (seen, _sub) = record(&store);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(!seen[0].visible);
    assert_eq!(seen[0].content, "Coquimbo");
    assert_eq!((seen[0].x, seen[0].y), (1.0, 2.0));
}

#[test]
fn test_region_tooltip_scenario() {
    init_logging();
    let store = TooltipStore::new();
    let (seen, _sub) = record(&store);

    assert_eq!(region_name(13), Some("Metropolitana"));
    let label = region_row(13).unwrap().tooltip_label();
    store.show(label, 120.0, 340.0);
    store.hide();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(
        seen[1],
        TooltipState {
            visible: true,
            content: "Región: Metropolitana, Total: 5842".to_string(),
            x: 120.0,
            y: 340.0,
        }
    );
    assert_eq!(
        seen[2],
        TooltipState {
            visible: false,
            content: "Región: Metropolitana, Total: 5842".to_string(),
            x: 120.0,
            y: 340.0,
        }
    );
}

#[test]
fn test_multiple_subscribers_see_identical_states() {
    init_logging();
    let store = TooltipStore::new();
    let (first, _a) = record(&store);
    let (second, _b) = record(&store);
    let (third, _c) = record(&store);

    store.show("Los Ríos", 10.0, 10.0);
    store.show("Los Lagos", 20.0, 10.0);
    store.hide();

    assert_eq!(*first.borrow(), *second.borrow());
    assert_eq!(*second.borrow(), *third.borrow());
    assert_eq!(first.borrow().len(), 4);
}

#[test]
fn test_unsubscribed_observer_is_not_called() {
    init_logging();
    let store = TooltipStore::new();
    let (kept, _keep) = record(&store);
    let (dropped, cancel) = record(&store);

    cancel.unsubscribe();
    store.show("Atacama", 0.0, 0.0);
    store.hide();
    cancel.unsubscribe();

    assert_eq!(dropped.borrow().len(), 1);
    assert_eq!(kept.borrow().len(), 3);
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn test_independent_stores_do_not_share_state() {
    let first = TooltipStore::new();
    let second = TooltipStore::new();

    first.show("Magallanes", 1.0, 1.0);

    assert!(first.state().visible);
    assert_eq!(second.state(), TooltipState::default());
}

#[test]
fn test_controller_drives_subscribers() {
    init_logging();
    let store = TooltipStore::new();
    let (seen, _sub) = record(&store);
    let config = TooltipConfig {
        offset_x: 8.0,
        offset_y: 8.0,
        ..TooltipConfig::default()
    };
    let mut controller = ChartPointerController::new(store.clone(), config);
    let label = region_row(8).unwrap().tooltip_label();

    controller.handle_pointer_event(
        PointerEvent::Enter {
            position: PointerPosition::new(50.0, 60.0),
        },
        &label,
    );
    controller.handle_pointer_event(
        PointerEvent::Move {
            position: PointerPosition::new(52.0, 60.0),
        },
        &label,
    );
    controller.handle_pointer_event(PointerEvent::Leave, &label);

    let seen = seen.borrow();
    let visibility: Vec<bool> = seen.iter().map(|s| s.visible).collect();
    assert_eq!(visibility, vec![false, true, true, false]);
    assert_eq!(seen[2].x, 60.0);
    assert_eq!(seen[3].content, "Región: Biobío, Total: 1523");
}

#[test]
fn test_store_built_from_parsed_config_clears_on_hide() {
    init_logging();
    let yaml = "tooltip:\n  offset_x: 6.0\n  hide_policy: clear\n";
    let config = ConfigParser::parse_string(yaml, ConfigFormat::Yaml).unwrap();
    ConfigValidator::validate(&config).unwrap();

    let store = TooltipStore::with_config(&config.tooltip);
    assert_eq!(store.hide_policy(), HidePolicy::Clear);

    let mut controller = ChartPointerController::new(store.clone(), config.tooltip.clone());
    controller.handle_pointer_event(
        PointerEvent::Enter {
            position: PointerPosition::new(10.0, 10.0),
        },
        "Valparaíso",
    );
    assert_eq!(store.state(), TooltipState::shown("Valparaíso", 16.0, 10.0));

    controller.handle_pointer_event(PointerEvent::Leave, "Valparaíso");
    assert_eq!(store.state(), TooltipState::default());
}
