//! Walks a pointer across the region chart and prints what the tooltip display would render

use edu_dashboard_config::load_config;
use edu_dashboard_data::complaints::{COMPLAINTS_BY_AMBIT, COMPLAINTS_BY_REGION, COMPLAINTS_BY_TOPIC};
use edu_dashboard_data::validate_datasets;
use edu_dashboard_shared::{PointerEvent, PointerPosition};
use edu_dashboard_state::{ChartPointerController, TooltipStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = load_config(None)?;
    if config.data.validate_on_start {
        validate_datasets().into_result()?;
    }

    // One store for the whole page
    let store = TooltipStore::with_config(&config.tooltip);

    let display = store.subscribe(|state| {
        if state.visible {
            println!("[tooltip] {} @ ({:.0}, {:.0})", state.content, state.x, state.y);
        } else {
            println!("[tooltip] hidden");
        }
    });

    let mut controller = ChartPointerController::new(store.clone(), config.tooltip.clone());
    for (index, row) in COMPLAINTS_BY_REGION.iter().take(3).enumerate() {
        let label = row.tooltip_label();
        let position = PointerPosition::new(40.0 + 60.0 * index as f64, 200.0);
        controller.handle_pointer_event(PointerEvent::Enter { position }, &label);
        controller.handle_pointer_event(PointerEvent::Leave, &label);
    }

    for row in COMPLAINTS_BY_AMBIT.iter() {
        let label = if config.charts.show_percentages {
            row.tooltip_label()
        } else {
            format!("{}: {}", row.ambit, row.total)
        };
        store.show(label, 0.0, 0.0);
    }
    store.hide();
    display.unsubscribe();

    println!("Top {} topics:", config.charts.top_topics);
    for row in COMPLAINTS_BY_TOPIC.iter().take(config.charts.top_topics) {
        println!("  {:<40} {:>5}", row.topic, row.total);
    }
    Ok(())
}
