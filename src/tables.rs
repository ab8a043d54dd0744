use chrono::Timelike;
use chrono_tz::Tz;
use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::openweathermap::CloudCoverSlot,
    cli::EstimatorArgs,
    core::estimate,
    quantity::percent::Percent,
};

#[must_use]
pub fn build_forecast_table(
    slots: &[CloudCoverSlot],
    estimator: &EstimatorArgs,
    timezone: Tz,
) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Start", "Clouds", "Conditions", "Estimate"]);
    for slot in slots {
        let start_time = slot.start_time.with_timezone(&timezone);
        let estimated = estimate::estimate_slot(estimator, start_time.hour(), slot.cloud_cover);
        table.add_row(vec![
            Cell::new(start_time.format("%a %H:%M")),
            Cell::new(slot.cloud_cover).set_alignment(CellAlignment::Right).fg(
                if slot.cloud_cover <= Percent(30.0) {
                    Color::Green
                } else if slot.cloud_cover <= Percent(70.0) {
                    Color::DarkYellow
                } else {
                    Color::Red
                },
            ),
            Cell::new(&slot.conditions),
            Cell::new(estimated).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
