// src/ui/viewer.rs
use eframe::egui;
use serde_json::json;

use crate::chart::{build, detect};
use crate::model::ResultEntry;
use crate::state::{AppState, ResultTab};
use crate::ui::chart as chart_view;

pub fn show_viewer(ui: &mut egui::Ui, state: &mut AppState) {
    let selected = state.selected_entry().cloned();

    let Some(entry) = selected else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a query to view its plot");
        });
        return;
    };

    show_header(ui, &entry);

    // Tabs
    ui.horizontal(|ui| {
        for (tab, label) in [
            (ResultTab::Visualization, "Visualization"),
            (ResultTab::Metadata, "Metadata"),
            (ResultTab::Json, "JSON"),
        ] {
            if ui.selectable_label(state.result_tab == tab, label).clicked() {
                state.result_tab = tab;
            }
        }
    });
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    match state.result_tab {
        ResultTab::Visualization => show_visualization(ui, &entry),
        ResultTab::Metadata => show_metadata(ui, &entry),
        ResultTab::Json => show_raw_json(ui, &entry),
    }
}

fn show_header(ui: &mut egui::Ui, entry: &ResultEntry) {
    ui.heading(entry.query_label());
    ui.add_space(8.0);

    ui.columns(3, |columns| {
        metric(&mut columns[0], "Chart Type", &detect(&entry.plot));
        metric(&mut columns[1], "Generated At", entry.generated_at());
        metric(&mut columns[2], "Traces", &entry.trace_count().to_string());
    });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
}

fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(label);
        ui.strong(value);
    });
}

// Rendering failures stay local to this tab; header, metadata and raw JSON
// remain browsable.
fn show_visualization(ui: &mut egui::Ui, entry: &ResultEntry) {
    match build(&entry.plot) {
        Ok(chart) => chart_view::draw_chart(ui, &chart),
        Err(e) => {
            ui.colored_label(egui::Color32::RED, "Plot rendering failed.");
            ui.add_space(4.0);
            ui.code(format!("{:#}", e));
        }
    }
}

fn show_metadata(ui: &mut egui::Ui, entry: &ResultEntry) {
    let metadata = json!({
        "query": entry.query,
        "timestamp": entry.timestamp,
        "chart_type": detect(&entry.plot),
    });
    show_json_block(ui, "metadata_scroll", &metadata);
}

fn show_raw_json(ui: &mut egui::Ui, entry: &ResultEntry) {
    match serde_json::to_value(entry) {
        Ok(value) => show_json_block(ui, "raw_json_scroll", &value),
        Err(e) => {
            ui.colored_label(egui::Color32::RED, format!("Failed to serialize entry: {}", e));
        }
    }
}

fn show_json_block(ui: &mut egui::Ui, id: &str, value: &serde_json::Value) {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());

    egui::ScrollArea::vertical().id_source(id).show(ui, |ui| {
        ui.monospace(pretty);
    });
}
