// src/ui/explorer.rs
use eframe::egui;

use crate::state::explorer::filtered_indices;
use crate::state::AppState;

pub fn show_explorer(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Query Explorer");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.text_edit_singleline(&mut state.explorer.search_term);
    });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    let filtered = filtered_indices(&state.results, &state.explorer.search_term);

    if filtered.is_empty() {
        ui.colored_label(egui::Color32::YELLOW, "No matches found.");
    } else {
        let selected = state.explorer.visible_selection(&filtered);

        egui::ScrollArea::vertical()
            .id_source("explorer_list_scroll")
            .show(ui, |ui| {
                for index in filtered {
                    let label = state.results[index].query_label().to_string();
                    if ui.selectable_label(selected == Some(index), label).clicked() {
                        state.explorer.selected = Some(index);
                    }
                }
            });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    ui.strong(format!("Total Plots: {}", state.results.len()));
    ui.strong(format!("Unique Queries: {}", state.unique_query_count()));
}
