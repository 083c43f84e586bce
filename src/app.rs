// src/app.rs
use eframe::egui;
use rfd::FileDialog;

use crate::file::{self, EXPORT_FILE_NAME};
use crate::state::AppState;
use crate::ui;

pub struct PlotdeckApp {
    state: AppState,
}

impl PlotdeckApp {
    pub fn new() -> Self {
        let mut state = AppState::new();
        state.reload();
        Self { state }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Plot File...").clicked() {
                    self.open_plot_file();
                    ui.close_menu();
                }
                if ui.button("Reload").clicked() {
                    self.state.reload();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Export Full JSON...").clicked() {
                    self.export_results();
                    ui.close_menu();
                }
            });

            ui.separator();
            ui.label(format!("Source: {}", self.state.source_path.display()));
        });
    }

    fn open_plot_file(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("JSON files", &["json"])
            .set_title("Open Plot File");

        if let Some(path) = file_dialog.pick_file() {
            self.state.set_source(path);
        }
    }

    // Exports the full loaded list, never the filtered subset
    fn export_results(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("JSON files", &["json"])
            .set_file_name(EXPORT_FILE_NAME)
            .set_title("Export Full JSON");

        if let Some(path) = file_dialog.save_file() {
            if let Err(e) = file::write_export(&self.state.results, &path) {
                self.state.error_message = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for PlotdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        if let Some(load_error) = self.state.load_error.clone() {
            // Malformed source data halts the render pipeline for this cycle
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading("Plot data unavailable");
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::RED, load_error);
                ui.add_space(8.0);
                ui.label("Fix the plot file and reload.");
            });
        } else if self.state.results.is_empty() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("No plot metadata found. Waiting for AI-generated plots.");
                });
            });
        } else {
            egui::SidePanel::left("explorer_panel")
                .default_width(280.0)
                .show(ctx, |ui| {
                    ui::explorer::show_explorer(ui, &mut self.state);
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                ui::viewer::show_viewer(ui, &mut self.state);
            });
        }

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
