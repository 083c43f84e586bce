// src/state/mod.rs
use std::collections::HashSet;
use std::path::PathBuf;

use crate::file::{ResultLoader, DEFAULT_PLOT_FILE};
use crate::model::ResultEntry;
use crate::state::explorer::ExplorerState;

pub mod explorer;

// Viewer tabs for the selected result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultTab {
    Visualization,
    Metadata,
    Json,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Source data
    pub source_path: PathBuf,
    pub results: Vec<ResultEntry>,
    pub loader: ResultLoader,

    // Minimal UI state
    pub explorer: ExplorerState,
    pub result_tab: ResultTab,
    pub load_error: Option<String>,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_PLOT_FILE),
            results: Vec::new(),
            loader: ResultLoader::new(),
            explorer: ExplorerState::new(),
            result_tab: ResultTab::Visualization,
            load_error: None,
            error_message: None,
        }
    }

    /// Re-read the source file into the in-memory snapshot. A load failure
    /// clears the snapshot so the UI never browses a stale half-state.
    pub fn reload(&mut self) {
        match self.loader.load(&self.source_path) {
            Ok(entries) => {
                self.results = entries.to_vec();
                self.load_error = None;
                self.explorer.retain_valid_selection(self.results.len());
            }
            Err(e) => {
                self.results.clear();
                self.explorer.clear_selection();
                self.load_error = Some(format!("{:#}", e));
            }
        }
    }

    pub fn set_source(&mut self, path: PathBuf) {
        self.source_path = path;
        self.explorer = ExplorerState::new();
        self.reload();
    }

    pub fn selected_entry(&self) -> Option<&ResultEntry> {
        let filtered = explorer::filtered_indices(&self.results, &self.explorer.search_term);
        let index = self.explorer.visible_selection(&filtered)?;
        explorer::select(&self.results, index)
    }

    pub fn unique_query_count(&self) -> usize {
        self.results
            .iter()
            .map(ResultEntry::query_label)
            .collect::<HashSet<_>>()
            .len()
    }
}
