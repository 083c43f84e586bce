// src/state/explorer.rs
use crate::model::ResultEntry;

// Search/selection state for the query explorer sidebar
#[derive(Debug, Default)]
pub struct ExplorerState {
    pub search_term: String,
    pub selected: Option<usize>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection to display: the stored index if it is still in the filtered
    /// set, otherwise the first filtered index.
    pub fn visible_selection(&self, filtered: &[usize]) -> Option<usize> {
        self.selected
            .filter(|index| filtered.contains(index))
            .or_else(|| filtered.first().copied())
    }

    pub fn retain_valid_selection(&mut self, result_count: usize) {
        if self.selected.map_or(false, |index| index >= result_count) {
            self.selected = None;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Indices of the entries whose query label contains the search term,
/// case-insensitively. An empty term keeps every index in original order.
pub fn filtered_indices(results: &[ResultEntry], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..results.len()).collect();
    }

    let needle = query.to_lowercase();
    results
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.query_label().to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Resolve a selected index back to its entry.
pub fn select(results: &[ResultEntry], index: usize) -> Option<&ResultEntry> {
    results.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlotSpec;
    use serde_json::Map;

    fn entries(queries: &[Option<&str>]) -> Vec<ResultEntry> {
        queries
            .iter()
            .map(|query| ResultEntry {
                query: query.map(str::to_owned),
                timestamp: None,
                plot: PlotSpec::default(),
                extra: Map::new(),
            })
            .collect()
    }

    #[test]
    fn empty_query_keeps_all_indices_in_order() {
        let results = entries(&[Some("a"), Some("b"), Some("c")]);
        assert_eq!(filtered_indices(&results, ""), vec![0, 1, 2]);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let results = entries(&[Some("Revenue Q1"), Some("Costs"), Some("revenue q2")]);
        assert_eq!(filtered_indices(&results, "REVENUE"), vec![0, 2]);
        assert_eq!(filtered_indices(&results, "q2"), vec![2]);
    }

    #[test]
    fn no_match_yields_empty_set() {
        let results = entries(&[Some("Revenue Q1")]);
        assert!(filtered_indices(&results, "XYZ").is_empty());
    }

    #[test]
    fn unnamed_entries_match_the_fallback_label() {
        let results = entries(&[None, Some("named")]);
        assert_eq!(filtered_indices(&results, "unnamed"), vec![0]);
    }

    #[test]
    fn select_resolves_in_range_indices_only() {
        let results = entries(&[Some("a")]);
        assert_eq!(select(&results, 0).unwrap().query_label(), "a");
        assert!(select(&results, 5).is_none());
    }

    #[test]
    fn visible_selection_falls_back_to_first_filtered() {
        let state = ExplorerState {
            search_term: String::new(),
            selected: Some(4),
        };
        assert_eq!(state.visible_selection(&[1, 2]), Some(1));
        assert_eq!(state.visible_selection(&[1, 4]), Some(4));
        assert_eq!(state.visible_selection(&[]), None);
    }
}
