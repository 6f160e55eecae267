//! Committed state of one mounted order-table view, held in a single
//! `RwSignal`. All mutation goes through methods that enforce the two
//! table invariants: any query change returns to the first page, and a
//! page change clears the row selection.

use contracts::orders::{AllOrdersRequest, FilterArgs, FilterOption, SorterArgs, ViewArgs};
use contracts::presets::TablePreset;
use leptos::prelude::*;

use super::columns::{ColumnOption, DEFAULT_COLUMN_OPTIONS};
use super::constants::{BUILTIN_TAG_PRESETS, DEFAULT_FILTER_OPTIONS, DEFAULT_PAGE_SIZE};
use super::engine;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderTableState {
    pub page_index: usize,
    pub page_size: usize,
    pub sorter: SorterArgs,
    pub filter_options: Vec<FilterOption>,
    pub views: ViewArgs,
    pub column_options: Vec<ColumnOption>,
    pub selected_ids: Vec<i64>,
    pub fuzzy: String,
    pub current_preset: TablePreset,
}

impl Default for OrderTableState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sorter: SorterArgs::default(),
            filter_options: DEFAULT_FILTER_OPTIONS.clone(),
            views: ViewArgs::default(),
            column_options: DEFAULT_COLUMN_OPTIONS.clone(),
            selected_ids: Vec::new(),
            fuzzy: String::new(),
            current_preset: BUILTIN_TAG_PRESETS[0].clone(),
        }
    }
}

impl OrderTableState {
    /// The filters actually sent to the server right now.
    pub fn effective_filters(&self) -> Vec<FilterArgs> {
        engine::derive_effective_filters(&self.filter_options, &self.views)
    }

    pub fn list_request(&self) -> AllOrdersRequest {
        engine::build_list_request(
            self.page_index,
            self.page_size,
            &self.sorter,
            &self.effective_filters(),
            &self.fuzzy,
            &self.views,
        )
    }

    pub fn has_preset_drift(&self) -> bool {
        engine::detect_preset_drift(
            &self.effective_filters(),
            &self.views,
            &self.current_preset,
        )
    }

    /// Selections are relative to the visible page; moving off that page
    /// discards them.
    pub fn set_page_index(&mut self, page_index: usize) {
        if self.page_index != page_index {
            self.page_index = page_index;
            self.selected_ids.clear();
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if self.page_size != page_size {
            self.page_size = page_size;
            self.reset_page();
        }
    }

    /// Cycle the sort on a column: ascending, then descending, then back
    /// to the default sort (`id` ascending).
    pub fn toggle_sort(&mut self, col: &str) {
        let next = if self.sorter.col != col {
            SorterArgs {
                col: col.to_string(),
                desc: false,
            }
        } else if !self.sorter.desc {
            SorterArgs {
                col: col.to_string(),
                desc: true,
            }
        } else {
            SorterArgs::default()
        };
        self.set_sorter(next);
    }

    pub fn set_sorter(&mut self, sorter: SorterArgs) {
        if self.sorter != sorter {
            self.sorter = sorter;
            self.reset_page();
        }
    }

    /// Commit a staged filter panel edit.
    pub fn commit_filter_options(&mut self, filter_options: Vec<FilterOption>) {
        if self.filter_options != filter_options {
            self.filter_options = filter_options;
            self.reset_page();
        }
    }

    /// Commit a staged column panel edit. Columns do not affect the
    /// query, so pagination is untouched.
    pub fn commit_column_options(&mut self, column_options: Vec<ColumnOption>) {
        self.column_options = column_options;
    }

    pub fn set_views(&mut self, views: ViewArgs) {
        if self.views != views {
            self.views = views;
            self.reset_page();
        }
    }

    pub fn set_fuzzy(&mut self, fuzzy: String) {
        if self.fuzzy != fuzzy {
            self.fuzzy = fuzzy;
            self.reset_page();
        }
    }

    /// Make the given preset current and load its filters and views over
    /// the defaults. Re-applying the current preset discards local edits.
    pub fn apply_preset(&mut self, preset: &TablePreset) {
        self.current_preset = preset.clone();
        let (filter_options, views) = engine::apply_preset(&DEFAULT_FILTER_OPTIONS, preset);
        self.filter_options = filter_options;
        self.views = views;
        self.selected_ids.clear();
        self.reset_page();
    }

    pub fn toggle_selected(&mut self, id: i64) {
        if let Some(position) = self.selected_ids.iter().position(|&s| s == id) {
            self.selected_ids.remove(position);
        } else {
            self.selected_ids.push(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected_ids.contains(&id)
    }

    fn reset_page(&mut self) {
        // Stale page numbers must never survive a query change; the new
        // result set may be smaller than the old one.
        if self.page_index != 0 {
            self.page_index = 0;
            self.selected_ids.clear();
        }
    }
}

pub fn create_state() -> RwSignal<OrderTableState> {
    RwSignal::new(OrderTableState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on_page_three() -> OrderTableState {
        let mut state = OrderTableState::default();
        state.set_page_index(3);
        assert_eq!(state.page_index, 3);
        state
    }

    fn rush_options(state: &OrderTableState) -> Vec<FilterOption> {
        state
            .filter_options
            .iter()
            .cloned()
            .map(|mut option| {
                if option.args.col() == "tags" {
                    option.args = FilterArgs::In {
                        col: "tags".into(),
                        val: vec!["Rush".into()],
                    };
                }
                option
            })
            .collect()
    }

    #[test]
    fn sort_column_change_resets_page() {
        let mut state = state_on_page_three();
        state.toggle_sort("title");
        assert_eq!(state.page_index, 0);
        assert_eq!(state.sorter.col, "title");
        assert!(!state.sorter.desc);
    }

    #[test]
    fn sort_direction_change_resets_page() {
        let mut state = OrderTableState::default();
        state.toggle_sort("title");
        state.set_page_index(3);
        state.toggle_sort("title");
        assert!(state.sorter.desc);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn clearing_sort_returns_to_default() {
        let mut state = OrderTableState::default();
        state.toggle_sort("title");
        state.toggle_sort("title");
        state.toggle_sort("title");
        assert_eq!(state.sorter, SorterArgs::default());
    }

    #[test]
    fn filter_commit_resets_page() {
        let mut state = state_on_page_three();
        let staged = rush_options(&state);
        state.commit_filter_options(staged);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn view_change_resets_page() {
        let mut state = state_on_page_three();
        state.set_views(ViewArgs {
            cdl_view: true,
            ..ViewArgs::default()
        });
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn fuzzy_change_resets_page() {
        let mut state = state_on_page_three();
        state.set_fuzzy("atlas".into());
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn identical_values_do_not_reset_page() {
        let mut state = state_on_page_three();
        state.set_views(ViewArgs::default());
        state.set_fuzzy(String::new());
        state.commit_filter_options(state.filter_options.clone());
        assert_eq!(state.page_index, 3);
    }

    #[test]
    fn page_change_clears_selection() {
        let mut state = OrderTableState::default();
        state.toggle_selected(11);
        state.toggle_selected(12);
        assert_eq!(state.selected_ids, vec![11, 12]);
        state.set_page_index(1);
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn column_commit_keeps_page_and_selection() {
        let mut state = state_on_page_three();
        state.toggle_selected(11);
        let mut staged = state.column_options.clone();
        staged[0].visible = false;
        state.commit_column_options(staged);
        assert_eq!(state.page_index, 3);
        assert_eq!(state.selected_ids, vec![11]);
    }

    #[test]
    fn default_state_matches_the_all_preset() {
        let state = OrderTableState::default();
        assert_eq!(state.current_preset.preset_id, -100);
        assert!(state.effective_filters().is_empty());
        assert!(!state.views.cdl_view);
        assert!(!state.has_preset_drift());
    }

    #[test]
    fn staged_edit_commit_produces_drift_and_cancel_does_not() {
        let mut state = OrderTableState::default();

        // "Cancel": the staged copy is dropped, nothing changes.
        let _discarded = rush_options(&state);
        assert!(!state.has_preset_drift());

        // "OK": the staged copy is committed.
        let staged = rush_options(&state);
        state.commit_filter_options(staged);
        assert!(state.has_preset_drift());
        assert_eq!(
            state.effective_filters(),
            vec![FilterArgs::In {
                col: "tags".into(),
                val: vec!["Rush".into()],
            }]
        );
    }

    #[test]
    fn applying_a_preset_clears_drift_and_local_edits() {
        let mut state = OrderTableState::default();
        state.commit_filter_options(rush_options(&state));
        state.set_page_index(2);
        state.toggle_selected(5);

        let preset = engine::resolve_active_preset(&[], Some("-102"));
        state.apply_preset(&preset);

        assert_eq!(state.current_preset.preset_id, -102);
        assert!(state.views.cdl_view);
        assert_eq!(state.page_index, 0);
        assert!(state.selected_ids.is_empty());
        assert!(!state.has_preset_drift());
    }

    #[test]
    fn list_request_reflects_committed_state() {
        let mut state = OrderTableState::default();
        state.commit_filter_options(rush_options(&state));
        state.set_fuzzy("maps".into());
        state.toggle_sort("createdDate");

        let request = state.list_request();
        assert_eq!(request.page_index, 0);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(request.sorter.col, "createdDate");
        assert_eq!(request.fuzzy, "maps");
        assert_eq!(request.filters.len(), 1);
    }
}
