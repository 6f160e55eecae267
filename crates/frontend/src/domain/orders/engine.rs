//! The order query state engine: pure derivation rules that turn filter
//! slots, view toggles, sort, pagination, and presets into the single
//! request sent to the list-orders endpoint.

use contracts::orders::{AllOrdersRequest, FilterArgs, FilterOption, SorterArgs, ViewArgs};
use contracts::presets::TablePreset;

use super::constants::{BUILTIN_TAG_PRESETS, BUILTIN_VIEW_PRESETS};

/// Find the preset named by the raw `preset` URL parameter.
///
/// Search order is built-in tag presets, built-in view presets, then
/// custom presets. A missing, non-numeric, or unknown id resolves to the
/// first built-in tag preset ("All"); this never fails.
pub fn resolve_active_preset(
    custom_presets: &[TablePreset],
    url_preset: Option<&str>,
) -> TablePreset {
    let fallback = || BUILTIN_TAG_PRESETS[0].clone();
    let Some(wanted) = url_preset.and_then(|raw| raw.trim().parse::<i64>().ok()) else {
        return fallback();
    };
    BUILTIN_TAG_PRESETS
        .iter()
        .chain(BUILTIN_VIEW_PRESETS.iter())
        .chain(custom_presets.iter())
        .find(|preset| preset.preset_id == wanted)
        .cloned()
        .unwrap_or_else(fallback)
}

/// Overlay a preset onto the master filter slot list.
///
/// This merges by slot identity, not by raw position: a slot the preset
/// mentions (same `op` and `col`) takes the preset's value, every other
/// slot keeps its built-in default. Views are replaced wholesale, with
/// absent keys defaulting to false.
pub fn apply_preset(
    defaults: &[FilterOption],
    preset: &TablePreset,
) -> (Vec<FilterOption>, ViewArgs) {
    let filter_options = defaults
        .iter()
        .map(|slot| {
            let mut option = slot.clone();
            if let Some(stored) = preset
                .filters
                .as_deref()
                .and_then(|filters| filters.iter().find(|f| f.same_slot(&slot.args)))
            {
                option.args = stored.clone();
            }
            option
        })
        .collect();
    (filter_options, preset.views.unwrap_or_default())
}

/// Project configured slots down to the filters actually sent to the
/// server: CDL-only slots are dropped unless the CDL view is active,
/// inactive slots are dropped, and slot order is preserved.
pub fn derive_effective_filters(options: &[FilterOption], views: &ViewArgs) -> Vec<FilterArgs> {
    options
        .iter()
        .filter(|option| !option.cdl_only || views.cdl_view)
        .filter(|option| option.args.is_active())
        .map(|option| option.args.clone())
        .collect()
}

fn comparable(filters: &[FilterArgs]) -> Vec<FilterArgs> {
    let mut normalized: Vec<FilterArgs> = filters.iter().map(FilterArgs::normalized).collect();
    normalized.sort_by(|a, b| a.col().cmp(b.col()));
    normalized
}

/// Whether current state has drifted from the given preset.
///
/// Filters compare as sets (order and multi-select value order are not
/// meaningful); views compare after defaulting both sides through
/// `ViewArgs::default()`.
pub fn detect_preset_drift(
    current_filters: &[FilterArgs],
    current_views: &ViewArgs,
    preset: &TablePreset,
) -> bool {
    let preset_filters = preset.filters.clone().unwrap_or_default();
    if comparable(current_filters) != comparable(&preset_filters) {
        return true;
    }
    *current_views != preset.views.unwrap_or_default()
}

/// Pure projection into the list-orders wire shape.
pub fn build_list_request(
    page_index: usize,
    page_size: usize,
    sorter: &SorterArgs,
    filters: &[FilterArgs],
    fuzzy: &str,
    views: &ViewArgs,
) -> AllOrdersRequest {
    AllOrdersRequest {
        page_index,
        page_size,
        sorter: sorter.clone(),
        filters: filters.to_vec(),
        fuzzy: fuzzy.to_string(),
        views: *views,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::constants::DEFAULT_FILTER_OPTIONS;

    fn in_filter(col: &str, values: &[&str]) -> FilterArgs {
        FilterArgs::In {
            col: col.to_string(),
            val: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn custom_preset(preset_id: i64, name: &str) -> TablePreset {
        TablePreset {
            preset_id,
            preset_name: name.to_string(),
            creator: Some("tester".to_string()),
            filters: Some(vec![in_filter("tags", &["Rush"])]),
            views: None,
        }
    }

    #[test]
    fn resolution_falls_back_to_all_preset() {
        // Missing parameter
        assert_eq!(resolve_active_preset(&[], None).preset_id, -100);
        // Non-numeric parameter
        assert_eq!(resolve_active_preset(&[], Some("abc")).preset_id, -100);
        // Numeric but unknown id
        assert_eq!(resolve_active_preset(&[], Some("9999")).preset_id, -100);
    }

    #[test]
    fn resolution_finds_builtin_and_custom_presets() {
        assert_eq!(
            resolve_active_preset(&[], Some("-101")).preset_name,
            "Rush"
        );
        assert_eq!(
            resolve_active_preset(&[], Some("-201")).preset_name,
            "Pending CDL"
        );

        let customs = vec![custom_preset(7, "My Preset")];
        assert_eq!(
            resolve_active_preset(&customs, Some("7")).preset_name,
            "My Preset"
        );
    }

    #[test]
    fn apply_preset_merges_by_slot_identity() {
        let preset = custom_preset(7, "My Preset");
        let (options, views) = apply_preset(&DEFAULT_FILTER_OPTIONS, &preset);

        // Same number of slots, same order.
        assert_eq!(options.len(), DEFAULT_FILTER_OPTIONS.len());
        for (slot, default) in options.iter().zip(DEFAULT_FILTER_OPTIONS.iter()) {
            assert!(slot.args.same_slot(&default.args));
            assert_eq!(slot.cdl_only, default.cdl_only);
        }

        // The mentioned slot takes the preset's value...
        let tags = options.iter().find(|o| o.args.col() == "tags").unwrap();
        assert_eq!(tags.args, in_filter("tags", &["Rush"]));
        // ...every other slot keeps its default.
        assert!(options
            .iter()
            .filter(|o| o.args.col() != "tags")
            .all(|o| !o.args.is_active()));
        assert_eq!(views, ViewArgs::default());
    }

    #[test]
    fn apply_preset_is_idempotent() {
        let preset = resolve_active_preset(&[], Some("-102"));
        let first = apply_preset(&DEFAULT_FILTER_OPTIONS, &preset);
        let second = apply_preset(&first.0, &preset);
        assert_eq!(first, second);
    }

    #[test]
    fn effective_filters_gate_cdl_slots_on_the_cdl_view() {
        let mut options = DEFAULT_FILTER_OPTIONS.clone();
        for option in options.iter_mut() {
            if option.args.col() == "material" {
                option.args = in_filter("material", &["Book"]);
            }
            if option.args.col() == "tags" {
                option.args = in_filter("tags", &["Rush"]);
            }
        }

        let hidden = derive_effective_filters(&options, &ViewArgs::default());
        assert_eq!(hidden, vec![in_filter("tags", &["Rush"])]);

        let cdl_views = ViewArgs {
            cdl_view: true,
            ..ViewArgs::default()
        };
        let shown = derive_effective_filters(&options, &cdl_views);
        assert_eq!(
            shown,
            vec![in_filter("tags", &["Rush"]), in_filter("material", &["Book"])]
        );
    }

    #[test]
    fn effective_filters_preserve_slot_order() {
        let mut options = DEFAULT_FILTER_OPTIONS.clone();
        for option in options.iter_mut() {
            match option.args.col() {
                "libraryNote" => {
                    option.args = FilterArgs::Like {
                        col: "libraryNote".into(),
                        val: "gift".into(),
                    }
                }
                "tags" => option.args = in_filter("tags", &["ILL"]),
                _ => {}
            }
        }
        let effective = derive_effective_filters(&options, &ViewArgs::default());
        // tags is defined before libraryNote in the master list.
        assert_eq!(
            effective.iter().map(|f| f.col()).collect::<Vec<_>>(),
            vec!["tags", "libraryNote"]
        );
    }

    #[test]
    fn drift_is_false_right_after_apply() {
        let preset = resolve_active_preset(&[], Some("-101"));
        let (options, views) = apply_preset(&DEFAULT_FILTER_OPTIONS, &preset);
        let filters = derive_effective_filters(&options, &views);
        assert!(!detect_preset_drift(&filters, &views, &preset));
    }

    #[test]
    fn drift_tracks_a_single_change_and_its_revert() {
        let preset = resolve_active_preset(&[], Some("-101"));
        let (options, views) = apply_preset(&DEFAULT_FILTER_OPTIONS, &preset);

        // Mutate one active filter value.
        let mut changed = options.clone();
        for option in changed.iter_mut() {
            if option.args.col() == "tags" {
                option.args = in_filter("tags", &["Rush", "NY"]);
            }
        }
        let filters = derive_effective_filters(&changed, &views);
        assert!(detect_preset_drift(&filters, &views, &preset));

        // Revert.
        let filters = derive_effective_filters(&options, &views);
        assert!(!detect_preset_drift(&filters, &views, &preset));

        // Toggle one view flag.
        let toggled = ViewArgs {
            prioritize: true,
            ..views
        };
        assert!(detect_preset_drift(&filters, &toggled, &preset));
        assert!(!detect_preset_drift(&filters, &views, &preset));
    }

    #[test]
    fn drift_ignores_filter_order_and_multi_select_order() {
        let preset = TablePreset {
            preset_id: 3,
            preset_name: "Two Slots".into(),
            creator: None,
            filters: Some(vec![
                in_filter("tags", &["Rush", "NY"]),
                FilterArgs::Like {
                    col: "title".into(),
                    val: "atlas".into(),
                },
            ]),
            views: None,
        };
        // Same set, different list order and different value order.
        let current = vec![
            FilterArgs::Like {
                col: "title".into(),
                val: "atlas".into(),
            },
            in_filter("tags", &["NY", "Rush"]),
        ];
        assert!(!detect_preset_drift(&current, &ViewArgs::default(), &preset));
    }

    #[test]
    fn rush_filter_matches_the_rush_preset() {
        // Manually setting tags=["Rush"] produces the same effective
        // filters as navigating to the built-in Rush preset.
        let mut options = DEFAULT_FILTER_OPTIONS.clone();
        for option in options.iter_mut() {
            if option.args.col() == "tags" {
                option.args = in_filter("tags", &["Rush"]);
            }
        }
        let manual = derive_effective_filters(&options, &ViewArgs::default());
        assert_eq!(manual, vec![in_filter("tags", &["Rush"])]);

        let preset = resolve_active_preset(&[], Some("-101"));
        let (preset_options, preset_views) = apply_preset(&DEFAULT_FILTER_OPTIONS, &preset);
        let from_preset = derive_effective_filters(&preset_options, &preset_views);
        assert_eq!(manual, from_preset);
        assert!(!detect_preset_drift(&manual, &preset_views, &preset));
    }

    #[test]
    fn cdl_preset_drifts_after_extra_view_toggle() {
        let preset = resolve_active_preset(&[], Some("-102"));
        let (options, views) = apply_preset(&DEFAULT_FILTER_OPTIONS, &preset);
        assert!(views.cdl_view);

        let filters = derive_effective_filters(&options, &views);
        assert!(!detect_preset_drift(&filters, &views, &preset));

        let toggled = ViewArgs {
            pending_cdl: true,
            ..views
        };
        assert!(detect_preset_drift(&filters, &toggled, &preset));
    }

    #[test]
    fn list_request_projection_is_exact() {
        let sorter = SorterArgs {
            col: "createdDate".into(),
            desc: true,
        };
        let filters = vec![FilterArgs::Between {
            col: "createdDate".into(),
            val: ["2024-01-01".into(), "2024-01-31".into()],
        }];
        let request = build_list_request(2, 25, &sorter, &filters, "", &ViewArgs::default());
        assert_eq!(
            request,
            AllOrdersRequest {
                page_index: 2,
                page_size: 25,
                sorter,
                filters,
                fuzzy: String::new(),
                views: ViewArgs::default(),
            }
        );
    }
}
