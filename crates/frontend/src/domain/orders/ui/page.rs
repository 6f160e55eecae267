use contracts::metadata::MetaData;
use contracts::orders::{AllOrdersResponse, MarkAttentionArgs, MarkCheckArgs};
use contracts::presets::TablePreset;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::metadata::api as metadata_api;
use crate::domain::orders::api;
use crate::domain::orders::engine;
use crate::domain::orders::state::create_state;
use crate::domain::presets::api as presets_api;
use crate::layout::global_context::use_app_context;
use crate::shared::url_state;

use super::column_panel::ColumnPanel;
use super::details::OrderEditorModal;
use super::filter_panel::FilterPanel;
use super::fuzzy_search::FuzzySearch;
use super::preset_control::PresetControl;
use super::table::OrdersTable;
use super::view_toggles::ViewToggles;

/// The order table route: owns the query state engine instance and wires
/// it to the URL, the preset store, and the list-orders endpoint.
#[component]
pub fn OrderTablePage() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_state();

    let (orders, set_orders) = signal(AllOrdersResponse::default());
    let (is_loading, set_is_loading) = signal(false);
    let (load_error, set_load_error) = signal(false);
    let (custom_presets, set_custom_presets) = signal(Vec::<TablePreset>::new());
    let (metadata, set_metadata) = signal(MetaData::default());

    let (show_filter_panel, set_show_filter_panel) = signal(false);
    let (show_column_panel, set_show_column_panel) = signal(false);
    let (editor_target, set_editor_target) = signal(Option::<(i64, bool)>::None);

    // Bumped whenever the query string changes under us (popstate or a
    // programmatic push), so URL-derived state re-resolves.
    let url_version = RwSignal::new(0u64);
    // Sequence number of the newest list-orders request in flight.
    let request_seq = StoredValue::new(0u64);
    let reload_tick = RwSignal::new(0u64);
    let reload = move || reload_tick.update(|v| *v += 1);

    let refetch_presets = move || {
        spawn_local(async move {
            match presets_api::fetch_all_presets().await {
                Ok(list) => set_custom_presets.set(list),
                Err(e) => ctx.show_error(&format!("Failed to fetch presets: {}", e)),
            }
        });
    };
    refetch_presets();

    spawn_local(async move {
        match metadata_api::fetch_metadata().await {
            Ok(data) => set_metadata.set(data),
            Err(e) => ctx.show_error(&format!("Failed to fetch metadata: {}", e)),
        }
    });

    url_state::on_popstate(move || url_version.update(|v| *v += 1));

    // Preset resolution re-runs on every history event and whenever the
    // custom preset list refetches; it is a pure function of both.
    Effect::new(move |_| {
        url_version.track();
        let customs = custom_presets.get();
        let resolved =
            engine::resolve_active_preset(&customs, url_state::get_param("preset").as_deref());
        let fuzzy = url_state::get_param("search").unwrap_or_default();
        state.update(|s| {
            if s.current_preset != resolved {
                s.apply_preset(&resolved);
            }
            s.set_fuzzy(fuzzy);
        });
    });

    // The order-editor target lives in the URL (`detail` + `cdl`).
    Effect::new(move |_| {
        url_version.track();
        let target = url_state::get_param("detail")
            .and_then(|raw| raw.parse::<i64>().ok())
            .map(|id| (id, url_state::get_param("cdl").as_deref() == Some("true")));
        set_editor_target.set(target);
    });

    // Deduplicates state writes that leave the request unchanged.
    let current_request = Memo::new(move |_| state.with(|s| s.list_request()));

    // Reload whenever anything feeding the request changes. Responses
    // apply only while still the newest request (latest wins).
    Effect::new(move |_| {
        reload_tick.track();
        let request = current_request.get();
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_is_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_all_orders(&request).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(response) => {
                    set_orders.set(response);
                    set_load_error.set(false);
                }
                Err(e) => {
                    log::error!("failed to fetch orders: {}", e);
                    set_load_error.set(true);
                    ctx.show_error("Failed to fetch orders from server.");
                }
            }
            set_is_loading.set(false);
        });
    });

    let select_preset = Callback::new(move |preset_id: i64| {
        let mut params = url_state::query_params();
        params.insert("preset".to_string(), preset_id.to_string());
        // Selecting a preset supersedes any fuzzy search.
        params.remove("search");
        url_state::push_query(&params);
        url_version.update(|v| *v += 1);
    });

    // Opening the editor pushes one history entry carrying both params,
    // so the back button closes it again through the popstate hook.
    let open_editor = Callback::new(move |(book_id, is_cdl): (i64, bool)| {
        let mut params = url_state::query_params();
        params.insert("detail".to_string(), book_id.to_string());
        params.insert(
            "cdl".to_string(),
            if is_cdl { "true" } else { "false" }.to_string(),
        );
        url_state::push_query(&params);
        set_editor_target.set(Some((book_id, is_cdl)));
    });

    let close_editor = Callback::new(move |_: ()| {
        let mut params = url_state::query_params();
        params.remove("detail");
        params.remove("cdl");
        url_state::replace_query(&params);
        set_editor_target.set(None);
    });

    let on_saved = Callback::new(move |_: ()| reload());

    let mark_checked = move |checked: bool| {
        let ids = state.with_untracked(|s| s.selected_ids.clone());
        if ids.is_empty() {
            ctx.show_error("No rows selected.");
            return;
        }
        spawn_local(async move {
            let args = MarkCheckArgs {
                id: ids,
                checked,
                date: None,
            };
            match api::mark_check(&args).await {
                Ok(()) => {
                    ctx.show_message("Orders updated.");
                    reload();
                }
                Err(e) => ctx.show_error(&format!("Failed to update orders: {}", e)),
            }
        });
    };

    let mark_needs_attention = move |attention: bool| {
        let ids = state.with_untracked(|s| s.selected_ids.clone());
        if ids.is_empty() {
            ctx.show_error("No rows selected.");
            return;
        }
        spawn_local(async move {
            let args = MarkAttentionArgs { id: ids, attention };
            match api::mark_attention(&args).await {
                Ok(()) => {
                    ctx.show_message("Orders updated.");
                    reload();
                }
                Err(e) => ctx.show_error(&format!("Failed to update orders: {}", e)),
            }
        });
    };

    let selection_count = move || state.with(|s| s.selected_ids.len());

    view! {
        <div style="display: flex; flex-direction: column; height: 100%; overflow: hidden;">
            <div style="display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 10px 14px; background: white; border-bottom: 1px solid #ddd;">
                <PresetControl
                    state=state
                    custom_presets=custom_presets
                    select_preset=select_preset
                    refetch=Callback::new(move |_: ()| refetch_presets())
                />
                <FuzzySearch state=state />
                <button
                    class="toolbar-button"
                    style="padding: 6px 12px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                    on:click=move |_| set_show_filter_panel.set(true)
                >
                    {"Filters..."}
                </button>
                <button
                    style="padding: 6px 12px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                    on:click=move |_| set_show_column_panel.set(true)
                >
                    {"Columns..."}
                </button>
                <ViewToggles state=state />
                <div style="margin-left: auto; display: flex; gap: 8px; align-items: center; font-size: 13px;">
                    <span style="color: #666;">
                        {move || format!("Selected: {}", selection_count())}
                    </span>
                    <button
                        style="padding: 4px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                        on:click=move |_| mark_checked(true)
                    >
                        {"Mark Checked"}
                    </button>
                    <button
                        style="padding: 4px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                        on:click=move |_| mark_needs_attention(true)
                    >
                        {"Mark Attention"}
                    </button>
                </div>
            </div>

            {move || load_error.get().then(|| view! {
                <div style="background: #fdecea; color: #b3261e; padding: 8px 14px; font-size: 14px;">
                    {"Failed to fetch orders from server. Showing last loaded results."}
                </div>
            })}

            <OrdersTable
                state=state
                orders=orders
                is_loading=is_loading
                on_edit=open_editor
            />

            {move || show_filter_panel.get().then(|| view! {
                <FilterPanel
                    state=state
                    metadata=metadata
                    on_close=Callback::new(move |_: ()| set_show_filter_panel.set(false))
                />
            })}

            {move || show_column_panel.get().then(|| view! {
                <ColumnPanel
                    state=state
                    on_close=Callback::new(move |_: ()| set_show_column_panel.set(false))
                />
            })}

            {move || editor_target.get().map(|(book_id, is_cdl)| view! {
                <OrderEditorModal
                    book_id=book_id
                    is_cdl=is_cdl
                    on_close=close_editor
                    on_saved=on_saved
                />
            })}
        </div>
    }
}
