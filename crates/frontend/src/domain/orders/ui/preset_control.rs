use contracts::presets::{CreatePresetArgs, TablePreset, UpdatePresetArgs};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::constants::{BUILTIN_TAG_PRESETS, BUILTIN_VIEW_PRESETS};
use crate::domain::orders::state::OrderTableState;
use crate::domain::presets::api;
use crate::layout::global_context::use_app_context;

/// Preset selector and lifecycle actions. The `(*)` marker next to the
/// name means the committed filters or views have drifted away from what
/// the selected preset stores.
#[component]
pub fn PresetControl(
    state: RwSignal<OrderTableState>,
    custom_presets: ReadSignal<Vec<TablePreset>>,
    select_preset: Callback<i64>,
    refetch: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (show_name_editor, set_show_name_editor) = signal(false);
    // Rename keeps the stored filters; Save As New captures current ones.
    let (renaming, set_renaming) = signal(false);
    let (name_input, set_name_input) = signal(String::new());

    let current = move || state.with(|s| s.current_preset.clone());
    let has_drift = move || state.with(|s| s.has_preset_drift());
    let is_builtin = move || current().is_builtin();

    let save = move |_| {
        let preset = state.with_untracked(|s| s.current_preset.clone());
        if preset.is_builtin() {
            return;
        }
        let args = state.with_untracked(|s| UpdatePresetArgs {
            preset_id: preset.preset_id,
            preset_name: preset.preset_name.clone(),
            filters: s.effective_filters(),
            views: s.views,
        });
        spawn_local(async move {
            match api::update_preset(&args).await {
                Ok(()) => {
                    ctx.show_message("Preset saved.");
                    refetch.run(());
                }
                Err(e) => ctx.show_error(&format!("Failed to save preset: {}", e)),
            }
        });
    };

    let submit_name = move |_| {
        let name = name_input.get_untracked().trim().to_string();
        if name.is_empty() {
            ctx.show_error("Preset name cannot be empty.");
            return;
        }
        set_show_name_editor.set(false);
        if renaming.get_untracked() {
            let preset = state.with_untracked(|s| s.current_preset.clone());
            let args = UpdatePresetArgs {
                preset_id: preset.preset_id,
                preset_name: name,
                filters: preset.filters.clone().unwrap_or_default(),
                views: preset.views.unwrap_or_default(),
            };
            spawn_local(async move {
                match api::update_preset(&args).await {
                    Ok(()) => {
                        ctx.show_message("Preset renamed.");
                        refetch.run(());
                        select_preset.run(args.preset_id);
                    }
                    Err(e) => ctx.show_error(&format!("Failed to rename preset: {}", e)),
                }
            });
        } else {
            let args = state.with_untracked(|s| CreatePresetArgs {
                preset_name: name,
                filters: s.effective_filters(),
                views: s.views,
            });
            spawn_local(async move {
                match api::create_preset(&args).await {
                    Ok(response) => {
                        ctx.show_message("Preset created.");
                        refetch.run(());
                        select_preset.run(response.preset_id);
                    }
                    Err(e) => ctx.show_error(&format!("Failed to create preset: {}", e)),
                }
            });
        }
    };

    let delete = move |_| {
        let preset = state.with_untracked(|s| s.current_preset.clone());
        if preset.is_builtin() {
            return;
        }
        spawn_local(async move {
            match api::delete_preset(preset.preset_id).await {
                Ok(()) => {
                    ctx.show_message("Preset deleted.");
                    refetch.run(());
                    // Fall back to "All".
                    select_preset.run(BUILTIN_TAG_PRESETS[0].preset_id);
                }
                Err(e) => ctx.show_error(&format!("Failed to delete preset: {}", e)),
            }
        });
    };

    let reapply = move |_| {
        let preset = state.with_untracked(|s| s.current_preset.clone());
        state.update(|s| s.apply_preset(&preset));
    };

    let option_view = move |preset: TablePreset| {
        let id = preset.preset_id;
        view! {
            <option
                value=id.to_string()
                selected=move || state.with(|s| s.current_preset.preset_id == id)
            >
                {preset.preset_name.clone()}
            </option>
        }
    };

    view! {
        <div style="display: flex; gap: 6px; align-items: center;">
            <select
                style="padding: 5px 8px; border: 1px solid #ccc; border-radius: 4px; font-size: 13px; min-width: 11rem;"
                on:change=move |ev| {
                    if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                        select_preset.run(id);
                    }
                }
            >
                <optgroup label="Tag Presets">
                    {BUILTIN_TAG_PRESETS.iter().cloned().map(option_view).collect_view()}
                </optgroup>
                <optgroup label="View Presets">
                    {BUILTIN_VIEW_PRESETS.iter().cloned().map(option_view).collect_view()}
                </optgroup>
                <optgroup label="My Presets">
                    {move || custom_presets
                        .get()
                        .into_iter()
                        .map(option_view)
                        .collect_view()}
                </optgroup>
            </select>
            {move || has_drift().then(|| view! {
                <span title="Filters differ from the selected preset" style="color: #d46b08; font-weight: bold;">
                    {"(*)"}
                </span>
            })}
            <button
                style="padding: 4px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                disabled=move || is_builtin() || !has_drift()
                on:click=save
            >
                {"Save"}
            </button>
            <button
                style="padding: 4px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                on:click=move |_| {
                    set_renaming.set(false);
                    set_name_input.set(String::new());
                    set_show_name_editor.set(true);
                }
            >
                {"Save As New"}
            </button>
            <button
                style="padding: 4px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                disabled=is_builtin
                on:click=move |_| {
                    set_renaming.set(true);
                    set_name_input.set(current().preset_name);
                    set_show_name_editor.set(true);
                }
            >
                {"Rename"}
            </button>
            <button
                style="padding: 4px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                disabled=is_builtin
                on:click=delete
            >
                {"Delete"}
            </button>
            <button
                style="padding: 4px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                title="Discard local edits and reload the preset"
                disabled=move || !has_drift()
                on:click=reapply
            >
                {"Re-Apply"}
            </button>

            {move || show_name_editor.get().then(|| view! {
                <div style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.35); display: flex; align-items: center; justify-content: center; z-index: 20;">
                    <div style="background: white; border-radius: 6px; padding: 18px 22px; width: 360px; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.2);">
                        <h3 style="margin: 0 0 12px 0; font-size: 15px;">
                            {move || if renaming.get() { "Rename Preset" } else { "New Preset" }}
                        </h3>
                        <input
                            style="padding: 5px 8px; border: 1px solid #ccc; border-radius: 4px; font-size: 13px; width: 100%; box-sizing: border-box;"
                            type="text"
                            placeholder="Preset name"
                            prop:value=name_input
                            on:input=move |ev| set_name_input.set(event_target_value(&ev))
                        />
                        <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;">
                            <button
                                style="padding: 5px 14px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                                on:click=move |_| set_show_name_editor.set(false)
                            >
                                {"Cancel"}
                            </button>
                            <button
                                style="padding: 5px 14px; cursor: pointer; border: none; border-radius: 4px; background: #1677ff; color: white;"
                                on:click=submit_name
                            >
                                {"OK"}
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
