use contracts::metadata::MetaData;
use contracts::orders::{FilterArgs, FilterOption};
use leptos::prelude::*;

use crate::domain::orders::columns::header_case;
use crate::domain::orders::constants::DEFAULT_FILTER_OPTIONS;
use crate::domain::orders::state::OrderTableState;

const INPUT_STYLE: &str =
    "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; font-size: 13px; width: 100%; box-sizing: border-box;";

/// The filter editor. Edits apply to a staged copy of the slot list;
/// nothing reaches the table state until OK.
#[component]
pub fn FilterPanel(
    state: RwSignal<OrderTableState>,
    metadata: ReadSignal<MetaData>,
    on_close: Callback<()>,
) -> impl IntoView {
    let staged = RwSignal::new(state.with_untracked(|s| s.filter_options.clone()));
    let cdl_view = state.with_untracked(|s| s.views.cdl_view);

    let set_in = move |index: usize, raw: String| {
        staged.update(|options| {
            if let FilterArgs::In { val, .. } = &mut options[index].args {
                *val = raw
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect();
            }
        });
    };

    let set_between = move |index: usize, slot: usize, raw: String| {
        staged.update(|options| {
            if let FilterArgs::Between { val, .. } = &mut options[index].args {
                val[slot] = raw;
            }
        });
    };

    let set_like = move |index: usize, raw: String| {
        staged.update(|options| {
            if let FilterArgs::Like { val, .. } = &mut options[index].args {
                *val = raw;
            }
        });
    };

    let row = move |index: usize, option: FilterOption| {
        let title = option
            .title
            .clone()
            .unwrap_or_else(|| header_case(option.args.col()));
        let hints_id = format!("filter-hints-{}", option.args.col());
        let hints = option
            .meta_data_index
            .map(|meta_index| metadata.with(|data| meta_index.values(data).to_vec()))
            .unwrap_or_default();
        let editor = match option.args {
            FilterArgs::In { val, .. } => view! {
                <input
                    style=INPUT_STYLE
                    type="text"
                    placeholder="Comma-separated values"
                    list=hints_id.clone()
                    prop:value=val.join(", ")
                    on:change=move |ev| set_in(index, event_target_value(&ev))
                />
                <datalist id=hints_id>
                    {hints
                        .into_iter()
                        .map(|value| view! { <option value=value></option> })
                        .collect_view()}
                </datalist>
            }
            .into_any(),
            FilterArgs::Between { val, .. } => {
                let [from, to] = val;
                view! {
                    <div style="display: flex; gap: 6px; align-items: center;">
                        <input
                            style=INPUT_STYLE
                            type="date"
                            prop:value=from
                            on:change=move |ev| set_between(index, 0, event_target_value(&ev))
                        />
                        <span>{"to"}</span>
                        <input
                            style=INPUT_STYLE
                            type="date"
                            prop:value=to
                            on:change=move |ev| set_between(index, 1, event_target_value(&ev))
                        />
                    </div>
                }
                .into_any()
            }
            FilterArgs::Like { val, .. } => view! {
                <input
                    style=INPUT_STYLE
                    type="text"
                    placeholder="Contains..."
                    prop:value=val
                    on:change=move |ev| set_like(index, event_target_value(&ev))
                />
            }
            .into_any(),
        };
        view! {
            <div style="display: grid; grid-template-columns: 12rem 1fr; gap: 10px; align-items: center; margin-bottom: 8px;">
                <label style="font-size: 13px; text-align: right; color: #333;">{title}</label>
                {editor}
            </div>
        }
    };

    view! {
        <div style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.35); display: flex; align-items: center; justify-content: center; z-index: 20;">
            <div style="background: white; border-radius: 6px; padding: 18px 22px; width: 560px; max-height: 80vh; overflow: auto; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.2);">
                <h3 style="margin: 0 0 14px 0; font-size: 16px;">{"Filters"}</h3>
                {move || staged
                    .get()
                    .into_iter()
                    .enumerate()
                    .filter(|(_, option)| !option.cdl_only || cdl_view)
                    .map(|(index, option)| row(index, option))
                    .collect_view()}
                <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 14px;">
                    <button
                        style="padding: 5px 14px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                        on:click=move |_| staged.set(DEFAULT_FILTER_OPTIONS.clone())
                    >
                        {"Clear All"}
                    </button>
                    <button
                        style="padding: 5px 14px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                        on:click=move |_| on_close.run(())
                    >
                        {"Cancel"}
                    </button>
                    <button
                        style="padding: 5px 14px; cursor: pointer; border: none; border-radius: 4px; background: #1677ff; color: white;"
                        on:click=move |_| {
                            state.update(|s| s.commit_filter_options(staged.get_untracked()));
                            on_close.run(());
                        }
                    >
                        {"OK"}
                    </button>
                </div>
            </div>
        </div>
    }
}
