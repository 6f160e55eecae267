use leptos::prelude::*;

use crate::domain::orders::columns::DEFAULT_COLUMN_OPTIONS;
use crate::domain::orders::state::OrderTableState;

/// Column visibility editor, staged like the filter panel. CDL-gated
/// columns stay listed here; the table hides them when the CDL view is
/// off, so toggles survive view switches.
#[component]
pub fn ColumnPanel(state: RwSignal<OrderTableState>, on_close: Callback<()>) -> impl IntoView {
    let staged = RwSignal::new(state.with_untracked(|s| s.column_options.clone()));

    view! {
        <div style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.35); display: flex; align-items: center; justify-content: center; z-index: 20;">
            <div style="background: white; border-radius: 6px; padding: 18px 22px; width: 640px; max-height: 80vh; overflow: auto; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.2);">
                <h3 style="margin: 0 0 14px 0; font-size: 16px;">{"Columns"}</h3>
                <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 6px 16px;">
                    {move || staged
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, column)| {
                            let label = column.display_title();
                            let cdl_only = column.cdl_only;
                            view! {
                                <label style="display: flex; gap: 6px; align-items: center; font-size: 13px; cursor: pointer;">
                                    <input
                                        type="checkbox"
                                        prop:checked=column.visible
                                        on:change=move |ev| staged.update(|options| {
                                            options[index].visible = event_target_checked(&ev);
                                        })
                                    />
                                    <span>{label}</span>
                                    {cdl_only.then(|| view! {
                                        <span style="color: #531dab; font-size: 11px;">{"CDL"}</span>
                                    })}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 14px;">
                    <button
                        style="padding: 5px 14px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                        on:click=move |_| staged.set(DEFAULT_COLUMN_OPTIONS.clone())
                    >
                        {"Defaults"}
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
                            state.update(|s| s.commit_column_options(staged.get_untracked()));
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
