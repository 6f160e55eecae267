use contracts::orders::ViewArgs;
use leptos::prelude::*;

use crate::domain::orders::state::OrderTableState;

/// The four view toggles. Each one is part of the query, so flipping any
/// of them re-runs the search from the first page.
#[component]
pub fn ViewToggles(state: RwSignal<OrderTableState>) -> impl IntoView {
    let toggle = move |mutate: fn(&mut ViewArgs, bool), on: bool| {
        state.update(|s| {
            let mut views = s.views;
            mutate(&mut views, on);
            s.set_views(views);
        });
    };

    let checkbox = move |label: &'static str,
                         read: fn(&ViewArgs) -> bool,
                         mutate: fn(&mut ViewArgs, bool)| {
        view! {
            <label style="display: flex; gap: 4px; align-items: center; font-size: 13px; cursor: pointer;">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| read(&s.views))
                    on:change=move |ev| toggle(mutate, event_target_checked(&ev))
                />
                {label}
            </label>
        }
    };

    view! {
        <div style="display: flex; gap: 10px; align-items: center;">
            {checkbox("CDL View", |v| v.cdl_view, |v, on| v.cdl_view = on)}
            {checkbox(
                "Pending Rush-Local",
                |v| v.pending_rush_local,
                |v, on| v.pending_rush_local = on,
            )}
            {checkbox("Pending CDL", |v| v.pending_cdl, |v, on| v.pending_cdl = on)}
            {checkbox("Prioritize", |v| v.prioritize, |v, on| v.prioritize = on)}
        </div>
    }
}
