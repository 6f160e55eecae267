use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::state::OrderTableState;
use crate::shared::url_state;

const DEBOUNCE_MS: u32 = 400;

/// Debounced free-text search over title, order number and barcode. The
/// committed term is mirrored into the `search` URL parameter.
#[component]
pub fn FuzzySearch(state: RwSignal<OrderTableState>) -> impl IntoView {
    let (input, set_input) = signal(String::new());
    let debounce_seq = StoredValue::new(0u64);

    // The committed term can change from outside (preset selection,
    // back/forward); the box follows it.
    Effect::new(move |_| {
        let committed = state.with(|s| s.fuzzy.clone());
        if input.get_untracked() != committed {
            set_input.set(committed);
        }
    });

    let commit = move |term: String| {
        if term.is_empty() {
            url_state::remove_param("search");
        } else {
            url_state::set_param("search", &term);
        }
        state.update(|s| s.set_fuzzy(term));
    };

    let on_input = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        set_input.set(term.clone());
        let seq = debounce_seq.get_value() + 1;
        debounce_seq.set_value(seq);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce_seq.get_value() == seq {
                commit(term);
            }
        });
    };

    view! {
        <input
            style="padding: 5px 10px; border: 1px solid #ccc; border-radius: 4px; font-size: 13px; width: 16rem;"
            type="search"
            placeholder="Search title, order number, barcode..."
            prop:value=input
            on:input=on_input
        />
    }
}
