use leptos::prelude::*;

use super::global_context::use_app_context;

/// Renders the single app-wide toast message, bottom-right.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.toast.get().map(|toast| {
            let background = if toast.is_error { "#c0392b" } else { "#2d7a46" };
            view! {
                <div style=format!(
                    "position: fixed; right: 20px; bottom: 20px; z-index: 1000; padding: 10px 16px; border-radius: 6px; color: white; font-size: 14px; box-shadow: 0 2px 8px rgba(0,0,0,0.3); background: {};",
                    background
                )>
                    {toast.text}
                </div>
            }
        })}
    }
}
