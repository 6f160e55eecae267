use leptos::prelude::*;

use super::global_context::{use_app_context, Page};
use crate::system::auth::context::use_auth;
use crate::system::auth::{api, storage};
use contracts::system::auth::Role;

const PAGES: [Page; 6] = [
    Page::Overview,
    Page::Orders,
    Page::UploadData,
    Page::ExportReport,
    Page::Users,
    Page::Vendors,
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let is_admin = move || {
        auth_state
            .get()
            .user_info
            .map(|info| info.role == Role::Admin)
            .unwrap_or(false)
    };

    let logout = move |_| {
        leptos::task::spawn_local(async move {
            // Best effort; the local session is cleared either way.
            let _ = api::logout().await;
            storage::clear_token();
            set_auth_state.set(Default::default());
        });
    };

    view! {
        <nav style="width: 200px; background: #1f1f2e; color: #eee; display: flex; flex-direction: column; flex-shrink: 0;">
            <div style="padding: 16px; font-size: 18px; font-weight: 600; border-bottom: 1px solid #333;">
                {"LibSense"}
            </div>
            {PAGES
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            style=move || format!(
                                "text-align: left; padding: 10px 16px; border: none; cursor: pointer; font-size: 14px; color: #eee; background: {};",
                                if ctx.active_page.get() == page { "#3b3b54" } else { "transparent" }
                            )
                            on:click=move |_| ctx.active_page.set(page)
                        >
                            {page.title()}
                        </button>
                    }
                })
                .collect_view()}
            <div style="margin-top: auto; padding: 12px 16px; border-top: 1px solid #333; font-size: 13px;">
                <div style="margin-bottom: 8px; color: #aaa;">
                    {move || auth_state.get().user_info.map(|info| info.username).unwrap_or_default()}
                    {move || if is_admin() { " (admin)" } else { "" }}
                </div>
                <button
                    style="padding: 4px 10px; cursor: pointer; background: #3b3b54; color: #eee; border: none; border-radius: 4px;"
                    on:click=logout
                >
                    {"Log out"}
                </button>
            </div>
        </nav>
    }
}
