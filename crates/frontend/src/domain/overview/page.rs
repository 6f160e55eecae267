use contracts::overview::Overview;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::orders::constants::BUILTIN_VIEW_PRESETS;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::url_state;
use crate::system::auth::context::use_auth;

/// The landing dashboard: pending counts that deep-link into the
/// matching order-table views, plus turnaround statistics.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    let (overview, set_overview) = signal(Overview::default());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_overview().await {
                Ok(data) => set_overview.set(data),
                Err(e) => ctx.show_error(&format!("Failed to fetch overview: {}", e)),
            }
        });
    });

    // Jump to the orders page with the given built-in preset selected;
    // the order table resolves it from the URL on mount.
    let goto_preset = move |preset_id: i64| {
        let mut params = url_state::query_params();
        params.insert("preset".to_string(), preset_id.to_string());
        params.remove("search");
        url_state::push_query(&params);
        ctx.active_page.set(Page::Orders);
    };

    let username = move || {
        auth_state
            .get()
            .user_info
            .map(|info| info.username)
            .unwrap_or_default()
    };

    let pending_rush_local = BUILTIN_VIEW_PRESETS[0].preset_id;
    let pending_cdl = BUILTIN_VIEW_PRESETS[1].preset_id;

    let pending_link = move |count: u64, label: &'static str, preset_id: i64| {
        view! {
            <li style="margin-bottom: 6px;">
                <span
                    style="cursor: pointer; color: #1677ff;"
                    on:click=move |_| goto_preset(preset_id)
                >
                    <strong>{count}</strong>
                    {format!(" {}", label)}
                </span>
            </li>
        }
    };

    view! {
        <div style="max-width: 860px; margin: 30px auto; display: flex; flex-direction: column; gap: 16px;">
            <div style="background: white; border-radius: 6px; padding: 20px 24px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1);">
                <h2 style="margin: 0 0 6px 0; font-size: 20px;">{"Welcome to LibSense."}</h2>
                <p style="margin: 0; color: #666;">
                    {move || format!("Have a nice day, {}!", username())}
                </p>
            </div>

            <div style="background: white; border-radius: 6px; padding: 20px 24px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1);">
                <p style="margin: 0 0 10px 0; color: #333;">
                    {"Here are some statistics for you:"}
                </p>
                <ul style="margin: 0; padding-left: 20px; font-size: 14px;">
                    {move || pending_link(
                        overview.get().local_rush_pending,
                        "Rush-Local orders pending to be checked.",
                        pending_rush_local,
                    )}
                    {move || pending_link(
                        overview.get().cdl_pending,
                        "CDL orders pending to be checked.",
                        pending_cdl,
                    )}
                </ul>
            </div>

            <div style="display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;">
                {move || overview
                    .get()
                    .turnaround_stats()
                    .into_iter()
                    .map(|stats| view! {
                        <div style="background: white; border-radius: 6px; padding: 16px 20px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1);">
                            <h4 style="margin: 0 0 10px 0; font-size: 14px;">{stats.title}</h4>
                            <div style="display: flex; gap: 24px; font-size: 13px;">
                                <div>
                                    <div style="color: #888;">{"Average"}</div>
                                    <div style="font-size: 18px;">{format!("{:.1} Days", stats.avg)}</div>
                                </div>
                                <div>
                                    <div style="color: #888;">{"Minimum"}</div>
                                    <div style="font-size: 18px;">{format!("{:.1} Days", stats.min)}</div>
                                </div>
                                <div>
                                    <div style="color: #888;">{"Maximum"}</div>
                                    <div style="font-size: 18px;">{format!("{:.1} Days", stats.max)}</div>
                                </div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
