use contracts::reports::SendReportArgs;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::metadata::api as metadata_api;
use crate::layout::global_context::use_app_context;
use crate::shared::api_utils::post_json_unit;
use crate::system::auth::context::use_auth;

async fn send_report(args: &SendReportArgs) -> Result<(), String> {
    post_json_unit("/report/send-report", args).await
}

/// Schedule report exports to an email address. The report list comes
/// from server metadata, so new report types need no client change.
#[component]
pub fn ExportReportPage() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    let (report_types, set_report_types) = signal(Vec::<String>::new());
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (email, set_email) = signal(String::new());
    let (is_sending, set_is_sending) = signal(false);

    spawn_local(async move {
        match metadata_api::fetch_metadata().await {
            Ok(data) => set_report_types.set(data.supported_report),
            Err(e) => ctx.show_error(&format!("Failed to fetch metadata: {}", e)),
        }
    });

    let toggle = move |report: String, on: bool| {
        set_selected.update(|list| {
            list.retain(|r| r != &report);
            if on {
                list.push(report);
            }
        });
    };

    let submit = move |_| {
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() || !address.contains('@') {
            ctx.show_error("Enter a valid email address.");
            return;
        }
        let report_type = selected.get_untracked();
        if report_type.is_empty() {
            ctx.show_error("Select at least one report.");
            return;
        }
        let username = auth_state
            .get_untracked()
            .user_info
            .map(|info| info.username)
            .unwrap_or_default();
        let args = SendReportArgs {
            username,
            email: address,
            report_type,
        };
        set_is_sending.set(true);
        spawn_local(async move {
            match send_report(&args).await {
                Ok(()) => ctx.show_message("Report scheduled. Check your inbox shortly."),
                Err(e) => ctx.show_error(&format!("Failed to schedule report: {}", e)),
            }
            set_is_sending.set(false);
        });
    };

    view! {
        <div style="max-width: 560px; margin: 40px auto; background: white; border-radius: 6px; padding: 22px 26px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1);">
            <h2 style="margin: 0 0 16px 0; font-size: 18px;">{"Export Report"}</h2>
            <div style="margin-bottom: 14px;">
                {move || {
                    let reports = report_types.get();
                    if reports.is_empty() {
                        view! {
                            <span style="color: #666; font-size: 13px;">
                                {"No reports available."}
                            </span>
                        }
                        .into_any()
                    } else {
                        reports
                            .into_iter()
                            .map(|report| {
                                let label = report.clone();
                                let value = report.clone();
                                view! {
                                    <label style="display: flex; gap: 6px; align-items: center; font-size: 13px; cursor: pointer; margin-bottom: 4px;">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.with(|list| list.contains(&value))
                                            on:change={
                                                let report = report.clone();
                                                move |ev| toggle(report.clone(), event_target_checked(&ev))
                                            }
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <input
                style="padding: 5px 10px; border: 1px solid #ccc; border-radius: 4px; font-size: 13px; width: 100%; box-sizing: border-box; margin-bottom: 14px;"
                type="email"
                placeholder="Email address"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button
                style="padding: 6px 18px; cursor: pointer; border: none; border-radius: 4px; background: #1677ff; color: white;"
                disabled=is_sending
                on:click=submit
            >
                {move || if is_sending.get() { "Sending..." } else { "Send" }}
            </button>
        </div>
    }
}
