use chrono::{Duration, Utc};
use contracts::orders::{CdlOnlyFields, OrderDetailArgs, OrderRecord, UpdateOrderArgs};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api;
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::format_date;

const FIELD_STYLE: &str =
    "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; font-size: 13px; width: 100%; box-sizing: border-box;";

/// Editor for one order. General flags and the tracking note are always
/// editable; the CDL section appears only for CDL orders.
#[component]
pub fn OrderEditorModal(
    book_id: i64,
    is_cdl: bool,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (record, set_record) = signal(Option::<OrderRecord>::None);
    let (load_failed, set_load_failed) = signal(false);

    let tracking_note = RwSignal::new(String::new());
    let checked = RwSignal::new(false);
    let check_anyway = RwSignal::new(false);
    let attention = RwSignal::new(false);
    let sensitive = RwSignal::new(false);
    let override_reminder = RwSignal::new(String::new());
    let cdl_staged = RwSignal::new(CdlOnlyFields::default());

    spawn_local(async move {
        let args = OrderDetailArgs {
            book_id,
            cdl_view: is_cdl,
        };
        match api::fetch_order_detail(&args).await {
            Ok(order) => {
                let base = order.general();
                tracking_note.set(base.tracking_note.clone().unwrap_or_default());
                checked.set(base.checked);
                attention.set(base.attention);
                sensitive.set(base.sensitive);
                override_reminder.set(base.override_reminder_time.clone().unwrap_or_default());
                if let Some(cdl) = order.cdl_fields() {
                    cdl_staged.set(cdl.clone());
                }
                set_record.set(Some(order));
            }
            Err(e) => {
                ctx.show_error(&format!("Failed to fetch order: {}", e));
                set_load_failed.set(true);
            }
        }
    });

    let save = move |_| {
        let reminder = override_reminder.get_untracked();
        let args = UpdateOrderArgs {
            book_id,
            tracking_note: Some(tracking_note.get_untracked()),
            checked: Some(checked.get_untracked()),
            check_anyway: checked
                .get_untracked()
                .then(|| check_anyway.get_untracked()),
            attention: Some(attention.get_untracked()),
            sensitive: Some(sensitive.get_untracked()),
            override_reminder_time: (!reminder.is_empty()).then_some(reminder),
            cdl: is_cdl.then(|| cdl_staged.get_untracked()),
        };
        spawn_local(async move {
            match api::update_order(&args).await {
                Ok(()) => {
                    ctx.show_message("Order saved.");
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => ctx.show_error(&format!("Failed to save order: {}", e)),
            }
        });
    };

    let create_cdl = move |_| {
        spawn_local(async move {
            match api::create_cdl(book_id).await {
                Ok(()) => {
                    ctx.show_message("CDL record created.");
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => ctx.show_error(&format!("Failed to create CDL record: {}", e)),
            }
        });
    };

    let delete_cdl = move |_| {
        spawn_local(async move {
            match api::delete_cdl(book_id).await {
                Ok(()) => {
                    ctx.show_message("CDL record deleted.");
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => ctx.show_error(&format!("Failed to delete CDL record: {}", e)),
            }
        });
    };

    let default_reminder = move |_| {
        let date = (Utc::now() + Duration::days(3)).format("%Y-%m-%d").to_string();
        override_reminder.set(date);
    };

    let flag = move |label: &'static str, signal: RwSignal<bool>| {
        view! {
            <label style="display: flex; gap: 6px; align-items: center; font-size: 13px; cursor: pointer;">
                <input
                    type="checkbox"
                    prop:checked=signal
                    on:change=move |ev| signal.set(event_target_checked(&ev))
                />
                {label}
            </label>
        }
    };

    let cdl_field = move |label: &'static str,
                          is_date: bool,
                          read: fn(&CdlOnlyFields) -> Option<String>,
                          write: fn(&mut CdlOnlyFields, Option<String>)| {
        view! {
            <div style="display: grid; grid-template-columns: 13rem 1fr; gap: 10px; align-items: center; margin-bottom: 6px;">
                <label style="font-size: 13px; text-align: right; color: #333;">{label}</label>
                <input
                    style=FIELD_STYLE
                    type={if is_date { "date" } else { "text" }}
                    prop:value=move || cdl_staged.with(|cdl| read(cdl).unwrap_or_default())
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        cdl_staged.update(|cdl| write(cdl, (!raw.is_empty()).then_some(raw)));
                    }
                />
            </div>
        }
    };

    view! {
        <div style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.35); display: flex; align-items: center; justify-content: center; z-index: 20;">
            <div style="background: white; border-radius: 6px; padding: 18px 22px; width: 640px; max-height: 85vh; overflow: auto; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.2);">
                {move || match record.get() {
                    None => view! {
                        <div style="padding: 30px; text-align: center; color: #666;">
                            {if load_failed.get() { "Failed to load the order." } else { "Loading..." }}
                        </div>
                    }
                    .into_any(),
                    Some(order) => {
                        let base = order.general().clone();
                        view! {
                            <h3 style="margin: 0 0 4px 0; font-size: 16px;">
                                {base.title.clone().unwrap_or_else(|| "(untitled)".to_string())}
                            </h3>
                            <div style="color: #666; font-size: 12px; margin-bottom: 12px;">
                                {format!(
                                    "Order {} | Barcode {} | Created {}",
                                    base.order_number.clone().unwrap_or_default(),
                                    base.barcode.clone().unwrap_or_default(),
                                    base.created_date
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_default(),
                                )}
                            </div>

                            <div style="display: flex; gap: 14px; margin-bottom: 10px;">
                                {flag("Checked", checked)}
                                {move || checked.get().then(|| flag("Check anyway", check_anyway))}
                                {flag("Needs attention", attention)}
                                {flag("Sensitive", sensitive)}
                            </div>

                            <div style="display: grid; grid-template-columns: 13rem 1fr; gap: 10px; align-items: center; margin-bottom: 6px;">
                                <label style="font-size: 13px; text-align: right; color: #333;">
                                    {"Tracking Note"}
                                </label>
                                <textarea
                                    style=FIELD_STYLE
                                    rows=3
                                    prop:value=tracking_note
                                    on:change=move |ev| tracking_note.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <div style="display: grid; grid-template-columns: 13rem 1fr; gap: 10px; align-items: center; margin-bottom: 6px;">
                                <label style="font-size: 13px; text-align: right; color: #333;">
                                    {"Override Reminder"}
                                </label>
                                <div style="display: flex; gap: 6px;">
                                    <input
                                        style=FIELD_STYLE
                                        type="date"
                                        prop:value=override_reminder
                                        on:change=move |ev| override_reminder.set(event_target_value(&ev))
                                    />
                                    <button
                                        style="padding: 4px 10px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white; white-space: nowrap;"
                                        on:click=default_reminder
                                    >
                                        {"+3 days"}
                                    </button>
                                </div>
                            </div>

                            {is_cdl
                                .then(|| view! {
                                    <h4 style="margin: 14px 0 8px 0; font-size: 14px; color: #531dab;">
                                        {"CDL"}
                                    </h4>
                                    {cdl_field("CDL Item Status", false, |c| c.cdl_item_status.clone(), |c, v| c.cdl_item_status = v)}
                                    {cdl_field("Order Request Date", true, |c| c.order_request_date.clone(), |c, v| c.order_request_date = v)}
                                    {cdl_field("Scanning Vendor Payment Date", true, |c| c.scanning_vendor_payment_date.clone(), |c, v| c.scanning_vendor_payment_date = v)}
                                    {cdl_field("PDF Delivery Date", true, |c| c.pdf_delivery_date.clone(), |c, v| c.pdf_delivery_date = v)}
                                    {cdl_field("Back to KARMS Date", true, |c| c.back_to_karms_date.clone(), |c, v| c.back_to_karms_date = v)}
                                    {cdl_field("Circ PDF URL", false, |c| c.circ_pdf_url.clone(), |c, v| c.circ_pdf_url = v)}
                                    {cdl_field("Due Date", true, |c| c.due_date.clone(), |c, v| c.due_date = v)}
                                    {cdl_field("Physical Copy Status", false, |c| c.physical_copy_status.clone(), |c, v| c.physical_copy_status = v)}
                                    {cdl_field("Vendor File URL", false, |c| c.vendor_file_url.clone(), |c, v| c.vendor_file_url = v)}
                                    {cdl_field("Bobcat Permanent Link", false, |c| c.bobcat_permanent_link.clone(), |c, v| c.bobcat_permanent_link = v)}
                                    {cdl_field("File Password", false, |c| c.file_password.clone(), |c, v| c.file_password = v)}
                                    {cdl_field("Author", false, |c| c.author.clone(), |c, v| c.author = v)}
                                    {cdl_field("Pages", false, |c| c.pages.clone(), |c, v| c.pages = v)}
                                })}

                            <div style="display: flex; gap: 8px; margin-top: 16px;">
                                {if is_cdl {
                                    view! {
                                        <button
                                            style="padding: 5px 14px; cursor: pointer; border: 1px solid #cf1322; color: #cf1322; border-radius: 4px; background: white;"
                                            on:click=delete_cdl
                                        >
                                            {"Delete CDL"}
                                        </button>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <button
                                            style="padding: 5px 14px; cursor: pointer; border: 1px solid #531dab; color: #531dab; border-radius: 4px; background: white;"
                                            on:click=create_cdl
                                        >
                                            {"Create CDL"}
                                        </button>
                                    }
                                    .into_any()
                                }}
                                <div style="margin-left: auto; display: flex; gap: 8px;">
                                    <button
                                        style="padding: 5px 14px; cursor: pointer; border: 1px solid #ccc; border-radius: 4px; background: white;"
                                        on:click=move |_| on_close.run(())
                                    >
                                        {"Cancel"}
                                    </button>
                                    <button
                                        style="padding: 5px 14px; cursor: pointer; border: none; border-radius: 4px; background: #1677ff; color: white;"
                                        on:click=save
                                    >
                                        {"Save"}
                                    </button>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
