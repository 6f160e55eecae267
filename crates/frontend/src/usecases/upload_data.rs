use contracts::data::{UploadDataArgs, UploadDataResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::domain::orders::api as orders_api;
use crate::layout::global_context::use_app_context;
use crate::shared::api_utils::post_json;

async fn upload(args: &UploadDataArgs, sensitive: bool) -> Result<UploadDataResponse, String> {
    // Sensitive exports land in a separate table server-side.
    let path = if sensitive {
        "/data/upload-sensitive"
    } else {
        "/data/upload"
    };
    post_json(path, args).await
}

/// Vendor export upload. The file is read in the browser and shipped as
/// text; the backend does the parsing.
#[component]
pub fn UploadDataPage() -> impl IntoView {
    let ctx = use_app_context();

    let (file_name, set_file_name) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (sensitive, set_sensitive) = signal(false);
    let (is_uploading, set_is_uploading) = signal(false);
    let (vendor_date, set_vendor_date) = signal(String::new());

    let on_file = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let name = file.name();
        spawn_local(async move {
            match JsFuture::from(file.text()).await {
                Ok(value) => {
                    set_file_name.set(name);
                    set_content.set(value.as_string().unwrap_or_default());
                }
                Err(_) => ctx.show_error("Failed to read the selected file."),
            }
        });
    };

    let submit = move |_| {
        let args = UploadDataArgs {
            file_name: file_name.get_untracked(),
            content: content.get_untracked(),
        };
        if let Err(e) = args.validate() {
            ctx.show_error(&e.to_string());
            return;
        }
        let is_sensitive = sensitive.get_untracked();
        set_is_uploading.set(true);
        spawn_local(async move {
            match upload(&args, is_sensitive).await {
                Ok(response) => {
                    ctx.show_message(&format!(
                        "{} ({} rows accepted)",
                        response.msg, response.rows_accepted
                    ));
                    set_file_name.set(String::new());
                    set_content.set(String::new());
                }
                Err(e) => ctx.show_error(&format!("Upload failed: {}", e)),
            }
            set_is_uploading.set(false);
        });
    };

    let reset_vendor_date = move |_| {
        let date = vendor_date.get_untracked();
        if date.is_empty() {
            ctx.show_error("Pick a date first.");
            return;
        }
        spawn_local(async move {
            match orders_api::reset_cdl_vendor_date(&date).await {
                Ok(()) => ctx.show_message("Vendor payment dates reset."),
                Err(e) => ctx.show_error(&format!("Failed to reset vendor dates: {}", e)),
            }
        });
    };

    view! {
        <div style="max-width: 560px; margin: 40px auto; background: white; border-radius: 6px; padding: 22px 26px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1);">
            <h2 style="margin: 0 0 16px 0; font-size: 18px;">{"Upload Data"}</h2>
            <input type="file" accept=".csv,.tsv,.txt,.xlsx" on:change=on_file />
            <div style="margin: 10px 0; color: #666; font-size: 13px;">
                {move || {
                    let name = file_name.get();
                    if name.is_empty() {
                        "No file selected.".to_string()
                    } else {
                        format!("Selected: {}", name)
                    }
                }}
            </div>
            <label style="display: flex; gap: 6px; align-items: center; font-size: 13px; cursor: pointer; margin-bottom: 14px;">
                <input
                    type="checkbox"
                    prop:checked=sensitive
                    on:change=move |ev| set_sensitive.set(event_target_checked(&ev))
                />
                {"Sensitive data"}
            </label>
            <button
                style="padding: 6px 18px; cursor: pointer; border: none; border-radius: 4px; background: #1677ff; color: white;"
                disabled=is_uploading
                on:click=submit
            >
                {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
            </button>

            <hr style="margin: 22px 0; border: none; border-top: 1px solid #eee;" />

            <h3 style="margin: 0 0 10px 0; font-size: 15px;">{"Reset CDL Vendor Payment Date"}</h3>
            <p style="margin: 0 0 10px 0; color: #666; font-size: 13px;">
                {"Clears the scanning vendor payment date on every CDL order paid on the given day."}
            </p>
            <div style="display: flex; gap: 8px;">
                <input
                    style="padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; font-size: 13px;"
                    type="date"
                    prop:value=vendor_date
                    on:change=move |ev| set_vendor_date.set(event_target_value(&ev))
                />
                <button
                    style="padding: 5px 14px; cursor: pointer; border: 1px solid #cf1322; color: #cf1322; border-radius: 4px; background: white;"
                    on:click=reset_vendor_date
                >
                    {"Reset"}
                </button>
            </div>
        </div>
    }
}
