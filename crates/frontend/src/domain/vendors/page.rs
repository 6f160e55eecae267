use contracts::vendors::Vendor;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::layout::global_context::use_app_context;

#[component]
pub fn VendorsPage() -> impl IntoView {
    let ctx = use_app_context();

    let (vendors, set_vendors) = signal(Vec::<Vendor>::new());
    let (is_loading, set_is_loading) = signal(false);

    let (new_code, set_new_code) = signal(String::new());
    let (new_name, set_new_name) = signal(String::new());

    let load = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_all_vendors().await {
                Ok(data) => set_vendors.set(data),
                Err(e) => ctx.show_error(&format!("Failed to fetch vendors: {}", e)),
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let add_vendor = move || {
        let code = new_code.get_untracked().trim().to_uppercase();
        if code.is_empty() {
            ctx.show_error("Vendor code is required.");
            return;
        }
        let name = new_name.get_untracked();
        let vendor = Vendor {
            vendor_code: code,
            name: if name.is_empty() { None } else { Some(name) },
            notify: false,
        };
        spawn_local(async move {
            match api::create_vendor(&vendor).await {
                Ok(()) => {
                    ctx.show_message("Vendor created.");
                    set_new_code.set(String::new());
                    set_new_name.set(String::new());
                    load();
                }
                Err(e) => ctx.show_error(&format!("Failed to create vendor: {}", e)),
            }
        });
    };

    let toggle_notify = move |vendor: Vendor| {
        let updated = Vendor {
            notify: !vendor.notify,
            ..vendor
        };
        spawn_local(async move {
            match api::update_vendor(&updated).await {
                Ok(()) => load(),
                Err(e) => ctx.show_error(&format!("Failed to update vendor: {}", e)),
            }
        });
    };

    let remove_vendor = move |vendor_code: String| {
        spawn_local(async move {
            match api::delete_vendor(&vendor_code).await {
                Ok(()) => {
                    ctx.show_message("Vendor deleted.");
                    load();
                }
                Err(e) => ctx.show_error(&format!("Failed to delete vendor: {}", e)),
            }
        });
    };

    view! {
        <div style="padding: 20px; max-width: 720px;">
            <h2 style="margin-top: 0;">{"Vendors"}</h2>

            <div style="display: flex; gap: 8px; margin-bottom: 16px;">
                <input
                    type="text"
                    placeholder="Vendor code"
                    style="padding: 6px; border: 1px solid #ccc; border-radius: 4px;"
                    prop:value=move || new_code.get()
                    on:input=move |ev| set_new_code.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Name (optional)"
                    style="padding: 6px; border: 1px solid #ccc; border-radius: 4px;"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button
                    style="padding: 6px 14px; background: #5b2d8f; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    on:click=move |_| add_vendor()
                >
                    {"Add Vendor"}
                </button>
            </div>

            {move || if is_loading.get() {
                view! { <div style="color: #666;">{"Loading..."}</div> }.into_any()
            } else {
                view! {
                    <table style="width: 100%; border-collapse: collapse; font-size: 14px; background: white;">
                        <thead>
                            <tr style="border-bottom: 2px solid #ddd; text-align: left;">
                                <th style="padding: 8px;">{"Code"}</th>
                                <th style="padding: 8px;">{"Name"}</th>
                                <th style="padding: 8px;">{"Notify"}</th>
                                <th style="padding: 8px;"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {vendors.get().into_iter().map(|vendor| {
                                let code = vendor.vendor_code.clone();
                                let for_toggle = vendor.clone();
                                view! {
                                    <tr style="border-bottom: 1px solid #eee;">
                                        <td style="padding: 8px;">{vendor.vendor_code.clone()}</td>
                                        <td style="padding: 8px;">{vendor.name.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td style="padding: 8px;">
                                            <input
                                                type="checkbox"
                                                prop:checked=vendor.notify
                                                on:change=move |_| toggle_notify(for_toggle.clone())
                                            />
                                        </td>
                                        <td style="padding: 8px; text-align: right;">
                                            <button
                                                style="padding: 2px 10px; color: #c0392b; background: none; border: 1px solid #c0392b; border-radius: 4px; cursor: pointer;"
                                                on:click=move |_| remove_vendor(code.clone())
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}
