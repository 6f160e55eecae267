use contracts::system::auth::Role;
use contracts::system::users::{CreateUserArgs, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::layout::global_context::use_app_context;

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_app_context();

    let (users, set_users) = signal(Vec::<User>::new());
    let (is_loading, set_is_loading) = signal(false);

    let (new_username, set_new_username) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (new_role, set_new_role) = signal(Role::User);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => set_users.set(data),
                Err(e) => ctx.show_error(&format!("Failed to fetch users: {}", e)),
            }
            set_is_loading.set(false);
        });
    };

    // Initial load
    Effect::new(move |_| load());

    let add_user = move || {
        let username = new_username.get_untracked();
        let password = new_password.get_untracked();
        let confirm = confirm_password.get_untracked();
        // Form validation stays local; it never reaches the API layer.
        if username.is_empty() || password.is_empty() {
            set_form_error.set(Some("Username and password are required.".to_string()));
            return;
        }
        if password != confirm {
            set_form_error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        set_form_error.set(None);
        let args = CreateUserArgs {
            username,
            password,
            role: new_role.get_untracked(),
        };
        spawn_local(async move {
            match api::create_user(&args).await {
                Ok(()) => {
                    ctx.show_message("User created.");
                    set_new_username.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    load();
                }
                Err(e) => ctx.show_error(&format!("Failed to create user: {}", e)),
            }
        });
    };

    let remove_user = move |username: String| {
        spawn_local(async move {
            match api::delete_user(&username).await {
                Ok(()) => {
                    ctx.show_message("User removed.");
                    load();
                }
                Err(e) => ctx.show_error(&format!("Failed to remove user: {}", e)),
            }
        });
    };

    view! {
        <div style="padding: 20px; max-width: 720px;">
            <h2 style="margin-top: 0;">{"User Management"}</h2>

            <div style="display: flex; gap: 8px; margin-bottom: 16px; flex-wrap: wrap; align-items: center;">
                <input
                    type="text"
                    placeholder="Username"
                    style="padding: 6px; border: 1px solid #ccc; border-radius: 4px;"
                    prop:value=move || new_username.get()
                    on:input=move |ev| set_new_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    style="padding: 6px; border: 1px solid #ccc; border-radius: 4px;"
                    prop:value=move || new_password.get()
                    on:input=move |ev| set_new_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    style="padding: 6px; border: 1px solid #ccc; border-radius: 4px;"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                />
                <select
                    style="padding: 6px; border: 1px solid #ccc; border-radius: 4px;"
                    on:change=move |ev| {
                        set_new_role.set(if event_target_value(&ev) == "admin" {
                            Role::Admin
                        } else {
                            Role::User
                        });
                    }
                >
                    <option value="user" selected=move || new_role.get() == Role::User>{"user"}</option>
                    <option value="admin" selected=move || new_role.get() == Role::Admin>{"admin"}</option>
                </select>
                <button
                    style="padding: 6px 14px; background: #5b2d8f; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    on:click=move |_| add_user()
                >
                    {"Add User"}
                </button>
            </div>
            {move || form_error.get().map(|e| view! {
                <div style="color: #c0392b; font-size: 13px; margin-bottom: 12px;">{e}</div>
            })}

            {move || if is_loading.get() {
                view! { <div style="color: #666;">{"Loading..."}</div> }.into_any()
            } else {
                view! {
                    <table style="width: 100%; border-collapse: collapse; font-size: 14px; background: white;">
                        <thead>
                            <tr style="border-bottom: 2px solid #ddd; text-align: left;">
                                <th style="padding: 8px;">{"Username"}</th>
                                <th style="padding: 8px;">{"Role"}</th>
                                <th style="padding: 8px;"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {users.get().into_iter().map(|user| {
                                let username = user.username.clone();
                                view! {
                                    <tr style="border-bottom: 1px solid #eee;">
                                        <td style="padding: 8px;">{user.username.clone()}</td>
                                        <td style="padding: 8px;">{user.role.as_str()}</td>
                                        <td style="padding: 8px; text-align: right;">
                                            <button
                                                style="padding: 2px 10px; color: #c0392b; background: none; border: 1px solid #c0392b; border-radius: 4px; cursor: pointer;"
                                                on:click=move |_| remove_user(username.clone())
                                            >
                                                {"Remove"}
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
