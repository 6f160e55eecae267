use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let submit = move || {
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() {
            set_error.set(Some("Please enter a username and password.".to_string()));
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::login(user, pass).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    set_auth_state.set(AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(UserInfo {
                            username: response.username,
                            role: response.role,
                        }),
                    });
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error.set(Some("Login failed. Check your credentials.".to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div style="display: flex; align-items: center; justify-content: center; height: 100vh; background: #1f1f2e; font-family: system-ui, sans-serif;">
            <form
                style="background: white; padding: 32px; border-radius: 8px; width: 320px; display: flex; flex-direction: column; gap: 12px;"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1 style="margin: 0 0 8px; font-size: 20px;">{"LibSense"}</h1>
                <input
                    type="text"
                    placeholder="Username"
                    style="padding: 8px; border: 1px solid #ccc; border-radius: 4px;"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    style="padding: 8px; border: 1px solid #ccc; border-radius: 4px;"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! {
                    <div style="color: #c0392b; font-size: 13px;">{e}</div>
                })}
                <button
                    type="submit"
                    style="padding: 8px; background: #5b2d8f; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
