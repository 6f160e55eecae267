use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils::{get_json, post_json, post_json_unit};

pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    post_json("/auth/login", &LoginRequest { username, password }).await
}

pub async fn logout() -> Result<(), String> {
    post_json_unit("/auth/logout", &serde_json::json!({})).await
}

/// Validate the stored token and fetch the signed-in user.
pub async fn who_am_i() -> Result<UserInfo, String> {
    get_json("/auth/who-am-i").await
}
