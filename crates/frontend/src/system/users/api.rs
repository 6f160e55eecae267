use contracts::system::users::{CreateUserArgs, DeleteUserArgs, User};

use crate::shared::api_utils::{delete_with_query, get_json, post_json_unit};

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json("/users").await
}

/// Create new user
pub async fn create_user(args: &CreateUserArgs) -> Result<(), String> {
    post_json_unit("/users", args).await
}

/// Delete user by name
pub async fn delete_user(username: &str) -> Result<(), String> {
    delete_with_query(
        "/users",
        &DeleteUserArgs {
            username: username.to_string(),
        },
    )
    .await
}
