use contracts::presets::{
    CreatePresetArgs, CreatePresetResponse, DeletePresetArgs, TablePreset, UpdatePresetArgs,
};

use crate::shared::api_utils::{delete_with_query, get_json, patch_json_unit, post_json};

/// Fetch all custom presets stored for the signed-in user.
pub async fn fetch_all_presets() -> Result<Vec<TablePreset>, String> {
    get_json("/preset").await
}

pub async fn create_preset(args: &CreatePresetArgs) -> Result<CreatePresetResponse, String> {
    post_json("/preset", args).await
}

pub async fn update_preset(args: &UpdatePresetArgs) -> Result<(), String> {
    patch_json_unit("/preset", args).await
}

pub async fn delete_preset(preset_id: i64) -> Result<(), String> {
    delete_with_query("/preset", &DeletePresetArgs { preset_id }).await
}
