use serde::{Deserialize, Serialize};

use crate::orders::{FilterArgs, ViewArgs};

/// A named, persisted combination of filter values and view toggles.
///
/// Built-in presets use reserved negative ids (tag presets -100..=-109,
/// view presets -200..=-202) and are immutable; the preset store assigns
/// positive ids to user-created presets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePreset {
    pub preset_id: i64,
    pub preset_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<FilterArgs>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<ViewArgs>,
}

impl TablePreset {
    pub fn is_builtin(&self) -> bool {
        self.preset_id < 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePresetArgs {
    pub preset_name: String,
    pub filters: Vec<FilterArgs>,
    pub views: ViewArgs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePresetResponse {
    pub msg: String,
    pub preset_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePresetArgs {
    pub preset_id: i64,
    pub preset_name: String,
    pub filters: Vec<FilterArgs>,
    pub views: ViewArgs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePresetArgs {
    pub preset_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_round_trip_keeps_optional_sections_absent() {
        let preset = TablePreset {
            preset_id: -100,
            preset_name: "All".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&preset).unwrap();
        assert_eq!(json, r#"{"presetId":-100,"presetName":"All"}"#);
        let parsed: TablePreset = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_builtin());
        assert!(parsed.filters.is_none());
        assert!(parsed.views.is_none());
    }
}
