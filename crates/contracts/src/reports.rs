use serde::{Deserialize, Serialize};

/// Request body of `POST /report/send-report`: schedule the selected
/// report types for export to the given address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReportArgs {
    pub username: String,
    pub email: String,
    pub report_type: Vec<String>,
}
