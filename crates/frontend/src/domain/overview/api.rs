use contracts::overview::Overview;

use crate::shared::api_utils::get_json;

/// Fetch the landing-page pipeline statistics.
pub async fn fetch_overview() -> Result<Overview, String> {
    get_json("/overview").await
}
