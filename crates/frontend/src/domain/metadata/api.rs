use contracts::metadata::MetaData;

use crate::shared::api_utils::get_json;

/// Fetch the enumerable filter-value domains (vendor codes, tags,
/// statuses) used to populate filter-widget options.
pub async fn fetch_metadata() -> Result<MetaData, String> {
    get_json("/data/metadata").await
}
