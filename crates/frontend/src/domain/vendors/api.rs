use contracts::vendors::{Vendor, VendorArgs};

use crate::shared::api_utils::{delete_with_query, get_json, patch_json_unit, post_json_unit};

pub async fn fetch_all_vendors() -> Result<Vec<Vendor>, String> {
    get_json("/vendor/all-vendors").await
}

pub async fn create_vendor(vendor: &Vendor) -> Result<(), String> {
    post_json_unit("/vendor", vendor).await
}

pub async fn update_vendor(vendor: &Vendor) -> Result<(), String> {
    patch_json_unit("/vendor", vendor).await
}

pub async fn delete_vendor(vendor_code: &str) -> Result<(), String> {
    delete_with_query(
        "/vendor",
        &VendorArgs {
            vendor_code: vendor_code.to_string(),
        },
    )
    .await
}
