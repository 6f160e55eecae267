use contracts::orders::{
    AllOrdersRequest, AllOrdersResponse, CreateCdlArgs, DeleteCdlArgs, MarkAttentionArgs,
    MarkCheckArgs, OrderDetailArgs, OrderRecord, ResetCdlVendorDateArgs, UpdateOrderArgs,
};

use crate::shared::api_utils::{
    delete_with_query, get_json_with_query, patch_json_unit, post_json, post_json_unit,
};

pub async fn fetch_all_orders(request: &AllOrdersRequest) -> Result<AllOrdersResponse, String> {
    post_json("/orders/all-orders", request).await
}

pub async fn fetch_order_detail(args: &OrderDetailArgs) -> Result<OrderRecord, String> {
    get_json_with_query("/orders/all-orders/detail", args).await
}

pub async fn update_order(args: &UpdateOrderArgs) -> Result<(), String> {
    patch_json_unit("/orders/all-orders/detail", args).await
}

pub async fn create_cdl(book_id: i64) -> Result<(), String> {
    post_json_unit("/orders/cdl", &CreateCdlArgs { book_id }).await
}

pub async fn delete_cdl(book_id: i64) -> Result<(), String> {
    delete_with_query("/orders/cdl", &DeleteCdlArgs { book_id }).await
}

pub async fn mark_check(args: &MarkCheckArgs) -> Result<(), String> {
    post_json_unit("/orders/check", args).await
}

pub async fn mark_attention(args: &MarkAttentionArgs) -> Result<(), String> {
    post_json_unit("/orders/attention", args).await
}

pub async fn reset_cdl_vendor_date(date: &str) -> Result<(), String> {
    post_json_unit(
        "/orders/cdl/reset-vendor-date",
        &ResetCdlVendorDateArgs {
            date: date.to_string(),
        },
    )
    .await
}
