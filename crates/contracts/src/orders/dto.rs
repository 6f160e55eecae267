use serde::{Deserialize, Serialize};

use super::query::{FilterArgs, SorterArgs, ViewArgs};
use super::record::{CdlOnlyFields, OrderRecord};

/// Request body of `POST /orders/all-orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllOrdersRequest {
    pub page_index: usize,
    pub page_size: usize,
    pub sorter: SorterArgs,
    pub filters: Vec<FilterArgs>,
    pub fuzzy: String,
    pub views: ViewArgs,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllOrdersResponse {
    pub page_index: usize,
    pub page_limit: usize,
    pub total_records: usize,
    pub result: Vec<OrderRecord>,
}

/// Query parameters of `GET /orders/all-orders/detail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailArgs {
    pub book_id: i64,
    pub cdl_view: bool,
}

/// Patch body of `PATCH /orders/all-orders/detail`; absent fields are
/// left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderArgs {
    pub book_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_anyway: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_reminder_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdl: Option<CdlOnlyFields>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCdlArgs {
    pub book_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCdlArgs {
    pub book_id: i64,
}

/// Bulk check/uncheck over the current row selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkCheckArgs {
    pub id: Vec<i64>,
    pub checked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Bulk attention flag over the current row selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttentionArgs {
    pub id: Vec<i64>,
    pub attention: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetCdlVendorDateArgs {
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_orders_request_wire_shape() {
        let request = AllOrdersRequest {
            page_index: 2,
            page_size: 25,
            sorter: SorterArgs {
                col: "createdDate".into(),
                desc: true,
            },
            filters: vec![FilterArgs::Between {
                col: "createdDate".into(),
                val: ["2024-01-01".into(), "2024-01-31".into()],
            }],
            fuzzy: String::new(),
            views: ViewArgs::default(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pageIndex": 2,
                "pageSize": 25,
                "sorter": {"col": "createdDate", "desc": true},
                "filters": [{"op": "between", "col": "createdDate", "val": ["2024-01-01", "2024-01-31"]}],
                "fuzzy": "",
                "views": {},
            })
        );
    }

    #[test]
    fn update_order_omits_absent_fields() {
        let args = UpdateOrderArgs {
            book_id: 5,
            checked: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"bookId":5,"checked":true}"#
        );
    }
}
