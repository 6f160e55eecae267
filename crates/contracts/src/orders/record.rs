use serde::{Deserialize, Deserializer, Serialize};

/// Fields shared by every acquisition order row.
///
/// Most columns are nullable on the backend, so they decode as options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralOrder {
    pub id: i64,
    pub tags: Vec<String>,
    pub title: Option<String>,
    pub order_number: Option<String>,
    pub barcode: Option<String>,
    pub created_date: Option<String>,
    pub arrival_date: Option<String>,
    pub arrival_text: Option<String>,
    pub arrival_status: Option<String>,
    pub arrival_operator: Option<String>,
    pub ips_code: Option<String>,
    pub ips: Option<String>,
    pub ips_date: Option<String>,
    pub ips_update_date: Option<String>,
    pub ips_code_operator: Option<String>,
    pub items_created: Option<String>,
    pub item_status: Option<String>,
    pub material: Option<String>,
    pub material_type: Option<String>,
    pub collection: Option<String>,
    pub update_date: Option<String>,
    pub sublibrary: Option<String>,
    pub order_status: Option<String>,
    pub order_status_update_date: Option<String>,
    pub invoice_status: Option<String>,
    pub order_type: Option<String>,
    pub order_unit: Option<String>,
    pub total_price: Option<String>,
    pub vendor_code: Option<String>,
    pub bsn: Option<String>,
    pub library_note: Option<String>,
    pub tracking_note: Option<String>,
    pub checked: bool,
    pub attention: bool,
    pub sensitive: bool,
    pub override_reminder_time: Option<String>,
}

/// The extended field set carried only by CDL orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CdlOnlyFields {
    pub cdl_item_status: Option<String>,
    pub order_request_date: Option<String>,
    pub scanning_vendor_payment_date: Option<String>,
    pub pdf_delivery_date: Option<String>,
    pub back_to_karms_date: Option<String>,
    pub circ_pdf_url: Option<String>,
    pub due_date: Option<String>,
    pub physical_copy_status: Option<String>,
    pub vendor_file_url: Option<String>,
    pub bobcat_permanent_link: Option<String>,
    pub file_password: Option<String>,
    pub author: Option<String>,
    pub pages: Option<String>,
}

/// A CDL order: the general field set plus the CDL extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdlOrder {
    #[serde(flatten)]
    pub base: GeneralOrder,
    #[serde(flatten)]
    pub cdl: CdlOnlyFields,
}

/// One order row, with an explicit discriminant instead of the duck-typed
/// union the backend speaks. The backend marks CDL rows by including the
/// `CDL` tag, so deserialization keys off that.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrderRecord {
    Cdl(CdlOrder),
    General(GeneralOrder),
}

impl OrderRecord {
    pub fn id(&self) -> i64 {
        self.general().id
    }

    pub fn is_cdl(&self) -> bool {
        matches!(self, OrderRecord::Cdl(_))
    }

    pub fn general(&self) -> &GeneralOrder {
        match self {
            OrderRecord::Cdl(order) => &order.base,
            OrderRecord::General(order) => order,
        }
    }

    pub fn cdl_fields(&self) -> Option<&CdlOnlyFields> {
        match self {
            OrderRecord::Cdl(order) => Some(&order.cdl),
            OrderRecord::General(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for OrderRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_cdl = value
            .get("tags")
            .and_then(|tags| tags.as_array())
            .map(|tags| tags.iter().any(|tag| tag == "CDL"))
            .unwrap_or(false);
        if is_cdl {
            CdlOrder::deserialize(value)
                .map(OrderRecord::Cdl)
                .map_err(serde::de::Error::custom)
        } else {
            GeneralOrder::deserialize(value)
                .map(OrderRecord::General)
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdl_tag_selects_the_cdl_variant() {
        let row: OrderRecord = serde_json::from_str(
            r#"{"id":7,"tags":["Rush","CDL"],"title":"Some Book","circPdfUrl":"https://example.org/a.pdf"}"#,
        )
        .unwrap();
        assert!(row.is_cdl());
        assert_eq!(row.id(), 7);
        assert_eq!(
            row.cdl_fields().unwrap().circ_pdf_url.as_deref(),
            Some("https://example.org/a.pdf")
        );
    }

    #[test]
    fn plain_rows_decode_as_general() {
        let row: OrderRecord =
            serde_json::from_str(r#"{"id":3,"tags":["Rush"],"title":"Another"}"#).unwrap();
        assert!(!row.is_cdl());
        assert!(row.cdl_fields().is_none());
        assert_eq!(row.general().title.as_deref(), Some("Another"));
    }
}
