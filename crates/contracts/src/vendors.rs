use serde::{Deserialize, Serialize};

/// A scanning/acquisition vendor record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    pub vendor_code: String,
    pub name: Option<String>,
    pub notify: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorArgs {
    pub vendor_code: String,
}
