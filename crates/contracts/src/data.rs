use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /data/upload` (and `/data/upload-sensitive`): the raw
/// text of a vendor export file read on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDataArgs {
    pub file_name: String,
    pub content: String,
}

impl UploadDataArgs {
    /// Reject empty selections before anything goes over the wire.
    pub fn validate(&self) -> Result<()> {
        if self.file_name.is_empty() {
            bail!("no file selected");
        }
        if self.content.is_empty() {
            bail!("file '{}' is empty", self.file_name);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadDataResponse {
    pub msg: String,
    pub rows_accepted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_upload() {
        let args = UploadDataArgs {
            file_name: String::new(),
            content: String::new(),
        };
        assert!(args.validate().is_err());

        let args = UploadDataArgs {
            file_name: "orders.csv".into(),
            content: "id,title\n".into(),
        };
        assert!(args.validate().is_ok());
    }
}
