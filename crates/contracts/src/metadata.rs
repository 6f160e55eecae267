use serde::{Deserialize, Serialize};

/// Enumerable filter-value domains supplied by the backend, used to
/// populate filter-widget options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaData {
    pub ips_code: Vec<String>,
    pub tags: Vec<String>,
    pub vendors: Vec<String>,
    pub oldest_date: String,
    pub material: Vec<String>,
    pub material_type: Vec<String>,
    pub cdl_tags: Vec<String>,
    pub supported_report: Vec<String>,
    pub physical_copy_status: Vec<String>,
}

/// Which metadata domain feeds a filter slot's option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaDataIndex {
    IpsCode,
    Tags,
    Vendors,
    Material,
    MaterialType,
    CdlTags,
    SupportedReport,
    PhysicalCopyStatus,
}

impl MetaDataIndex {
    pub fn values<'a>(&self, meta: &'a MetaData) -> &'a [String] {
        match self {
            MetaDataIndex::IpsCode => &meta.ips_code,
            MetaDataIndex::Tags => &meta.tags,
            MetaDataIndex::Vendors => &meta.vendors,
            MetaDataIndex::Material => &meta.material,
            MetaDataIndex::MaterialType => &meta.material_type,
            MetaDataIndex::CdlTags => &meta.cdl_tags,
            MetaDataIndex::SupportedReport => &meta.supported_report,
            MetaDataIndex::PhysicalCopyStatus => &meta.physical_copy_status,
        }
    }
}
