//! Standalone admin workflows outside the order table.

pub mod export_report;
pub mod upload_data;
