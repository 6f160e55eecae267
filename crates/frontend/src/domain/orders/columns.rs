//! Column configuration for the order table. The list order defines the
//! display order; the Column panel replaces the whole list at once.

use once_cell::sync::Lazy;

/// How a cell is rendered. Replaces the function-valued `render` slot of
/// a dynamic column config with a closed set of renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRender {
    /// Plain text with ellipsis.
    Text,
    /// Clickable URL opening in a new tab.
    Link,
    /// IPS code with the full IPS text as hover title.
    IpsCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOption {
    pub data_index: &'static str,
    pub visible: bool,
    pub title: Option<&'static str>,
    pub width: &'static str,
    pub sortable: bool,
    pub cdl_only: bool,
    pub render: ColumnRender,
}

impl ColumnOption {
    fn new(data_index: &'static str, visible: bool, width: &'static str) -> Self {
        Self {
            data_index,
            visible,
            title: None,
            width,
            sortable: true,
            cdl_only: false,
            render: ColumnRender::Text,
        }
    }

    fn titled(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    fn cdl_only(mut self) -> Self {
        self.cdl_only = true;
        self
    }

    fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    fn render(mut self, render: ColumnRender) -> Self {
        self.render = render;
        self
    }

    /// Display title: explicit, or derived from the camelCase data index.
    pub fn display_title(&self) -> String {
        match self.title {
            Some(title) => title.to_string(),
            None => header_case(self.data_index),
        }
    }
}

/// Convert a camelCase data index to a header title,
/// e.g. "orderNumber" -> "Order Number".
pub fn header_case(data_index: &str) -> String {
    let mut out = String::with_capacity(data_index.len() + 4);
    for (i, ch) in data_index.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

pub static DEFAULT_COLUMN_OPTIONS: Lazy<Vec<ColumnOption>> = Lazy::new(|| {
    vec![
        ColumnOption::new("title", true, "12rem"),
        ColumnOption::new("orderNumber", true, "9rem"),
        ColumnOption::new("barcode", true, "9rem"),
        ColumnOption::new("createdDate", true, "6rem"),
        ColumnOption::new("scanningVendorPaymentDate", true, "6rem").cdl_only(),
        ColumnOption::new("pdfDeliveryDate", true, "6rem")
            .titled("PDF Delivery Date")
            .cdl_only(),
        ColumnOption::new("arrivalDate", true, "6rem"),
        ColumnOption::new("ipsDate", true, "6rem").titled("IPS Date"),
        ColumnOption::new("ipsCode", true, "4rem")
            .titled("IPS Code")
            .render(ColumnRender::IpsCode),
        ColumnOption::new("cdlItemStatus", true, "8rem")
            .titled("CDL Item Status")
            .cdl_only(),
        ColumnOption::new("trackingNote", true, "18rem").not_sortable(),
        ColumnOption::new("libraryNote", true, "18rem").not_sortable(),
        ColumnOption::new("circPdfUrl", true, "12rem")
            .titled("Circ PDF URL")
            .render(ColumnRender::Link)
            .cdl_only(),
        // Hidden by default
        ColumnOption::new("orderRequestDate", false, "6rem").cdl_only(),
        ColumnOption::new("backToKarmsDate", false, "6rem")
            .titled("Back to KARMS Date")
            .cdl_only(),
        ColumnOption::new("vendorCode", false, "6rem"),
        ColumnOption::new("bsn", false, "6rem").titled("BSN"),
        ColumnOption::new("arrivalText", false, "6rem"),
        ColumnOption::new("arrivalStatus", false, "6rem"),
        ColumnOption::new("arrivalOperator", false, "6rem"),
        ColumnOption::new("itemsCreated", false, "6rem"),
        ColumnOption::new("itemStatus", false, "6rem"),
        ColumnOption::new("material", false, "6rem"),
        ColumnOption::new("collection", false, "6rem"),
        ColumnOption::new("ipsUpdateDate", false, "6rem").titled("IPS Update Date"),
        ColumnOption::new("ipsCodeOperator", false, "6rem").titled("IPS Code Operator"),
        ColumnOption::new("updateDate", false, "6rem"),
        ColumnOption::new("sublibrary", false, "6rem"),
        ColumnOption::new("orderStatus", false, "6rem"),
        ColumnOption::new("invoiceStatus", false, "6rem"),
        ColumnOption::new("materialType", false, "6rem"),
        ColumnOption::new("orderType", false, "6rem"),
        ColumnOption::new("orderUnit", false, "6rem"),
        ColumnOption::new("totalPrice", false, "6rem"),
        ColumnOption::new("orderStatusUpdateDate", false, "6rem"),
        // Hidden CDL columns
        ColumnOption::new("dueDate", false, "12rem").cdl_only(),
        ColumnOption::new("physicalCopyStatus", false, "12rem").cdl_only(),
        ColumnOption::new("vendorFileUrl", false, "12rem")
            .titled("Vendor File URL")
            .render(ColumnRender::Link)
            .cdl_only(),
        ColumnOption::new("bobcatPermanentLink", false, "12rem")
            .render(ColumnRender::Link)
            .cdl_only(),
        ColumnOption::new("filePassword", false, "12rem").cdl_only(),
        ColumnOption::new("author", false, "12rem").cdl_only(),
        ColumnOption::new("pages", false, "12rem").cdl_only(),
    ]
});

/// Columns actually shown: visible, and not CDL-gated while the CDL view
/// is off. Preserves list order.
pub fn visible_columns(options: &[ColumnOption], cdl_view: bool) -> Vec<ColumnOption> {
    options
        .iter()
        .filter(|option| !option.cdl_only || cdl_view)
        .filter(|option| option.visible)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_case_splits_camel_case() {
        assert_eq!(header_case("orderNumber"), "Order Number");
        assert_eq!(header_case("title"), "Title");
        assert_eq!(header_case("orderStatusUpdateDate"), "Order Status Update Date");
    }

    #[test]
    fn explicit_titles_win() {
        let column = DEFAULT_COLUMN_OPTIONS
            .iter()
            .find(|c| c.data_index == "ipsCode")
            .unwrap();
        assert_eq!(column.display_title(), "IPS Code");
    }

    #[test]
    fn cdl_columns_are_gated_by_the_cdl_view() {
        let without = visible_columns(&DEFAULT_COLUMN_OPTIONS, false);
        assert!(without.iter().all(|c| !c.cdl_only));

        let with = visible_columns(&DEFAULT_COLUMN_OPTIONS, true);
        assert!(with.iter().any(|c| c.data_index == "circPdfUrl"));
        // Hidden columns stay hidden either way.
        assert!(with.iter().all(|c| c.data_index != "dueDate"));
    }
}
