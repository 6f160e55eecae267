//! Fixed configuration of the order table: the master list of filter
//! slots, the built-in presets, tag colors, and page sizes.

use contracts::metadata::MetaDataIndex;
use contracts::orders::{FilterArgs, FilterOption, ViewArgs};
use contracts::presets::TablePreset;
use once_cell::sync::Lazy;

pub const PAGE_SIZES: [usize; 4] = [15, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 15;

fn in_slot(col: &str) -> FilterOption {
    FilterOption::new(FilterArgs::In {
        col: col.to_string(),
        val: vec![],
    })
}

fn between_slot(col: &str) -> FilterOption {
    FilterOption::new(FilterArgs::Between {
        col: col.to_string(),
        val: [String::new(), String::new()],
    })
}

fn like_slot(col: &str) -> FilterOption {
    FilterOption::new(FilterArgs::Like {
        col: col.to_string(),
        val: String::new(),
    })
}

/// Master list of filter slot definitions. Slot order here fixes the
/// order of the effective-filter list sent to the server.
pub static DEFAULT_FILTER_OPTIONS: Lazy<Vec<FilterOption>> = Lazy::new(|| {
    vec![
        // General filters
        in_slot("tags").meta(MetaDataIndex::Tags),
        like_slot("title"),
        like_slot("orderNumber"),
        between_slot("createdDate"),
        like_slot("barcode"),
        between_slot("arrivalDate"),
        in_slot("ipsCode").titled("IPS Code").meta(MetaDataIndex::IpsCode),
        between_slot("ipsDate").titled("IPS Date"),
        in_slot("vendorCode").meta(MetaDataIndex::Vendors),
        // CDL filters
        in_slot("material").meta(MetaDataIndex::Material).cdl_only(),
        in_slot("materialType").meta(MetaDataIndex::MaterialType).cdl_only(),
        in_slot("cdlItemStatus")
            .titled("CDL Item Status")
            .meta(MetaDataIndex::CdlTags)
            .cdl_only(),
        between_slot("orderRequestDate").cdl_only(),
        between_slot("scanningVendorPaymentDate").cdl_only(),
        between_slot("pdfDeliveryDate").titled("PDF Delivery Date").cdl_only(),
        between_slot("backToKarmsDate").titled("Back to KARMS Date").cdl_only(),
        // Note filters
        like_slot("trackingNote"),
        like_slot("libraryNote"),
    ]
});

fn tag_preset(preset_id: i64, preset_name: &str, tags: &[&str]) -> TablePreset {
    TablePreset {
        preset_id,
        preset_name: preset_name.to_string(),
        creator: None,
        filters: if tags.is_empty() {
            None
        } else {
            Some(vec![FilterArgs::In {
                col: "tags".to_string(),
                val: tags.iter().map(|tag| tag.to_string()).collect(),
            }])
        },
        views: None,
    }
}

fn view_preset(preset_id: i64, preset_name: &str, views: ViewArgs) -> TablePreset {
    TablePreset {
        preset_id,
        preset_name: preset_name.to_string(),
        creator: None,
        filters: None,
        views: Some(views),
    }
}

/// Immutable tag presets; the first entry ("All") is the universal
/// fallback of preset resolution.
pub static BUILTIN_TAG_PRESETS: Lazy<Vec<TablePreset>> = Lazy::new(|| {
    vec![
        tag_preset(-100, "All", &[]),
        tag_preset(-101, "Rush", &["Rush"]),
        {
            let mut preset = tag_preset(-102, "CDL", &["CDL"]);
            preset.views = Some(ViewArgs {
                cdl_view: true,
                ..ViewArgs::default()
            });
            preset
        },
        tag_preset(-103, "Rush-NY", &["Rush", "NY"]),
        tag_preset(-104, "Rush-Local", &["Rush", "Local"]),
        tag_preset(-105, "Rush-DVD", &["Rush", "DVD"]),
        tag_preset(-106, "Course Reserve", &["Reserve"]),
        tag_preset(-107, "ILL", &["ILL"]),
        tag_preset(-108, "Non-Rush", &["Non-Rush"]),
        tag_preset(-109, "Sensitive", &["Sensitive"]),
    ]
});

pub static BUILTIN_VIEW_PRESETS: Lazy<Vec<TablePreset>> = Lazy::new(|| {
    vec![
        view_preset(
            -200,
            "Pending Rush-Local",
            ViewArgs {
                pending_rush_local: true,
                ..ViewArgs::default()
            },
        ),
        view_preset(
            -201,
            "Pending CDL",
            ViewArgs {
                cdl_view: true,
                pending_cdl: true,
                ..ViewArgs::default()
            },
        ),
        view_preset(
            -202,
            "Prioritize",
            ViewArgs {
                prioritize: true,
                ..ViewArgs::default()
            },
        ),
    ]
});

/// Chip color per order tag.
pub fn tag_color(tag: &str) -> &'static str {
    match tag {
        "Rush" => "#cf1322",
        "CDL" => "#531dab",
        "NY" => "#096dd9",
        "Local" => "#08979c",
        "DVD" => "#d46b08",
        "Reserve" => "#389e0d",
        "ILL" => "#c41d7f",
        "Non-Rush" => "#5c6b77",
        "Sensitive" => "#d4b106",
        _ => "#595959",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_occupy_the_reserved_ranges() {
        let tag_ids: Vec<i64> = BUILTIN_TAG_PRESETS.iter().map(|p| p.preset_id).collect();
        assert_eq!(tag_ids, (0..10).map(|i| -100 - i).collect::<Vec<_>>());
        assert_eq!(BUILTIN_TAG_PRESETS[0].preset_name, "All");

        let view_ids: Vec<i64> = BUILTIN_VIEW_PRESETS.iter().map(|p| p.preset_id).collect();
        assert_eq!(view_ids, vec![-200, -201, -202]);
    }

    #[test]
    fn default_slots_are_all_inactive() {
        assert!(DEFAULT_FILTER_OPTIONS
            .iter()
            .all(|option| !option.args.is_active()));
    }

    #[test]
    fn slot_identity_is_unique() {
        for (i, a) in DEFAULT_FILTER_OPTIONS.iter().enumerate() {
            for b in DEFAULT_FILTER_OPTIONS.iter().skip(i + 1) {
                assert!(!a.args.same_slot(&b.args), "duplicate slot {}", a.args.col());
            }
        }
    }
}
