use serde::{Deserialize, Serialize};

use crate::metadata::MetaDataIndex;

fn is_false(value: &bool) -> bool {
    !*value
}

/// One committed filter condition, tagged by operator on the wire.
///
/// The value shape is fully determined by the operator: `in` carries a
/// string array, `between` a pair of date strings, `like` a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum FilterArgs {
    In { col: String, val: Vec<String> },
    Between { col: String, val: [String; 2] },
    Like { col: String, val: String },
}

impl FilterArgs {
    pub fn col(&self) -> &str {
        match self {
            FilterArgs::In { col, .. } => col,
            FilterArgs::Between { col, .. } => col,
            FilterArgs::Like { col, .. } => col,
        }
    }

    pub fn op_tag(&self) -> &'static str {
        match self {
            FilterArgs::In { .. } => "in",
            FilterArgs::Between { .. } => "between",
            FilterArgs::Like { .. } => "like",
        }
    }

    /// Whether two conditions target the same filter slot (`op` + `col`).
    pub fn same_slot(&self, other: &FilterArgs) -> bool {
        self.op_tag() == other.op_tag() && self.col() == other.col()
    }

    /// A filter is active when it actually constrains the result set.
    ///
    /// Only the exact empty string counts as empty; whitespace does not.
    pub fn is_active(&self) -> bool {
        match self {
            FilterArgs::In { val, .. } => !val.is_empty(),
            FilterArgs::Between { val, .. } => !val[0].is_empty() && !val[1].is_empty(),
            FilterArgs::Like { val, .. } => !val.is_empty(),
        }
    }

    /// Canonical form for set-wise comparison: `in` values are sorted so
    /// that multi-select reordering in the UI does not count as a change.
    pub fn normalized(&self) -> FilterArgs {
        match self {
            FilterArgs::In { col, val } => {
                let mut sorted = val.clone();
                sorted.sort();
                FilterArgs::In {
                    col: col.clone(),
                    val: sorted,
                }
            }
            other => other.clone(),
        }
    }
}

/// A configurable filter slot shown in the filter panel.
///
/// Slot identity is the `(op, col)` pair of the embedded condition;
/// `cdl_only` slots are ignored unless the CDL view is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub args: FilterArgs,
    pub title: Option<String>,
    pub meta_data_index: Option<MetaDataIndex>,
    pub cdl_only: bool,
}

impl FilterOption {
    pub fn new(args: FilterArgs) -> Self {
        Self {
            args,
            title: None,
            meta_data_index: None,
            cdl_only: false,
        }
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn meta(mut self, index: MetaDataIndex) -> Self {
        self.meta_data_index = Some(index);
        self
    }

    pub fn cdl_only(mut self) -> Self {
        self.cdl_only = true;
        self
    }
}

/// Named boolean view toggles, each mapping to a server-side predicate.
///
/// Absent keys decode as `false`, and `false` fields are omitted when
/// encoding, so the all-default value serializes as `{}`.
/// `ViewArgs::default()` is the single source of the defaulted shape used
/// by preset drift comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewArgs {
    #[serde(skip_serializing_if = "is_false")]
    pub cdl_view: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub pending_rush_local: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub pending_cdl: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub prioritize: bool,
}

/// Single active sort column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SorterArgs {
    pub col: String,
    pub desc: bool,
}

impl Default for SorterArgs {
    fn default() -> Self {
        Self {
            col: "id".to_string(),
            desc: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_args_wire_shape() {
        let filter = FilterArgs::In {
            col: "tags".to_string(),
            val: vec!["Rush".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"op":"in","col":"tags","val":["Rush"]}"#
        );

        let parsed: FilterArgs =
            serde_json::from_str(r#"{"op":"between","col":"createdDate","val":["a","b"]}"#)
                .unwrap();
        assert_eq!(
            parsed,
            FilterArgs::Between {
                col: "createdDate".to_string(),
                val: ["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn activity_rules() {
        let empty_in = FilterArgs::In {
            col: "tags".into(),
            val: vec![],
        };
        assert!(!empty_in.is_active());

        let single_in = FilterArgs::In {
            col: "tags".into(),
            val: vec!["Rush".into()],
        };
        assert!(single_in.is_active());

        let one_sided = FilterArgs::Between {
            col: "createdDate".into(),
            val: ["2024-01-01".into(), "".into()],
        };
        assert!(!one_sided.is_active());

        let both_sides = FilterArgs::Between {
            col: "createdDate".into(),
            val: ["2024-01-01".into(), "2024-01-31".into()],
        };
        assert!(both_sides.is_active());

        let empty_like = FilterArgs::Like {
            col: "title".into(),
            val: "".into(),
        };
        assert!(!empty_like.is_active());

        // Whitespace is not the empty string, so it counts as active.
        let whitespace_like = FilterArgs::Like {
            col: "title".into(),
            val: "   ".into(),
        };
        assert!(whitespace_like.is_active());
    }

    #[test]
    fn normalized_sorts_in_values_only() {
        let filter = FilterArgs::In {
            col: "tags".into(),
            val: vec!["Rush".into(), "CDL".into()],
        };
        assert_eq!(
            filter.normalized(),
            FilterArgs::In {
                col: "tags".into(),
                val: vec!["CDL".into(), "Rush".into()],
            }
        );

        let like = FilterArgs::Like {
            col: "title".into(),
            val: "b a".into(),
        };
        assert_eq!(like.normalized(), like);
    }

    #[test]
    fn view_args_defaults_and_wire_shape() {
        assert_eq!(serde_json::to_string(&ViewArgs::default()).unwrap(), "{}");

        let parsed: ViewArgs = serde_json::from_str(r#"{"cdlView":true}"#).unwrap();
        assert!(parsed.cdl_view);
        assert!(!parsed.pending_cdl);
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"cdlView":true}"#
        );
    }

    #[test]
    fn default_sorter_is_id_ascending() {
        let sorter = SorterArgs::default();
        assert_eq!(sorter.col, "id");
        assert!(!sorter.desc);
    }
}
