use serde::{Deserialize, Serialize};

/// Response of `GET /overview`: landing-page statistics over the order
/// pipeline. Turnaround figures come pre-aggregated in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    pub local_rush_pending: u64,
    pub cdl_pending: u64,
    pub avg_cdl_scan: f64,
    pub min_cdl_scan: f64,
    pub max_cdl_scan: f64,
    pub avg_cdl: f64,
    pub min_cdl: f64,
    pub max_cdl: f64,
    pub avg_rush_nyc: f64,
    pub min_rush_nyc: f64,
    pub max_rush_nyc: f64,
    pub avg_rush_local: f64,
    pub min_rush_local: f64,
    pub max_rush_local: f64,
}

/// One avg/min/max turnaround panel on the overview page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnaroundStats {
    pub title: &'static str,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl Overview {
    /// The four turnaround panels, in display order.
    pub fn turnaround_stats(&self) -> [TurnaroundStats; 4] {
        [
            TurnaroundStats {
                title: "CDL Vendor Scanning Days",
                avg: self.avg_cdl_scan,
                min: self.min_cdl_scan,
                max: self.max_cdl_scan,
            },
            TurnaroundStats {
                title: "CDL Total Days",
                avg: self.avg_cdl,
                min: self.min_cdl,
                max: self.max_cdl,
            },
            TurnaroundStats {
                title: "Rush-NY Total Days",
                avg: self.avg_rush_nyc,
                min: self.min_rush_nyc,
                max: self.max_rush_nyc,
            },
            TurnaroundStats {
                title: "Rush-Local Total Days",
                avg: self.avg_rush_local,
                min: self.min_rush_local,
                max: self.max_rush_local,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_decodes_camel_case_and_defaults_absent_fields() {
        let overview: Overview = serde_json::from_str(
            r#"{"localRushPending":4,"cdlPending":11,"avgCdlScan":6.5,"minCdlScan":2.0,"maxCdlScan":14.0}"#,
        )
        .unwrap();
        assert_eq!(overview.local_rush_pending, 4);
        assert_eq!(overview.cdl_pending, 11);
        assert_eq!(overview.avg_cdl_scan, 6.5);
        // Absent figures decode as zero rather than failing the page.
        assert_eq!(overview.avg_rush_local, 0.0);
    }

    #[test]
    fn turnaround_panels_group_the_right_fields() {
        let overview = Overview {
            avg_cdl_scan: 6.5,
            min_cdl_scan: 2.0,
            max_cdl_scan: 14.0,
            avg_rush_local: 3.0,
            ..Default::default()
        };
        let panels = overview.turnaround_stats();
        assert_eq!(panels[0].title, "CDL Vendor Scanning Days");
        assert_eq!((panels[0].avg, panels[0].min, panels[0].max), (6.5, 2.0, 14.0));
        assert_eq!(panels[3].title, "Rush-Local Total Days");
        assert_eq!(panels[3].avg, 3.0);
    }
}
