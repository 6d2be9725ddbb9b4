//! Grouped KPI rows: the executive view aggregated along one dimension.

use std::collections::BTreeMap;

use analytics_core::safe_pct;
use serde::{Deserialize, Serialize};
use views::ExecutiveAnalyticsRow;

/// Grouping dimension for the executive view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Date,
    Campaign,
    Brand,
    Influencer,
    Platform,
    CampaignType,
}

impl Dimension {
    fn key(&self, row: &ExecutiveAnalyticsRow) -> String {
        match self {
            Self::Date => row.date.to_string(),
            Self::Campaign => row.campaign_id.to_string(),
            Self::Brand => row.brand_name.clone(),
            Self::Influencer => row.influencer_name.clone(),
            Self::Platform => row.platform.clone(),
            Self::CampaignType => row.campaign_type.clone(),
        }
    }
}

/// One group's aggregates, with the funnel ratios recomputed from the
/// group totals (never averaged from row-level ratios).
#[derive(Debug, Clone, Serialize)]
pub struct GroupedKpiRow {
    pub key: String,
    pub revenue: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub engagement: u64,
    pub ctr_pct: Option<f64>,
    pub conversion_rate_pct: Option<f64>,
}

pub fn grouped_kpis(rows: &[ExecutiveAnalyticsRow], dimension: Dimension) -> Vec<GroupedKpiRow> {
    #[derive(Default)]
    struct Acc {
        revenue: f64,
        impressions: u64,
        clicks: u64,
        conversions: u64,
        engagement: u64,
    }

    let mut groups: BTreeMap<String, Acc> = BTreeMap::new();
    for row in rows {
        let acc = groups.entry(dimension.key(row)).or_default();
        acc.revenue += row.revenue;
        acc.impressions += row.impressions;
        acc.clicks += row.clicks;
        acc.conversions += row.conversions;
        acc.engagement += row.engagement;
    }

    groups
        .into_iter()
        .map(|(key, acc)| GroupedKpiRow {
            key,
            revenue: acc.revenue,
            impressions: acc.impressions,
            clicks: acc.clicks,
            conversions: acc.conversions,
            engagement: acc.engagement,
            ctr_pct: safe_pct(acc.clicks as f64, acc.impressions as f64),
            conversion_rate_pct: safe_pct(acc.conversions as f64, acc.clicks as f64),
        })
        .collect()
}
