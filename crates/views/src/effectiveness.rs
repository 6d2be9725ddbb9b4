//! The campaign effectiveness view: daily fact rows with row-level
//! funnel ratios.

use analytics_core::{safe_div, safe_pct, CampaignStatus, Dataset};
use chrono::NaiveDate;
use serde::Serialize;

use crate::ViewOutput;

/// Daily campaign row with derived funnel metrics. A `None` ratio means
/// the denominator was zero for that day: undefined, not zero.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignEffectivenessRow {
    pub campaign_id: u32,
    pub date: NaiveDate,
    pub campaign_type: String,
    pub status: CampaignStatus,
    pub budget: Option<f64>,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    /// clicks / impressions × 100; undefined when impressions = 0.
    pub ctr_pct: Option<f64>,
    /// conversions / clicks × 100; undefined when clicks = 0.
    pub conversion_rate_pct: Option<f64>,
    /// revenue / budget; undefined when the budget is zero or missing.
    pub roi_ratio: Option<f64>,
}

pub fn campaign_effectiveness(dataset: &Dataset) -> ViewOutput<CampaignEffectivenessRow> {
    let mut rows = Vec::with_capacity(dataset.performance.len());
    let mut dropped = 0u64;

    for record in &dataset.performance {
        let Some(campaign) = dataset.campaign(record.campaign_id) else {
            dropped += 1;
            continue;
        };

        rows.push(CampaignEffectivenessRow {
            campaign_id: campaign.campaign_id,
            date: record.date,
            campaign_type: campaign.campaign_type.clone(),
            status: campaign.status,
            budget: campaign.budget,
            impressions: record.impressions,
            clicks: record.clicks,
            conversions: record.conversions,
            revenue: record.revenue,
            ctr_pct: safe_pct(record.clicks as f64, record.impressions as f64),
            conversion_rate_pct: safe_pct(record.conversions as f64, record.clicks as f64),
            roi_ratio: campaign
                .budget
                .and_then(|budget| safe_div(record.revenue, budget)),
        });
    }

    ViewOutput::finish("campaign_effectiveness", rows, dropped)
}
