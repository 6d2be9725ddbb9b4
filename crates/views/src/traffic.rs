//! The audience traffic quality view: impressions, clicks, and CTR per
//! daily row, carrying the influencer's platform and category.

use analytics_core::{safe_pct, Dataset};
use chrono::NaiveDate;
use serde::Serialize;

use crate::ViewOutput;

#[derive(Debug, Clone, Serialize)]
pub struct AudienceTrafficQualityRow {
    pub date: NaiveDate,
    pub campaign_id: u32,
    pub influencer_id: u32,
    pub platform: String,
    pub category: String,
    pub followers: u64,
    pub engagement_rate: Option<f64>,
    pub impressions: u64,
    pub clicks: u64,
    pub engagement: u64,
    /// clicks / impressions × 100; undefined when impressions = 0.
    pub ctr_pct: Option<f64>,
    /// True when the day saw no clicks and no interactions at all.
    pub zero_engagement: bool,
}

pub fn audience_traffic_quality(dataset: &Dataset) -> ViewOutput<AudienceTrafficQualityRow> {
    let mut rows = Vec::with_capacity(dataset.performance.len());
    let mut dropped = 0u64;

    for record in &dataset.performance {
        let Some(campaign) = dataset.campaign(record.campaign_id) else {
            dropped += 1;
            continue;
        };
        let Some(influencer) = dataset.influencer(campaign.influencer_id) else {
            dropped += 1;
            continue;
        };

        rows.push(AudienceTrafficQualityRow {
            date: record.date,
            campaign_id: campaign.campaign_id,
            influencer_id: influencer.influencer_id,
            platform: influencer.platform.clone(),
            category: influencer.category.clone(),
            followers: influencer.followers,
            engagement_rate: influencer.engagement_rate,
            impressions: record.impressions,
            clicks: record.clicks,
            engagement: record.engagement(),
            ctr_pct: safe_pct(record.clicks as f64, record.impressions as f64),
            zero_engagement: record.zero_engagement(),
        });
    }

    ViewOutput::finish("audience_traffic_quality", rows, dropped)
}
