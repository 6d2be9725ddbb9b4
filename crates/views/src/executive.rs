//! The executive analytics view: one fully denormalized row per
//! performance day, carrying brand, influencer, and campaign context.

use analytics_core::{CampaignStatus, Dataset};
use chrono::NaiveDate;
use serde::Serialize;

use crate::ViewOutput;

/// Output contract of the executive analytics view. Dashboards bind to
/// these field names.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveAnalyticsRow {
    pub date: NaiveDate,
    pub campaign_id: u32,
    pub campaign_type: String,
    pub status: CampaignStatus,
    pub budget: Option<f64>,
    pub brand_id: u32,
    pub brand_name: String,
    pub industry: String,
    pub influencer_id: u32,
    pub influencer_name: String,
    pub platform: String,
    pub category: String,
    pub followers: u64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    /// likes + comments + shares for the day.
    pub engagement: u64,
}

/// Build the view. A performance row joins through its campaign to both
/// the brand and the influencer; if any hop fails the row is dropped and
/// counted.
pub fn executive_analytics(dataset: &Dataset) -> ViewOutput<ExecutiveAnalyticsRow> {
    let mut rows = Vec::with_capacity(dataset.performance.len());
    let mut dropped = 0u64;

    for record in &dataset.performance {
        let Some(campaign) = dataset.campaign(record.campaign_id) else {
            dropped += 1;
            continue;
        };
        let (Some(brand), Some(influencer)) = (
            dataset.brand(campaign.brand_id),
            dataset.influencer(campaign.influencer_id),
        ) else {
            dropped += 1;
            continue;
        };

        rows.push(ExecutiveAnalyticsRow {
            date: record.date,
            campaign_id: campaign.campaign_id,
            campaign_type: campaign.campaign_type.clone(),
            status: campaign.status,
            budget: campaign.budget,
            brand_id: brand.brand_id,
            brand_name: brand.brand_name.clone(),
            industry: brand.industry.clone(),
            influencer_id: influencer.influencer_id,
            influencer_name: influencer.name.clone(),
            platform: influencer.platform.clone(),
            category: influencer.category.clone(),
            followers: influencer.followers,
            impressions: record.impressions,
            clicks: record.clicks,
            conversions: record.conversions,
            revenue: record.revenue,
            engagement: record.engagement(),
        });
    }

    ViewOutput::finish("executive_analytics", rows, dropped)
}
