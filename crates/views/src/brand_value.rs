//! The brand/influencer value view: revenue and engagement contribution
//! per brand-influencer pairing, at daily grain.

use analytics_core::Dataset;
use chrono::NaiveDate;
use serde::Serialize;

use crate::ViewOutput;

#[derive(Debug, Clone, Serialize)]
pub struct BrandInfluencerValueRow {
    pub date: NaiveDate,
    pub campaign_id: u32,
    pub brand_id: u32,
    pub brand_name: String,
    pub industry: String,
    pub influencer_id: u32,
    pub influencer_name: String,
    pub platform: String,
    pub category: String,
    pub followers: u64,
    pub engagement_rate: Option<f64>,
    /// True when this brand runs more than one campaign in the snapshot.
    pub repeat_brand: bool,
    pub revenue: f64,
    pub engagement: u64,
    pub conversions: u64,
}

pub fn brand_influencer_value(dataset: &Dataset) -> ViewOutput<BrandInfluencerValueRow> {
    let repeat_brands = dataset.repeat_brands();
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

        rows.push(BrandInfluencerValueRow {
            date: record.date,
            campaign_id: campaign.campaign_id,
            brand_id: brand.brand_id,
            brand_name: brand.brand_name.clone(),
            industry: brand.industry.clone(),
            influencer_id: influencer.influencer_id,
            influencer_name: influencer.name.clone(),
            platform: influencer.platform.clone(),
            category: influencer.category.clone(),
            followers: influencer.followers,
            engagement_rate: influencer.engagement_rate,
            repeat_brand: repeat_brands.contains(&brand.brand_id),
            revenue: record.revenue,
            engagement: record.engagement(),
            conversions: record.conversions,
        });
    }

    ViewOutput::finish("brand_influencer_value", rows, dropped)
}
