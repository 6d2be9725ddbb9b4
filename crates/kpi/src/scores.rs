//! Composite business scores.

use std::collections::{BTreeMap, HashSet};

use analytics_core::safe_div;
use serde::Serialize;
use views::{BrandInfluencerValueRow, ExecutiveAnalyticsRow};

/// Repeat-brand revenue weight for the leadership score.
const REPEAT_BRAND_WEIGHT: f64 = 1.2;

/// Per-brand leadership score: Σ revenue, weighted ×1.2 on rows belonging
/// to repeat brands.
#[derive(Debug, Clone, Serialize)]
pub struct BrandLeadershipRow {
    pub brand_id: u32,
    pub brand_name: String,
    pub leadership_score: f64,
}

pub fn brand_leadership_scores(rows: &[BrandInfluencerValueRow]) -> Vec<BrandLeadershipRow> {
    let mut scores: BTreeMap<u32, (String, f64)> = BTreeMap::new();
    for row in rows {
        let weight = if row.repeat_brand {
            REPEAT_BRAND_WEIGHT
        } else {
            1.0
        };
        let entry = scores
            .entry(row.brand_id)
            .or_insert_with(|| (row.brand_name.clone(), 0.0));
        entry.1 += row.revenue * weight;
    }

    scores
        .into_iter()
        .map(|(brand_id, (brand_name, leadership_score))| BrandLeadershipRow {
            brand_id,
            brand_name,
            leadership_score,
        })
        .collect()
}

/// (distinct brands × distinct influencers) / distinct campaigns.
///
/// Undefined when the view holds no campaigns.
pub fn business_scalability_score(rows: &[ExecutiveAnalyticsRow]) -> Option<f64> {
    let brands: HashSet<u32> = rows.iter().map(|r| r.brand_id).collect();
    let influencers: HashSet<u32> = rows.iter().map(|r| r.influencer_id).collect();
    let campaigns: HashSet<u32> = rows.iter().map(|r| r.campaign_id).collect();

    safe_div(
        (brands.len() * influencers.len()) as f64,
        campaigns.len() as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn value_row(brand_id: u32, repeat_brand: bool, revenue: f64) -> BrandInfluencerValueRow {
        BrandInfluencerValueRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            campaign_id: 1,
            brand_id,
            brand_name: format!("brand-{brand_id}"),
            industry: "Retail".into(),
            influencer_id: 1,
            influencer_name: "Rhea".into(),
            platform: "Instagram".into(),
            category: "Fashion".into(),
            followers: 1000,
            engagement_rate: None,
            repeat_brand,
            revenue,
            engagement: 0,
            conversions: 0,
        }
    }

    #[test]
    fn test_repeat_brand_rows_are_weighted() {
        let rows = vec![value_row(1, true, 100.0), value_row(2, false, 100.0)];
        let scores = brand_leadership_scores(&rows);
        assert_eq!(scores[0].leadership_score, 120.0);
        assert_eq!(scores[1].leadership_score, 100.0);
    }

    #[test]
    fn test_scalability_score() {
        let row = |brand_id, influencer_id, campaign_id| ExecutiveAnalyticsRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            campaign_id,
            campaign_type: "Awareness".into(),
            status: analytics_core::CampaignStatus::Active,
            budget: None,
            brand_id,
            brand_name: "b".into(),
            industry: "i".into(),
            influencer_id,
            influencer_name: "n".into(),
            platform: "p".into(),
            category: "c".into(),
            followers: 0,
            impressions: 0,
            clicks: 0,
            conversions: 0,
            revenue: 0.0,
            engagement: 0,
        };
        // 2 brands × 3 influencers over 3 campaigns = 2.0
        let rows = vec![row(1, 1, 1), row(1, 2, 2), row(2, 3, 3)];
        assert_eq!(business_scalability_score(&rows), Some(2.0));
        assert_eq!(business_scalability_score(&[]), None);
    }
}
