//! The two callable summary procedures.

use std::collections::BTreeMap;

use analytics_core::{mean_defined, safe_div, safe_pct, Dataset};
use kpi::financial_kpis;
use serde::Serialize;
use views::campaign_effectiveness;

/// A campaign counts as a high performer at or above this ROI ratio.
const HIGH_PERFORMER_ROI: f64 = 1.3;

/// Engagement effectiveness (engagement / impressions, in percent) at or
/// above this marks a high-efficiency campaign.
const HIGH_EFFICIENCY_ENGAGEMENT_PCT: f64 = 5.0;

/// One-row campaign effectiveness summary.
///
/// Per-campaign ratios are campaign grain: revenue, clicks, and
/// conversions are totalled per campaign first, then divided. Campaigns
/// with an undefined ratio are excluded from the averages and the
/// percentage bases, never counted as zero.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignEffectivenessSummary {
    pub total_campaigns: u64,
    pub total_revenue: f64,
    pub total_investment: f64,
    pub avg_roi_ratio: Option<f64>,
    pub avg_conversion_rate_pct: Option<f64>,
    /// % of budgeted campaigns whose revenue fell below budget.
    pub loss_campaign_pct: Option<f64>,
    /// % of budgeted campaigns with ROI ratio ≥ 1.3.
    pub high_performer_pct: Option<f64>,
}

pub fn campaign_effectiveness_summary(dataset: &Dataset) -> CampaignEffectivenessSummary {
    let view = campaign_effectiveness(dataset);
    let kpis = financial_kpis(&view.rows);

    #[derive(Default)]
    struct Acc {
        budget: Option<f64>,
        revenue: f64,
        clicks: u64,
        conversions: u64,
    }

    let mut campaigns: BTreeMap<u32, Acc> = BTreeMap::new();
    for row in &view.rows {
        let acc = campaigns.entry(row.campaign_id).or_default();
        acc.budget = acc.budget.or(row.budget);
        acc.revenue += row.revenue;
        acc.clicks += row.clicks;
        acc.conversions += row.conversions;
    }

    let roi_ratios: Vec<Option<f64>> = campaigns
        .values()
        .map(|c| c.budget.and_then(|b| safe_div(c.revenue, b)))
        .collect();
    let defined_roi: Vec<f64> = roi_ratios.iter().flatten().copied().collect();

    let losses = defined_roi.iter().filter(|&&r| r < 1.0).count();
    let high = defined_roi
        .iter()
        .filter(|&&r| r >= HIGH_PERFORMER_ROI)
        .count();

    CampaignEffectivenessSummary {
        total_campaigns: campaigns.len() as u64,
        total_revenue: kpis.total_revenue,
        total_investment: kpis.total_investment,
        avg_roi_ratio: mean_defined(roi_ratios.iter().copied()),
        avg_conversion_rate_pct: mean_defined(
            campaigns
                .values()
                .map(|c| safe_pct(c.conversions as f64, c.clicks as f64)),
        ),
        loss_campaign_pct: safe_pct(losses as f64, defined_roi.len() as f64),
        high_performer_pct: safe_pct(high as f64, defined_roi.len() as f64),
    }
}

/// One-row engagement health summary.
#[derive(Debug, Clone, Serialize)]
pub struct EngagementHealthSummary {
    pub total_engagement: u64,
    pub total_impressions: u64,
    /// engagement / impressions × 100.
    pub engagement_effectiveness_pct: Option<f64>,
    /// Deduplicated investment / total engagement.
    pub cost_per_engagement: Option<f64>,
    /// % of campaigns whose own effectiveness reaches the high-efficiency
    /// bar.
    pub high_efficiency_pct: Option<f64>,
}

pub fn engagement_health_summary(dataset: &Dataset) -> EngagementHealthSummary {
    let view = campaign_effectiveness(dataset);
    let kpis = financial_kpis(&view.rows);

    // Engagement is not carried on the effectiveness view; read it off the
    // facts that survived the join.
    let mut per_campaign: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
    for record in &dataset.performance {
        if dataset.campaign(record.campaign_id).is_some() {
            let entry = per_campaign.entry(record.campaign_id).or_default();
            entry.0 += record.engagement();
            entry.1 += record.impressions;
        }
    }

    let total_engagement: u64 = per_campaign.values().map(|&(e, _)| e).sum();
    let total_impressions: u64 = per_campaign.values().map(|&(_, i)| i).sum();

    let rates: Vec<Option<f64>> = per_campaign
        .values()
        .map(|&(engagement, impressions)| safe_pct(engagement as f64, impressions as f64))
        .collect();
    let defined: Vec<f64> = rates.iter().flatten().copied().collect();
    let efficient = defined
        .iter()
        .filter(|&&r| r >= HIGH_EFFICIENCY_ENGAGEMENT_PCT)
        .count();

    EngagementHealthSummary {
        total_engagement,
        total_impressions,
        engagement_effectiveness_pct: safe_pct(total_engagement as f64, total_impressions as f64),
        cost_per_engagement: safe_div(kpis.total_investment, total_engagement as f64),
        high_efficiency_pct: safe_pct(efficient as f64, defined.len() as f64),
    }
}
