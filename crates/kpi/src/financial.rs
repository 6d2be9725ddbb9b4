//! Financial KPIs over the campaign effectiveness view.
//!
//! Revenue sums at row grain; investment at campaign grain. A campaign's
//! budget repeats once per daily performance row in the view, so budgets
//! are deduplicated per campaign before summing. Summing the exploded
//! budget column directly would overcount by the number of daily rows per
//! campaign.

use std::collections::BTreeMap;

use analytics_core::{safe_div, safe_pct};
use serde::Serialize;
use views::CampaignEffectivenessRow;

/// The headline financial KPI set. Undefined ratios serialize as null.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialKpis {
    /// Σ revenue, row grain.
    pub total_revenue: f64,
    /// Σ budget, one budget per distinct campaign.
    pub total_investment: f64,
    pub total_conversions: u64,
    /// Distinct campaigns present in the view.
    pub campaign_count: u64,
    /// (revenue − investment) / investment × 100.
    pub overall_roi_pct: Option<f64>,
    /// revenue / investment.
    pub revenue_efficiency_index: Option<f64>,
    /// investment / conversions, campaign-grain budget.
    pub cost_per_conversion: Option<f64>,
    /// % of distinct campaigns with zero total revenue.
    pub campaign_failure_ratio: Option<f64>,
    /// Largest single campaign's share of total revenue, in percent.
    pub revenue_concentration_pct: Option<f64>,
}

pub fn financial_kpis(rows: &[CampaignEffectivenessRow]) -> FinancialKpis {
    let mut budgets: BTreeMap<u32, Option<f64>> = BTreeMap::new();
    let mut campaign_revenue: BTreeMap<u32, f64> = BTreeMap::new();
    let mut total_revenue = 0.0;
    let mut total_conversions = 0u64;

    for row in rows {
        budgets.entry(row.campaign_id).or_insert(row.budget);
        *campaign_revenue.entry(row.campaign_id).or_default() += row.revenue;
        total_revenue += row.revenue;
        total_conversions += row.conversions;
    }

    let total_investment: f64 = budgets.values().filter_map(|b| *b).sum();
    let campaign_count = campaign_revenue.len() as u64;

    let failed = campaign_revenue.values().filter(|&&r| r == 0.0).count();
    let top_campaign_revenue = campaign_revenue
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    FinancialKpis {
        total_revenue,
        total_investment,
        total_conversions,
        campaign_count,
        overall_roi_pct: safe_pct(total_revenue - total_investment, total_investment),
        revenue_efficiency_index: safe_div(total_revenue, total_investment),
        cost_per_conversion: safe_div(total_investment, total_conversions as f64),
        campaign_failure_ratio: safe_pct(failed as f64, campaign_count as f64),
        revenue_concentration_pct: if campaign_count == 0 {
            None
        } else {
            safe_pct(top_campaign_revenue, total_revenue)
        },
    }
}
