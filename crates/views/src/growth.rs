//! The growth strategy view.
//!
//! This view substitutes a fixed-price revenue proxy for true attributed
//! revenue: `revenue_proxy = conversions × REVENUE_PER_CONVERSION`. That is
//! a modeling assumption, not fact, and the proxy is deliberately named
//! apart from the `revenue` column used everywhere else so the two can
//! never be confused downstream.

use analytics_core::{safe_div, Dataset};
use chrono::NaiveDate;
use serde::Serialize;

use crate::ViewOutput;

/// Assumed value of a single conversion, in the same currency unit as
/// budgets. Inherited from the source reporting model.
pub const REVENUE_PER_CONVERSION: f64 = 50.0;

#[derive(Debug, Clone, Serialize)]
pub struct GrowthStrategyRow {
    pub campaign_id: u32,
    pub date: NaiveDate,
    pub campaign_type: String,
    pub budget: Option<f64>,
    pub clicks: u64,
    pub conversions: u64,
    /// conversions × fixed unit value; a proxy, not attributed revenue.
    pub revenue_proxy: f64,
    /// conversions / clicks as a fraction (not percent); undefined when
    /// clicks = 0.
    pub conversion_rate: Option<f64>,
}

pub fn growth_strategy(dataset: &Dataset) -> ViewOutput<GrowthStrategyRow> {
    let mut rows = Vec::with_capacity(dataset.performance.len());
    let mut dropped = 0u64;

    for record in &dataset.performance {
        let Some(campaign) = dataset.campaign(record.campaign_id) else {
            dropped += 1;
            continue;
        };

        rows.push(GrowthStrategyRow {
            campaign_id: campaign.campaign_id,
            date: record.date,
            campaign_type: campaign.campaign_type.clone(),
            budget: campaign.budget,
            clicks: record.clicks,
            conversions: record.conversions,
            revenue_proxy: record.conversions as f64 * REVENUE_PER_CONVERSION,
            conversion_rate: safe_div(record.conversions as f64, record.clicks as f64),
        });
    }

    ViewOutput::finish("growth_strategy", rows, dropped)
}
