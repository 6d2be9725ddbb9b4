//! Null counts for business-critical columns.

use analytics_core::Dataset;
use serde::Serialize;

/// Per-table tally of rows missing a business-critical value.
#[derive(Debug, Clone, Serialize)]
pub struct NullCriticalRow {
    pub table: &'static str,
    pub total_rows: u64,
    pub critical_null_rows: u64,
}

/// Count critical nulls across all five tables.
///
/// Critical columns: campaign.budget (ROI math is undefined without it),
/// influencer.engagement_rate, payment.amount. The other tables carry no
/// nullable critical column but still appear in the tally so the report
/// shape is stable for the dashboard.
pub fn null_critical_counts(dataset: &Dataset) -> Vec<NullCriticalRow> {
    vec![
        NullCriticalRow {
            table: "brands",
            total_rows: dataset.brands.len() as u64,
            critical_null_rows: 0,
        },
        NullCriticalRow {
            table: "influencers",
            total_rows: dataset.influencers.len() as u64,
            critical_null_rows: dataset
                .influencers
                .iter()
                .filter(|i| i.engagement_rate.is_none())
                .count() as u64,
        },
        NullCriticalRow {
            table: "campaigns",
            total_rows: dataset.campaigns.len() as u64,
            critical_null_rows: dataset
                .campaigns
                .iter()
                .filter(|c| c.budget.is_none())
                .count() as u64,
        },
        NullCriticalRow {
            table: "performance",
            total_rows: dataset.performance.len() as u64,
            critical_null_rows: 0,
        },
        NullCriticalRow {
            table: "payments",
            total_rows: dataset.payments.len() as u64,
            critical_null_rows: dataset
                .payments
                .iter()
                .filter(|p| p.amount.is_none())
                .count() as u64,
        },
    ]
}
