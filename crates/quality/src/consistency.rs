//! Logical-consistency checks on the performance facts.

use analytics_core::Dataset;
use chrono::NaiveDate;
use serde::Serialize;

/// Why a performance row is logically inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyKind {
    /// Revenue below zero.
    NegativeRevenue,
    /// Revenue reported on a day with zero impressions.
    RevenueWithoutImpressions,
}

/// One offending performance row, surfaced verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyViolation {
    pub campaign_id: u32,
    pub date: NaiveDate,
    pub impressions: u64,
    pub revenue: f64,
    pub kind: ConsistencyKind,
}

/// Rows that violate the revenue/impressions invariants.
///
/// Violations are reported, never corrected; the rows stay in the dataset
/// and downstream layers decide how to degrade around them.
pub fn consistency_violations(dataset: &Dataset) -> Vec<ConsistencyViolation> {
    let mut violations = Vec::new();
    for record in &dataset.performance {
        if record.negative_revenue() {
            violations.push(ConsistencyViolation {
                campaign_id: record.campaign_id,
                date: record.date,
                impressions: record.impressions,
                revenue: record.revenue,
                kind: ConsistencyKind::NegativeRevenue,
            });
        }
        if record.revenue_anomaly() {
            violations.push(ConsistencyViolation {
                campaign_id: record.campaign_id,
                date: record.date,
                impressions: record.impressions,
                revenue: record.revenue,
                kind: ConsistencyKind::RevenueWithoutImpressions,
            });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_core::{Dataset, DatasetSnapshot, PerformanceRecord};

    fn rec(impressions: u64, revenue: f64) -> PerformanceRecord {
        PerformanceRecord {
            campaign_id: 1,
            date: "2024-01-01".parse().unwrap(),
            impressions,
            clicks: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            conversions: 0,
            revenue,
        }
    }

    #[test]
    fn test_revenue_without_impressions() {
        let dataset = Dataset::from_snapshot(DatasetSnapshot {
            performance: vec![rec(100, 10.0), rec(0, 50.0)],
            ..Default::default()
        });
        let violations = consistency_violations(&dataset);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ConsistencyKind::RevenueWithoutImpressions);
        assert_eq!(violations[0].revenue, 50.0);
    }

    #[test]
    fn test_negative_revenue() {
        let dataset = Dataset::from_snapshot(DatasetSnapshot {
            performance: vec![rec(100, -1.0)],
            ..Default::default()
        });
        let violations = consistency_violations(&dataset);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ConsistencyKind::NegativeRevenue);
    }

    #[test]
    fn test_zero_revenue_zero_impressions_is_fine() {
        let dataset = Dataset::from_snapshot(DatasetSnapshot {
            performance: vec![rec(0, 0.0)],
            ..Default::default()
        });
        assert!(consistency_violations(&dataset).is_empty());
    }
}
