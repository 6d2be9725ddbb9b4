//! Statistical helpers and the revenue volatility score.

use std::collections::BTreeMap;

use analytics_core::safe_div;
use serde::{Deserialize, Serialize};
use views::CampaignEffectivenessRow;

/// Aggregation grain for statistics over the exploded view.
///
/// The view has one row per campaign-day, so the same statistic differs
/// depending on whether it is taken over daily rows or over per-campaign
/// totals. The grain is an explicit parameter rather than an accident of
/// which columns repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grain {
    Row,
    Campaign,
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    safe_div(values.iter().sum(), values.len() as f64)
}

/// Population standard deviation; `None` for an empty slice.
pub fn population_stddev(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let variance = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Coefficient of variation of revenue: population stddev / mean.
///
/// Undefined when the series is empty or its mean is zero.
pub fn revenue_volatility(rows: &[CampaignEffectivenessRow], grain: Grain) -> Option<f64> {
    let values: Vec<f64> = match grain {
        Grain::Row => rows.iter().map(|r| r.revenue).collect(),
        Grain::Campaign => {
            let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
            for row in rows {
                *totals.entry(row.campaign_id).or_default() += row.revenue;
            }
            totals.into_values().collect()
        }
    };

    let mu = mean(&values)?;
    if mu == 0.0 {
        return None;
    }
    population_stddev(&values).map(|sd| sd / mu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_core::CampaignStatus;
    use chrono::NaiveDate;

    fn row(campaign_id: u32, revenue: f64) -> CampaignEffectivenessRow {
        CampaignEffectivenessRow {
            campaign_id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            campaign_type: "Awareness".into(),
            status: CampaignStatus::Active,
            budget: Some(100.0),
            impressions: 0,
            clicks: 0,
            conversions: 0,
            revenue,
            ctr_pct: None,
            conversion_rate_pct: None,
            roi_ratio: None,
        }
    }

    #[test]
    fn test_population_stddev() {
        // Values 2, 4, 6: mean 4, population variance 8/3.
        let sd = population_stddev(&[2.0, 4.0, 6.0]).unwrap();
        assert!((sd - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_grain_changes_the_answer() {
        // Two campaigns with identical totals but different daily spreads.
        let rows = vec![row(1, 100.0), row(1, 0.0), row(2, 50.0), row(2, 50.0)];
        let by_row = revenue_volatility(&rows, Grain::Row).unwrap();
        let by_campaign = revenue_volatility(&rows, Grain::Campaign).unwrap();
        assert!(by_row > 0.0);
        // Campaign totals are both 100, so campaign-grain volatility is 0.
        assert_eq!(by_campaign, 0.0);
    }

    #[test]
    fn test_volatility_undefined_for_zero_mean() {
        let rows = vec![row(1, 0.0), row(2, 0.0)];
        assert_eq!(revenue_volatility(&rows, Grain::Row), None);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_stddev(&[]), None);
        assert_eq!(revenue_volatility(&[], Grain::Row), None);
    }
}
