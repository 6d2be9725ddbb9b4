//! RFM (recency / frequency / monetary) segmentation over the
//! performance facts, grouped by campaign.
//!
//! Scores are rank-based quintiles from 1 to 5. The snapshot date is the
//! day after the last recorded performance date, so the most recent
//! campaign has recency 1. Ties rank by first occurrence, which keeps the
//! scoring deterministic for equal values.

use std::collections::BTreeMap;

use analytics_core::Dataset;
use chrono::Days;
use serde::Serialize;

/// One campaign's RFM result row.
#[derive(Debug, Clone, Serialize)]
pub struct RfmRow {
    pub campaign_id: u32,
    /// Days between the campaign's last activity and the snapshot date.
    pub recency_days: i64,
    /// Number of performance rows.
    pub frequency: u64,
    /// Σ revenue.
    pub monetary: f64,
    pub r_score: u8,
    pub f_score: u8,
    pub m_score: u8,
    /// Concatenated "RFM" score string, e.g. "545".
    pub rfm: String,
    pub segment: &'static str,
}

/// Quintile scores for a list of values.
///
/// Values are ranked ascending (descending when `reverse`, so that lower
/// raw values earn higher scores) with ties broken by position, then the
/// ranks are cut into five equal-frequency bins via linearly interpolated
/// quantile boundaries.
fn quintile_scores(values: &[f64], reverse: bool) -> Vec<u8> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        let cmp = values[a].partial_cmp(&values[b]).unwrap_or(std::cmp::Ordering::Equal);
        if reverse {
            cmp.reverse()
        } else {
            cmp
        }
    });

    // rank[i] = 1-based rank of element i.
    let mut rank = vec![0usize; n];
    for (r, &i) in order.iter().enumerate() {
        rank[i] = r + 1;
    }

    // Quantile boundaries over ranks 1..n at 0.2, 0.4, 0.6, 0.8.
    let boundaries: Vec<f64> = (1..5)
        .map(|k| 1.0 + 0.2 * k as f64 * (n as f64 - 1.0))
        .collect();

    rank.into_iter()
        .map(|r| {
            let crossed = boundaries.iter().filter(|&&b| r as f64 > b).count();
            (crossed + 1) as u8
        })
        .collect()
}

/// Segment ladder, evaluated in order with a mandatory default.
fn segment(r: u8, f: u8, m: u8) -> &'static str {
    if r >= 4 && f >= 4 && m >= 4 {
        "Champions"
    } else if f >= 4 && m >= 4 {
        "Loyal Customers"
    } else if r >= 4 {
        "Recent Customers"
    } else if r <= 2 && f >= 3 {
        "At Risk"
    } else {
        "Others"
    }
}

/// Compute RFM rows for every campaign with performance data, ordered by
/// campaign id.
pub fn rfm_by_campaign(dataset: &Dataset) -> Vec<RfmRow> {
    struct Acc {
        last_date: chrono::NaiveDate,
        frequency: u64,
        monetary: f64,
    }

    let mut campaigns: BTreeMap<u32, Acc> = BTreeMap::new();
    let mut max_date = None;

    for record in &dataset.performance {
        max_date = Some(match max_date {
            Some(d) if d >= record.date => d,
            _ => record.date,
        });
        campaigns
            .entry(record.campaign_id)
            .and_modify(|acc| {
                acc.last_date = acc.last_date.max(record.date);
                acc.frequency += 1;
                acc.monetary += record.revenue;
            })
            .or_insert(Acc {
                last_date: record.date,
                frequency: 1,
                monetary: record.revenue,
            });
    }

    let Some(max_date) = max_date else {
        return Vec::new();
    };
    let snapshot_date = max_date + Days::new(1);

    let ids: Vec<u32> = campaigns.keys().copied().collect();
    let recency: Vec<f64> = campaigns
        .values()
        .map(|a| (snapshot_date - a.last_date).num_days() as f64)
        .collect();
    let frequency: Vec<f64> = campaigns.values().map(|a| a.frequency as f64).collect();
    let monetary: Vec<f64> = campaigns.values().map(|a| a.monetary).collect();

    let r_scores = quintile_scores(&recency, true);
    let f_scores = quintile_scores(&frequency, false);
    let m_scores = quintile_scores(&monetary, false);

    ids.iter()
        .enumerate()
        .map(|(i, &campaign_id)| {
            let (r, f, m) = (r_scores[i], f_scores[i], m_scores[i]);
            RfmRow {
                campaign_id,
                recency_days: recency[i] as i64,
                frequency: frequency[i] as u64,
                monetary: monetary[i],
                r_score: r,
                f_score: f,
                m_score: m,
                rfm: format!("{r}{f}{m}"),
                segment: segment(r, f, m),
            }
        })
        .collect()
}
