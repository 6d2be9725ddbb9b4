//! Duplicate primary-key detection.
//!
//! A non-empty result means key enforcement failed somewhere upstream;
//! with proper constraints every group should have exactly one row.

use std::collections::HashMap;

use analytics_core::Dataset;
use chrono::NaiveDate;
use serde::Serialize;

/// Primary-key values appearing more than once, per table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DuplicateKeyReport {
    pub brand_ids: Vec<u32>,
    pub influencer_ids: Vec<u32>,
    pub campaign_ids: Vec<u32>,
    /// Duplicated (campaign_id, date) composite keys.
    pub performance_keys: Vec<(u32, NaiveDate)>,
    pub payment_ids: Vec<u32>,
}

impl DuplicateKeyReport {
    pub fn total(&self) -> usize {
        self.brand_ids.len()
            + self.influencer_ids.len()
            + self.campaign_ids.len()
            + self.performance_keys.len()
            + self.payment_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn duplicated<K: std::hash::Hash + Eq + Ord + Copy>(keys: impl Iterator<Item = K>) -> Vec<K> {
    let mut counts: HashMap<K, u32> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    let mut dupes: Vec<K> = counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(k, _)| k)
        .collect();
    dupes.sort();
    dupes
}

/// Group every table by its primary key and report groups with count > 1.
pub fn duplicate_keys(dataset: &Dataset) -> DuplicateKeyReport {
    DuplicateKeyReport {
        brand_ids: duplicated(dataset.brands.iter().map(|b| b.brand_id)),
        influencer_ids: duplicated(dataset.influencers.iter().map(|i| i.influencer_id)),
        campaign_ids: duplicated(dataset.campaigns.iter().map(|c| c.campaign_id)),
        performance_keys: duplicated(
            dataset
                .performance
                .iter()
                .map(|r| (r.campaign_id, r.date)),
        ),
        payment_ids: duplicated(dataset.payments.iter().map(|p| p.payment_id)),
    }
}
