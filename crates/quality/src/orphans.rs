//! Orphan foreign-key detection.

use std::collections::{BTreeSet, HashSet};

use analytics_core::Dataset;
use serde::Serialize;

/// Foreign-key values in a dependent table that resolve to nothing.
///
/// Each set holds the offending key values themselves; all four sets empty
/// means referential integrity holds across the snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrphanReport {
    /// brand_id values referenced by campaigns but absent from brands.
    pub campaign_brand_ids: BTreeSet<u32>,
    /// influencer_id values referenced by campaigns but absent from influencers.
    pub campaign_influencer_ids: BTreeSet<u32>,
    /// campaign_id values referenced by performance but absent from campaigns.
    pub performance_campaign_ids: BTreeSet<u32>,
    /// campaign_id values referenced by payments but absent from campaigns.
    pub payment_campaign_ids: BTreeSet<u32>,
}

impl OrphanReport {
    pub fn total(&self) -> usize {
        self.campaign_brand_ids.len()
            + self.campaign_influencer_ids.len()
            + self.performance_campaign_ids.len()
            + self.payment_campaign_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Collect every dangling foreign-key value in the snapshot.
pub fn orphan_references(dataset: &Dataset) -> OrphanReport {
    let brand_ids: HashSet<u32> = dataset.brands.iter().map(|b| b.brand_id).collect();
    let influencer_ids: HashSet<u32> = dataset
        .influencers
        .iter()
        .map(|i| i.influencer_id)
        .collect();
    let campaign_ids: HashSet<u32> = dataset.campaigns.iter().map(|c| c.campaign_id).collect();

    let mut report = OrphanReport::default();

    for campaign in &dataset.campaigns {
        if !brand_ids.contains(&campaign.brand_id) {
            report.campaign_brand_ids.insert(campaign.brand_id);
        }
        if !influencer_ids.contains(&campaign.influencer_id) {
            report.campaign_influencer_ids.insert(campaign.influencer_id);
        }
    }
    for record in &dataset.performance {
        if !campaign_ids.contains(&record.campaign_id) {
            report.performance_campaign_ids.insert(record.campaign_id);
        }
    }
    for payment in &dataset.payments {
        if !campaign_ids.contains(&payment.campaign_id) {
            report.payment_campaign_ids.insert(payment.campaign_id);
        }
    }

    report
}
