//! Dataset snapshot loading and indexed access.
//!
//! The five base tables arrive as one JSON document produced by the
//! upstream ETL. The snapshot is loaded once at startup and is immutable
//! afterwards; every analytics layer reads the same `Dataset`.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use crate::error::Result;
use crate::model::{Brand, Campaign, Influencer, Payment, PerformanceRecord};

/// The raw snapshot document as written by the ETL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub influencers: Vec<Influencer>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub performance: Vec<PerformanceRecord>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Result of loading a snapshot: the dataset plus any soft validation
/// findings. Findings never block the load; they are reported and the
/// offending rows stay in place for the quality layer to surface.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub warnings: Vec<String>,
}

/// An immutable, indexed snapshot of the five base tables.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub brands: Vec<Brand>,
    pub influencers: Vec<Influencer>,
    pub campaigns: Vec<Campaign>,
    pub performance: Vec<PerformanceRecord>,
    pub payments: Vec<Payment>,

    brand_index: HashMap<u32, usize>,
    influencer_index: HashMap<u32, usize>,
    campaign_index: HashMap<u32, usize>,
}

impl Dataset {
    /// Build an indexed dataset from a raw snapshot.
    pub fn from_snapshot(snapshot: DatasetSnapshot) -> Self {
        let brand_index = snapshot
            .brands
            .iter()
            .enumerate()
            .map(|(i, b)| (b.brand_id, i))
            .collect();
        let influencer_index = snapshot
            .influencers
            .iter()
            .enumerate()
            .map(|(i, inf)| (inf.influencer_id, i))
            .collect();
        let campaign_index = snapshot
            .campaigns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.campaign_id, i))
            .collect();

        Self {
            brands: snapshot.brands,
            influencers: snapshot.influencers,
            campaigns: snapshot.campaigns,
            performance: snapshot.performance,
            payments: snapshot.payments,
            brand_index,
            influencer_index,
            campaign_index,
        }
    }

    /// Load and validate a snapshot from a JSON file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<LoadOutcome> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let snapshot: DatasetSnapshot = serde_json::from_str(&raw)?;
        let warnings = validate_snapshot(&snapshot);

        info!(
            path = %path.display(),
            brands = snapshot.brands.len(),
            influencers = snapshot.influencers.len(),
            campaigns = snapshot.campaigns.len(),
            performance = snapshot.performance.len(),
            payments = snapshot.payments.len(),
            "Loaded dataset snapshot"
        );
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "Snapshot rows failed validation");
        }

        Ok(LoadOutcome {
            dataset: Self::from_snapshot(snapshot),
            warnings,
        })
    }

    pub fn brand(&self, brand_id: u32) -> Option<&Brand> {
        self.brand_index.get(&brand_id).map(|&i| &self.brands[i])
    }

    pub fn influencer(&self, influencer_id: u32) -> Option<&Influencer> {
        self.influencer_index
            .get(&influencer_id)
            .map(|&i| &self.influencers[i])
    }

    pub fn campaign(&self, campaign_id: u32) -> Option<&Campaign> {
        self.campaign_index
            .get(&campaign_id)
            .map(|&i| &self.campaigns[i])
    }

    /// Brands with more than one campaign in the dataset.
    ///
    /// Derived here rather than trusting a persisted repeat-brand flag.
    pub fn repeat_brands(&self) -> HashSet<u32> {
        let mut counts: HashMap<u32, u32> = HashMap::new();
        for campaign in &self.campaigns {
            *counts.entry(campaign.brand_id).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(brand_id, _)| brand_id)
            .collect()
    }

    /// Performance rows for one campaign, in ascending date order.
    pub fn performance_for(&self, campaign_id: u32) -> Vec<&PerformanceRecord> {
        let mut rows: Vec<&PerformanceRecord> = self
            .performance
            .iter()
            .filter(|r| r.campaign_id == campaign_id)
            .collect();
        rows.sort_by_key(|r| r.date);
        rows
    }
}

/// Validate every snapshot row, collecting findings without rejecting any.
///
/// Cross-field checks (end before start) live here; single-field range and
/// length checks come from the `validator` derives on the row types.
fn validate_snapshot(snapshot: &DatasetSnapshot) -> Vec<String> {
    let mut warnings = Vec::new();

    for brand in &snapshot.brands {
        if let Err(e) = brand.validate() {
            warnings.push(format!("brand[{}]: {}", brand.brand_id, e));
        }
    }
    for influencer in &snapshot.influencers {
        if let Err(e) = influencer.validate() {
            warnings.push(format!("influencer[{}]: {}", influencer.influencer_id, e));
        }
    }
    for campaign in &snapshot.campaigns {
        if let Err(e) = campaign.validate() {
            warnings.push(format!("campaign[{}]: {}", campaign.campaign_id, e));
        }
        if campaign.end_date < campaign.start_date {
            warnings.push(format!(
                "campaign[{}]: end_date {} precedes start_date {}",
                campaign.campaign_id, campaign.end_date, campaign.start_date
            ));
        }
    }
    for record in &snapshot.performance {
        if let Err(e) = record.validate() {
            warnings.push(format!(
                "performance[{}@{}]: {}",
                record.campaign_id, record.date, e
            ));
        }
    }
    for payment in &snapshot.payments {
        if let Err(e) = payment.validate() {
            warnings.push(format!("payment[{}]: {}", payment.payment_id, e));
        }
    }

    warnings
}
