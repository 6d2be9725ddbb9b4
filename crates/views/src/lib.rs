//! Denormalized analytical views.
//!
//! Each view is a pure function of the dataset: facts joined to their
//! dimensions, plus row-level derived metrics with safe-division
//! semantics. Fact rows whose parent is missing are excluded, but never
//! silently: every view carries an auditable dropped-row count.

pub mod brand_value;
pub mod effectiveness;
pub mod executive;
pub mod growth;
pub mod traffic;

use serde::Serialize;
use tracing::warn;

pub use brand_value::{brand_influencer_value, BrandInfluencerValueRow};
pub use effectiveness::{campaign_effectiveness, CampaignEffectivenessRow};
pub use executive::{executive_analytics, ExecutiveAnalyticsRow};
pub use growth::{growth_strategy, GrowthStrategyRow, REVENUE_PER_CONVERSION};
pub use traffic::{audience_traffic_quality, AudienceTrafficQualityRow};

/// A materialized view: its rows plus the number of fact rows excluded
/// because a required parent was missing from the snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ViewOutput<T> {
    pub rows: Vec<T>,
    pub dropped_rows: u64,
}

impl<T> ViewOutput<T> {
    pub(crate) fn finish(name: &str, rows: Vec<T>, dropped_rows: u64) -> Self {
        if dropped_rows > 0 {
            warn!(view = name, dropped_rows, "Excluded fact rows with missing parents");
        }
        Self { rows, dropped_rows }
    }
}
