//! Bundled report summaries.
//!
//! Each summary packages several KPI computations into one result row, the
//! way the dashboard's narrative page consumes them.

pub mod rfm;
pub mod summary;

pub use rfm::{rfm_by_campaign, RfmRow};
pub use summary::{
    campaign_effectiveness_summary, engagement_health_summary, CampaignEffectivenessSummary,
    EngagementHealthSummary,
};
