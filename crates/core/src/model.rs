//! Entity definitions for the five base tables.
//!
//! Rows are immutable once loaded; the analytics layers only ever read them.
//! Flags the source system stored alongside the raw counts (roi flag,
//! revenue anomaly, zero engagement, repeat brand, duration) are re-derived
//! at read time so they can never drift from the counts themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Campaign lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Completed,
    Cancelled,
    Paused,
    /// Anything the source system emits that we do not recognize.
    #[serde(other)]
    Unknown,
}

/// Payment settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A brand running campaigns.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Brand {
    pub brand_id: u32,
    #[validate(length(min = 1, max = 200))]
    pub brand_name: String,
    #[validate(length(max = 100))]
    pub industry: String,
    #[validate(length(max = 100))]
    pub city: String,
    /// Contact e-mail or phone; not business-critical.
    pub contact: Option<String>,
    pub onboarded_on: NaiveDate,
}

/// An influencer available for campaigns.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Influencer {
    pub influencer_id: u32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 50))]
    pub platform: String,
    #[validate(length(max = 100))]
    pub category: String,
    pub followers: u64,
    #[validate(length(max = 100))]
    pub city: String,
    /// Average engagement rate in percent. Critical for quality reporting.
    #[validate(range(min = 0.0, max = 100.0))]
    pub engagement_rate: Option<f64>,
}

/// A campaign linking one brand to one influencer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Campaign {
    pub campaign_id: u32,
    pub brand_id: u32,
    pub influencer_id: u32,
    #[validate(length(max = 100))]
    pub campaign_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Planned spend. Null budgets leave ROI math undefined for the campaign.
    #[validate(range(min = 0.0))]
    pub budget: Option<f64>,
    pub status: CampaignStatus,
}

impl Campaign {
    /// Campaign duration in days, inclusive of both endpoints.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// One day of delivery metrics for a campaign.
///
/// Composite identity: (campaign_id, date).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PerformanceRecord {
    pub campaign_id: u32,
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub conversions: u64,
    pub revenue: f64,
}

impl PerformanceRecord {
    /// Total engagement: likes + comments + shares.
    pub fn engagement(&self) -> u64 {
        self.likes + self.comments + self.shares
    }

    /// A day with zero interactions of any kind.
    pub fn zero_engagement(&self) -> bool {
        self.engagement() == 0 && self.clicks == 0
    }

    /// Revenue reported without a single impression served.
    pub fn revenue_anomaly(&self) -> bool {
        self.impressions == 0 && self.revenue > 0.0
    }

    pub fn negative_revenue(&self) -> bool {
        self.revenue < 0.0
    }
}

/// A payment made against a campaign.
///
/// Payments are checked for referential integrity but never joined into KPI
/// math; whether `amount` should replace the planned budget in ROI is an
/// open stakeholder question (see DESIGN.md).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Payment {
    pub payment_id: u32,
    pub campaign_id: u32,
    pub date: NaiveDate,
    #[validate(length(max = 50))]
    pub mode: String,
    pub status: PaymentStatus,
    #[validate(range(min = 0.0))]
    pub amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_campaign_duration_inclusive() {
        let campaign = Campaign {
            campaign_id: 1,
            brand_id: 1,
            influencer_id: 1,
            campaign_type: "Awareness".into(),
            start_date: date("2024-03-01"),
            end_date: date("2024-03-10"),
            budget: Some(1000.0),
            status: CampaignStatus::Active,
        };
        assert_eq!(campaign.duration_days(), 10);
    }

    #[test]
    fn test_derived_performance_flags() {
        let rec = PerformanceRecord {
            campaign_id: 1,
            date: date("2024-03-02"),
            impressions: 0,
            clicks: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            conversions: 0,
            revenue: 50.0,
        };
        assert!(rec.revenue_anomaly());
        assert!(rec.zero_engagement());
        assert!(!rec.negative_revenue());
    }

    #[test]
    fn test_unknown_status_deserializes() {
        let status: CampaignStatus = serde_json::from_str("\"Archived\"").unwrap();
        assert_eq!(status, CampaignStatus::Unknown);
    }
}
