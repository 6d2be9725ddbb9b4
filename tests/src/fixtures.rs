//! Dataset builders for integration tests.

use analytics_core::{
    Brand, Campaign, CampaignStatus, Dataset, DatasetSnapshot, Influencer, Payment, PaymentStatus,
    PerformanceRecord,
};
use chrono::NaiveDate;

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

pub fn brand(brand_id: u32) -> Brand {
    Brand {
        brand_id,
        brand_name: format!("Brand {brand_id}"),
        industry: "Retail".into(),
        city: "Mumbai".into(),
        contact: Some(format!("brand{brand_id}@example.com")),
        onboarded_on: date("2023-06-01"),
    }
}

pub fn influencer(influencer_id: u32) -> Influencer {
    Influencer {
        influencer_id,
        name: format!("Influencer {influencer_id}"),
        platform: "Instagram".into(),
        category: "Fashion".into(),
        followers: 250_000,
        city: "Delhi".into(),
        engagement_rate: Some(4.5),
    }
}

pub fn campaign(campaign_id: u32, brand_id: u32, influencer_id: u32, budget: f64) -> Campaign {
    Campaign {
        campaign_id,
        brand_id,
        influencer_id,
        campaign_type: "Awareness".into(),
        start_date: date("2024-03-01"),
        end_date: date("2024-03-10"),
        budget: Some(budget),
        status: CampaignStatus::Active,
    }
}

pub fn perf(campaign_id: u32, day: &str, revenue: f64, impressions: u64) -> PerformanceRecord {
    PerformanceRecord {
        campaign_id,
        date: date(day),
        impressions,
        clicks: impressions / 20,
        likes: 30,
        comments: 10,
        shares: 10,
        conversions: 4,
        revenue,
    }
}

pub fn payment(payment_id: u32, campaign_id: u32, amount: f64) -> Payment {
    Payment {
        payment_id,
        campaign_id,
        date: date("2024-03-15"),
        mode: "Bank Transfer".into(),
        status: PaymentStatus::Paid,
        amount: Some(amount),
    }
}

/// The baseline scenario: one brand, one influencer, one active campaign
/// with budget 1000, and three daily performance rows with revenue
/// 200 / 300 / 600.
pub fn baseline_dataset() -> Dataset {
    Dataset::from_snapshot(baseline_snapshot())
}

pub fn baseline_snapshot() -> DatasetSnapshot {
    DatasetSnapshot {
        brands: vec![brand(1)],
        influencers: vec![influencer(1)],
        campaigns: vec![campaign(1, 1, 1, 1000.0)],
        performance: vec![
            perf(1, "2024-03-01", 200.0, 10_000),
            perf(1, "2024-03-02", 300.0, 12_000),
            perf(1, "2024-03-03", 600.0, 15_000),
        ],
        payments: vec![payment(1, 1, 1000.0)],
    }
}
