//! Bundled report endpoints.

use axum::{extract::State, Json};
use kpi::{brand_leadership_scores, BrandLeadershipRow};
use reporting::{
    campaign_effectiveness_summary, engagement_health_summary, rfm_by_campaign,
    CampaignEffectivenessSummary, EngagementHealthSummary, RfmRow,
};
use views::brand_influencer_value;

use crate::state::AppState;

/// GET /reports/campaign-effectiveness
pub async fn effectiveness_handler(
    State(state): State<AppState>,
) -> Json<CampaignEffectivenessSummary> {
    Json(campaign_effectiveness_summary(&state.dataset))
}

/// GET /reports/engagement-health
pub async fn engagement_health_handler(
    State(state): State<AppState>,
) -> Json<EngagementHealthSummary> {
    Json(engagement_health_summary(&state.dataset))
}

/// GET /reports/brand-leadership
pub async fn leadership_handler(State(state): State<AppState>) -> Json<Vec<BrandLeadershipRow>> {
    let view = brand_influencer_value(&state.dataset);
    Json(brand_leadership_scores(&view.rows))
}

/// GET /reports/rfm
pub async fn rfm_handler(State(state): State<AppState>) -> Json<Vec<RfmRow>> {
    Json(rfm_by_campaign(&state.dataset))
}
