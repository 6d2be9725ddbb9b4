//! API routes.

pub mod health;
pub mod kpis;
pub mod quality_report;
pub mod reports;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Creates the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::ready_handler))
        .route("/health/live", get(health::live_handler))
        .route("/quality", get(quality_report::quality_handler))
        .route("/kpis/financial", get(kpis::financial_handler))
        .route("/kpis/grouped/:dimension", get(kpis::grouped_handler))
        .route("/kpis/signals", get(kpis::signals_handler))
        .route("/kpis/timeseries/monthly", get(kpis::monthly_handler))
        .route("/kpis/curves/campaign/:id", get(kpis::campaign_curve_handler))
        .route(
            "/kpis/curves/influencer/:id",
            get(kpis::influencer_curve_handler),
        )
        .route(
            "/reports/campaign-effectiveness",
            get(reports::effectiveness_handler),
        )
        .route(
            "/reports/engagement-health",
            get(reports::engagement_health_handler),
        )
        .route("/reports/brand-leadership", get(reports::leadership_handler))
        .route("/reports/rfm", get(reports::rfm_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
