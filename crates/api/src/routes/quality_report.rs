//! The standing data-quality report.

use axum::{extract::State, Json};
use quality::DataQualityReport;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QualityResponse {
    pub warning_count: usize,
    pub clean: bool,
    #[serde(flatten)]
    pub report: DataQualityReport,
}

/// GET /quality - All integrity checks against the loaded snapshot.
pub async fn quality_handler(State(state): State<AppState>) -> Json<QualityResponse> {
    let report = (*state.quality).clone();
    Json(QualityResponse {
        warning_count: report.warning_count(),
        clean: report.is_clean(),
        report,
    })
}
