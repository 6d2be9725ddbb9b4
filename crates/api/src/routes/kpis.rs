//! KPI endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use kpi::{
    business_scalability_score, campaign_cumulative_curve, executive_signals, financial_kpis,
    grouped_kpis, influencer_cumulative_curve, monthly_revenue, moving_average, period_growth,
    revenue_volatility, year_over_year_growth, CurvePoint, Dimension, ExecutiveSignals,
    FinancialKpis, Grain, GroupedKpiRow, GrowthPoint, PeriodValue,
};
use serde::Serialize;
use views::{campaign_effectiveness, executive_analytics};

use crate::response::ApiError;
use crate::state::AppState;

/// GET /kpis/financial response: the headline KPI set plus the statistics
/// that feed the executive signals.
#[derive(Debug, Serialize)]
pub struct FinancialResponse {
    #[serde(flatten)]
    pub kpis: FinancialKpis,
    pub revenue_volatility_row_grain: Option<f64>,
    pub revenue_volatility_campaign_grain: Option<f64>,
    pub business_scalability_score: Option<f64>,
    /// Fact rows excluded from the underlying view for missing parents.
    pub dropped_rows: u64,
}

pub async fn financial_handler(State(state): State<AppState>) -> Json<FinancialResponse> {
    let effectiveness = campaign_effectiveness(&state.dataset);
    let executive = executive_analytics(&state.dataset);

    Json(FinancialResponse {
        kpis: financial_kpis(&effectiveness.rows),
        revenue_volatility_row_grain: revenue_volatility(&effectiveness.rows, Grain::Row),
        revenue_volatility_campaign_grain: revenue_volatility(
            &effectiveness.rows,
            Grain::Campaign,
        ),
        business_scalability_score: business_scalability_score(&executive.rows),
        dropped_rows: effectiveness.dropped_rows,
    })
}

/// GET /kpis/grouped/{dimension}
pub async fn grouped_handler(
    State(state): State<AppState>,
    Path(dimension): Path<String>,
) -> Result<Json<Vec<GroupedKpiRow>>, ApiError> {
    let dimension = match dimension.as_str() {
        "date" => Dimension::Date,
        "campaign" => Dimension::Campaign,
        "brand" => Dimension::Brand,
        "influencer" => Dimension::Influencer,
        "platform" => Dimension::Platform,
        "campaign_type" => Dimension::CampaignType,
        other => {
            return Err(ApiError::bad_request(format!(
                "unknown dimension: {other}"
            )))
        }
    };

    let view = executive_analytics(&state.dataset);
    Ok(Json(grouped_kpis(&view.rows, dimension)))
}

/// GET /kpis/signals
pub async fn signals_handler(State(state): State<AppState>) -> Json<ExecutiveSignals> {
    Json(executive_signals(&state.dataset))
}

/// GET /kpis/timeseries/monthly response.
#[derive(Debug, Serialize)]
pub struct MonthlyTimeseriesResponse {
    pub revenue: Vec<PeriodValue>,
    pub month_over_month: Vec<GrowthPoint>,
    pub year_over_year: Vec<GrowthPoint>,
    /// Trailing 3-month moving average.
    pub moving_average_3: Vec<PeriodValue>,
}

pub async fn monthly_handler(State(state): State<AppState>) -> Json<MonthlyTimeseriesResponse> {
    let view = executive_analytics(&state.dataset);
    let revenue = monthly_revenue(&view.rows);

    Json(MonthlyTimeseriesResponse {
        month_over_month: period_growth(&revenue),
        year_over_year: year_over_year_growth(&view.rows),
        moving_average_3: moving_average(&revenue, 3),
        revenue,
    })
}

/// GET /kpis/curves/campaign/{id}
pub async fn campaign_curve_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<CurvePoint>>, ApiError> {
    Ok(Json(campaign_cumulative_curve(&state.dataset, id)?))
}

/// GET /kpis/curves/influencer/{id}
pub async fn influencer_curve_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<CurvePoint>>, ApiError> {
    Ok(Json(influencer_cumulative_curve(&state.dataset, id)?))
}
