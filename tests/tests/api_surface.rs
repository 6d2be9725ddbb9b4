//! In-process tests for the read-only HTTP surface.

use std::sync::Arc;

use axum_test::TestServer;
use integration_tests::fixtures;

use api::{router, AppState};

fn server() -> TestServer {
    telemetry::health().dataset.set_healthy();
    let state = AppState::new(Arc::new(fixtures::baseline_dataset()));
    TestServer::new(router(state)).expect("Failed to create test server")
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["dataset_loaded"], true);

    server.get("/health/ready").await.assert_status_ok();
    server.get("/health/live").await.assert_status_ok();
}

#[tokio::test]
async fn test_financial_kpis_contract() {
    let server = server();

    let response = server.get("/kpis/financial").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["total_revenue"], 1100.0);
    assert_eq!(body["total_investment"], 1000.0);
    assert_eq!(body["overall_roi_pct"], 10.0);
    assert_eq!(body["campaign_failure_ratio"], 0.0);
    assert_eq!(body["dropped_rows"], 0);
    // Undefined ratios must surface as explicit nulls, so the field is
    // always present.
    assert!(body.get("revenue_volatility_row_grain").is_some());
}

#[tokio::test]
async fn test_quality_report_endpoint() {
    let server = server();

    let response = server.get("/quality").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["clean"], true);
    assert_eq!(body["warning_count"], 0);
}

#[tokio::test]
async fn test_grouped_kpis_by_platform() {
    let server = server();

    let response = server.get("/kpis/grouped/platform").await;
    response.assert_status_ok();
    let rows: serde_json::Value = response.json();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["key"], "Instagram");
    assert_eq!(rows[0]["revenue"], 1100.0);
}

#[tokio::test]
async fn test_unknown_dimension_is_rejected() {
    let server = server();

    let response = server.get("/kpis/grouped/bogus").await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALID_001");
}

#[tokio::test]
async fn test_campaign_curve() {
    let server = server();

    let response = server.get("/kpis/curves/campaign/1").await;
    response.assert_status_ok();
    let points: serde_json::Value = response.json();
    assert_eq!(points.as_array().unwrap().len(), 10);
    assert_eq!(points[9]["cumulative_revenue"], 1100.0);
}

#[tokio::test]
async fn test_unknown_campaign_curve_is_not_found() {
    let server = server();

    let response = server.get("/kpis/curves/campaign/999").await;
    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "NF_001");
}

#[tokio::test]
async fn test_signals_endpoint() {
    let server = server();

    let response = server.get("/kpis/signals").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["revenue_signal"], "PROFITABLE BUT VOLATILE");
    assert!(body["conversion_diagnostic"].is_string());
    assert!(body["growth_outlook"].is_string());
}

#[tokio::test]
async fn test_report_summaries() {
    let server = server();

    let response = server.get("/reports/campaign-effectiveness").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_campaigns"], 1);
    assert_eq!(body["total_revenue"], 1100.0);

    let response = server.get("/reports/engagement-health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_impressions"], 37000);

    let response = server.get("/reports/rfm").await;
    response.assert_status_ok();
    let rows: serde_json::Value = response.json();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["campaign_id"], 1);
    assert!(rows[0]["segment"].is_string());
}

#[tokio::test]
async fn test_monthly_timeseries() {
    let server = server();

    let response = server.get("/kpis/timeseries/monthly").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["revenue"][0]["period"], "2024-03");
    assert_eq!(body["revenue"][0]["value"], 1100.0);
    // A single period has no predecessor: growth is null, not zero.
    assert!(body["month_over_month"][0]["growth_pct"].is_null());
}
