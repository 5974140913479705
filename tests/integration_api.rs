//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use energy_nexus::api::{AppState, router};
use energy_nexus::config::AppConfig;

fn build_api_state() -> Arc<AppState> {
    Arc::new(AppState {
        config: AppConfig::demo(),
    })
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(build_api_state());
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn energy_series_is_seedable() {
    let (status, a) = get("/energy-series?hours=12&seed=7").await;
    assert_eq!(status, StatusCode::OK);
    let records = a.as_array().cloned().unwrap_or_default();
    assert_eq!(records.len(), 12);

    let first = &records[0];
    for field in [
        "timestamp",
        "generation_kwh",
        "consumption_kwh",
        "surplus_kwh",
        "price_per_kwh",
    ] {
        assert!(first.get(field).is_some(), "missing {field}");
    }

    let (_, b) = get("/energy-series?hours=12&seed=7").await;
    let gen_a: Vec<_> = records.iter().map(|r| r["generation_kwh"].clone()).collect();
    let gen_b: Vec<_> = b
        .as_array()
        .map(|v| v.iter().map(|r| r["generation_kwh"].clone()).collect())
        .unwrap_or_default();
    assert_eq!(gen_a, gen_b);
}

#[tokio::test]
async fn marketplace_for_postal_code() {
    let (status, json) = get("/marketplace?postal_code=600001&seed=1").await;
    assert_eq!(status, StatusCode::OK);
    let listings = json.as_array().cloned().unwrap_or_default();
    assert_eq!(listings.len(), 5);
    assert_eq!(listings[0]["seller"], "Chennai Solar Co-op");
    assert_eq!(listings[2]["amount_kwh"], 30);
    assert_eq!(listings[2]["price_per_kwh"], 3.95);
    assert_eq!(listings[2]["total_price"], 118.5);
    assert_eq!(listings[0]["location"], "Chennai, Tamil Nadu");
}

#[tokio::test]
async fn marketplace_defaults_to_session_postal_code() {
    let (status, json) = get("/marketplace").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["seller"], "Delhi Solar Co-op");
}

#[tokio::test]
async fn dashboard_views_are_tagged() {
    let (status, json) = get("/dashboard?user_type=prosumer&seed=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view"], "prosumer");
    assert_eq!(json["hourly"].as_array().map(Vec::len), Some(24));

    let (_, json) = get("/dashboard?postal_code=400001").await;
    assert_eq!(json["view"], "consumer");
    assert_eq!(json["grid_price_per_kwh"], 8.1);

    let (_, json) = get("/dashboard?logged_in=false").await;
    assert_eq!(json["view"], "landing");
}

#[tokio::test]
async fn invalid_user_type_is_rejected() {
    let app = router(build_api_state());
    let req = Request::builder()
        .uri("/dashboard?user_type=admin")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error());
}
