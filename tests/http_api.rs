//! Router-level specifications driven through tower's `oneshot`, the
//! same way a real client would reach the service.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use housing_advisor::advisor::evaluation::ScoringConfig;
use housing_advisor::advisor::{advisor_router, AdvisorService};

fn router() -> axum::Router {
    let config = ScoringConfig {
        price_per_sqft_ceiling: 10_000.0,
        affordable_pricing_weight: 25,
        family_bhk_min: 2,
        family_bhk_max: 3,
        family_layout_weight: 20,
        school_threshold: 5,
        school_access_weight: 15,
        hospital_threshold: 4,
        hospital_access_weight: 10,
        transit_threshold: 5,
        transit_access_weight: 10,
        parking_weight: 10,
        max_age_years: 10,
        recent_construction_weight: 10,
        good_investment_threshold: 55,
        confidence_cap: 0.95,
        appreciation_rate: 0.08,
        horizon_years: 5,
        reference_year: 2025,
    };
    advisor_router(Arc::new(AdvisorService::new(config)))
}

fn assess_request(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/properties/assess")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn sample_payload() -> Value {
    json!({
        "bhk": 3,
        "size_sqft": 1500.0,
        "current_price_lakhs": 80.0,
        "year_built": 2020,
        "nearby_schools": 5,
        "nearby_hospitals": 4,
        "public_transport": 5,
        "parking_spaces": 1,
        "floor": 5,
        "total_floors": 10,
        "city": "pune",
        "property_type": "apartment"
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn assess_endpoint_returns_the_full_report() {
    let response = router()
        .oneshot(assess_request(sample_payload()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["assessment"]["score"], 100);
    assert_eq!(body["assessment"]["good_investment"], true);
    assert_eq!(body["assessment"]["recommendation"], "good_investment");
    assert_eq!(body["projection"].as_array().expect("series").len(), 6);
    assert_eq!(body["profile"]["city"], "pune");
    assert!(body["insights"]["observations"]
        .as_array()
        .expect("observations")
        .len()
        > 0);
}

#[tokio::test]
async fn out_of_range_fields_return_bad_request_with_detail() {
    let mut payload = sample_payload();
    payload["bhk"] = json!(9);
    payload["nearby_schools"] = json!(14);

    let response = router()
        .oneshot(assess_request(payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "invalid property submission");
    assert!(body["fields"]["bhk"].is_array());
    assert!(body["fields"]["nearby_schools"].is_array());
}

#[tokio::test]
async fn floor_above_building_height_is_rejected() {
    let mut payload = sample_payload();
    payload["floor"] = json!(12);
    payload["total_floors"] = json!(10);

    let response = router()
        .oneshot(assess_request(payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_payload_is_rejected_before_validation() {
    let response = router()
        .oneshot(assess_request(json!({ "bhk": "three" })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
