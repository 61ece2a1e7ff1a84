use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::AssessmentRequest;
use super::service::{AdvisorService, AssessmentError};

/// Router builder exposing the assessment endpoint.
pub fn advisor_router(service: Arc<AdvisorService>) -> Router {
    Router::new()
        .route("/api/v1/properties/assess", post(assess_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AdvisorService>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    match service.assess(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AssessmentError::Validation(errors)) => {
            let payload = json!({
                "error": "invalid property submission",
                "fields": errors,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
