//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use super::AppState;
use super::error::ApiError;
use super::types::{EstimateRequest, HealthResponse};
use crate::report::{EstimateRecord, ReferenceCard};
use crate::runner::calculate;

/// Validates, estimates and projects one submission.
///
/// `POST /estimate` → 200 + `EstimateRecord` JSON
/// missing fields or unknown selector → 400 + `ErrorResponse`
pub async fn post_estimate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateRecord>, ApiError> {
    let rate = request
        .rate
        .unwrap_or(state.settings.tariff.rate_per_kwh);
    let submission = request.into_submission()?;
    let calc = calculate(submission, rate)?;
    Ok(Json(EstimateRecord::new(
        &calc,
        &state.settings.tariff.currency,
    )))
}

/// Returns the constants behind the estimate and the tariff bounds.
///
/// `GET /reference` → 200 + `ReferenceCard` JSON
pub async fn get_reference() -> Json<ReferenceCard> {
    Json(ReferenceCard::new())
}

/// `GET /health` → 200 + `{"status":"ok"}`
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::Settings;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState {
            settings: Settings::default(),
        })
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/estimate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn estimate_returns_200() {
        let app = router(make_test_state());
        let resp = app
            .oneshot(post_json(
                r#"{"name":"Dev","city":"Indore","area":"Vijay Nagar",
                    "housing_type":"Flat","configuration":"1BHK"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["total_kwh"], 2.4);
        assert_eq!(json["rate"], 5);
        assert_eq!(json["breakdown"][0]["category"], "1BHK Base");
        assert_eq!(json["breakdown"][0]["percentage"], 100.0);
    }

    #[tokio::test]
    async fn missing_fields_return_400() {
        let app = router(make_test_state());
        let resp = app
            .oneshot(post_json(r#"{"name":"Dev","configuration":"2BHK"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "ValidationError");
        assert_eq!(json["message"], "missing required fields");
    }

    #[tokio::test]
    async fn unknown_configuration_returns_400() {
        let app = router(make_test_state());
        let resp = app
            .oneshot(post_json(
                r#"{"name":"Dev","city":"Indore","area":"Palasia",
                    "housing_type":"Flat","configuration":"5BHK"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "BadRequest");
    }

    #[tokio::test]
    async fn rate_out_of_range_is_rejected() {
        let app = router(make_test_state());
        let resp = app
            .oneshot(post_json(r#"{"rate":11}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn reference_lists_constants() {
        let app = router(make_test_state());
        let req = Request::builder()
            .uri("/reference")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["base"][1]["configuration"], "2BHK");
        assert_eq!(json["base"][1]["energy_kwh"], 3.6);
        assert_eq!(json["appliances"][0]["appliance"], "Air Conditioning");
        assert_eq!(json["rate_default"], 5);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = router(make_test_state());
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }
}
