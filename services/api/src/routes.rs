use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use delivery_fee::error::AppError;
use delivery_fee::fees::{calculate_fee, FeeRequest, FeeResult};
use serde_json::json;
use tracing::{debug, warn};

pub(crate) const DELIVERY_FEE_ROUTE: &str = "/api/v1/delivery/fee";
/// Fee endpoint path of the original service, served by the same handler.
pub(crate) const LEGACY_DELIVERY_FEE_ROUTE: &str = "/wolt/calculateFee";

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(DELIVERY_FEE_ROUTE, post(delivery_fee_endpoint))
        .route(LEGACY_DELIVERY_FEE_ROUTE, post(delivery_fee_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.is_ready() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn delivery_fee_endpoint(
    payload: Result<Json<FeeRequest>, JsonRejection>,
) -> Result<Json<FeeResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected delivery fee payload");
        AppError::from(rejection)
    })?;

    match calculate_fee(&request) {
        Ok(result) => {
            debug!(
                cart_value = request.cart_value,
                delivery_distance = request.delivery_distance,
                number_of_items = request.number_of_items,
                delivery_fee = result.delivery_fee,
                "delivery fee quoted"
            );
            Ok(Json(result))
        }
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "delivery fee request rejected");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState::new(recorder.handle())
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");

        let response = router(test_state())
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let payload = serde_json::from_slice(&bytes).expect("json body");
        (status, payload)
    }

    #[tokio::test]
    async fn quotes_fee_for_valid_request() {
        let (status, body) = post_json(
            DELIVERY_FEE_ROUTE,
            r#"{"cart_value":1000,"delivery_distance":1500,"number_of_items":4,"time":"2024-01-19T16:00:00Z"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "delivery_fee": 360 }));
    }

    #[tokio::test]
    async fn legacy_route_serves_same_quote() {
        let (status, body) = post_json(
            LEGACY_DELIVERY_FEE_ROUTE,
            r#"{"cart_value":790,"delivery_distance":2235,"number_of_items":4,"time":"2024-01-15T13:00:00Z"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["delivery_fee"], 710);
    }

    #[tokio::test]
    async fn negative_values_are_bad_request() {
        let (status, body) = post_json(
            DELIVERY_FEE_ROUTE,
            r#"{"cart_value":-500,"delivery_distance":-1000,"number_of_items":-5,"time":""}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "invalid_input");
    }

    #[tokio::test]
    async fn missing_time_is_bad_request() {
        let (status, body) = post_json(
            DELIVERY_FEE_ROUTE,
            r#"{"cart_value":500,"delivery_distance":100,"number_of_items":1}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "invalid_input");
    }

    #[tokio::test]
    async fn malformed_time_is_bad_request() {
        let (status, body) = post_json(
            DELIVERY_FEE_ROUTE,
            r#"{"cart_value":500,"delivery_distance":100,"number_of_items":1,"time":"not-a-time-string"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "invalid_time_format");
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("not-a-time-string"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) = post_json(DELIVERY_FEE_ROUTE, r#"{"cart_value":"lots"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "invalid_payload");
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let state = test_state();
        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.mark_ready();
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let request = Request::builder()
            .method("GET")
            .uri("/metrics")
            .body(Body::empty())
            .expect("request builds");

        let response = router(test_state())
            .oneshot(request)
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .expect("content type set");
        assert!(content_type.starts_with("text/plain"));
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
