use crate::handlers::foods::FoodHandlerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use std::time::Instant;

/// Basic liveness probe - just checks if the service is running
pub async fn liveness_check() -> impl IntoResponse {
    Json(json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Readiness probe - checks that the record store answers
pub async fn readiness_check<S>(State(state): State<S>) -> impl IntoResponse
where
    S: FoodHandlerState,
{
    let start = Instant::now();
    let result = state.food_service().repository().ping().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "up",
                "checks": {
                    "store": { "status": "up", "latency_ms": latency_ms }
                }
            })),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "down",
                "checks": {
                    "store": { "status": "down", "error": err.to_string() }
                }
            })),
        ),
    }
}

pub fn health_routes<S>() -> Router<S>
where
    S: FoodHandlerState,
{
    Router::new()
        .route("/", get(liveness_check))
        .route("/ready", get(readiness_check::<S>))
}
