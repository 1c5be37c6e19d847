#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use dogfood_api::{
    config::AppConfig,
    db,
    repositories::{FoodRepository, InMemoryFoodRepository, SeaOrmFoodRepository},
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Helper harness that drives the full router without binding a socket.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

fn test_config(database_url: &str) -> AppConfig {
    let mut cfg = AppConfig::new(
        database_url.to_string(),
        "127.0.0.1".to_string(),
        18_080,
        "test".to_string(),
    );
    cfg.db_max_connections = 1;
    cfg.db_min_connections = 1;
    cfg
}

impl TestApp {
    /// Application backed by the in-memory food store.
    pub async fn new() -> Self {
        let mut cfg = test_config("");
        cfg.storage_backend = "in-memory".to_string();
        Self::with_repository(cfg, Arc::new(InMemoryFoodRepository::new()))
    }

    /// Application backed by a fresh in-memory SQLite database.
    pub async fn with_sqlite() -> Self {
        let cfg = test_config("sqlite::memory:");
        let repository = sqlite_repository().await;
        Self::with_repository(cfg, repository)
    }

    fn with_repository(cfg: AppConfig, repository: Arc<dyn FoodRepository>) -> Self {
        let state = AppState::new(cfg, repository);
        let router = dogfood_api::build_router(state.clone());
        Self { router, state }
    }

    /// Send a request against the router.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Send a request with a raw body, bypassing JSON serialization.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: &str,
        body: &'static str,
    ) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Registers a food and returns the created record.
    pub async fn register(&self, body: Value) -> Value {
        let response = self.request(Method::POST, "/api/v1/foods", Some(body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        response_json(response).await
    }
}

/// Sea-orm store over a migrated in-memory SQLite database.
pub async fn sqlite_repository() -> Arc<dyn FoodRepository> {
    let pool = db::establish_connection_from_app_config(&test_config("sqlite::memory:"))
        .await
        .expect("failed to create test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations in tests");
    Arc::new(SeaOrmFoodRepository::new(Arc::new(pool)))
}

/// The reference fixture: 10 of 50 units in stock.
pub fn magnus_premium() -> Value {
    json!({
        "name": "Magnus PREMIUM",
        "brand": "Mars",
        "max": 50,
        "quantity": 10,
        "type": "PREMIUM"
    })
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&body).expect("response body was not valid JSON")
}
