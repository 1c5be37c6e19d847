//! Dog food inventory service
//!
//! Registers food products and keeps each product's stock between zero and its
//! maximum capacity.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::Router;
use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::errors::ServiceError;
use crate::handlers::FoodHandlerState;
use crate::repositories::{FoodRepository, InMemoryFoodRepository, SeaOrmFoodRepository};
use crate::services::food::FoodService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub food_service: FoodService,
}

impl AppState {
    pub fn new(config: AppConfig, repository: Arc<dyn FoodRepository>) -> Self {
        Self {
            config,
            food_service: FoodService::new(repository),
        }
    }

    /// Builds the record store selected by `config` and wraps it in state.
    /// Migrations run first when `auto_migrate` is set.
    pub async fn from_config(config: AppConfig) -> Result<Self, ServiceError> {
        let repository: Arc<dyn FoodRepository> = match config.storage_backend() {
            StorageBackend::InMemory => {
                ::tracing::info!("Using in-memory food store");
                Arc::new(InMemoryFoodRepository::new())
            }
            StorageBackend::Database => {
                let pool = db::establish_connection_from_app_config(&config).await?;
                if config.auto_migrate {
                    db::run_migrations(&pool).await?;
                }
                Arc::new(SeaOrmFoodRepository::new(Arc::new(pool)))
            }
        };
        Ok(Self::new(config, repository))
    }
}

impl FoodHandlerState for AppState {
    fn food_service(&self) -> &FoodService {
        &self.food_service
    }
}

/// Routes served under `/api/v1`
pub fn api_v1_routes() -> Router<AppState> {
    Router::new().nest("/foods", handlers::foods::foods_router::<AppState>())
}

/// Full application router: health probes, versioned API, Swagger UI,
/// HTTP tracing and request ids.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", handlers::health::health_routes::<AppState>())
        .nest("/api/v1", api_v1_routes())
        .merge(openapi::swagger_ui())
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
