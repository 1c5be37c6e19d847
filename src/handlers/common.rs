use crate::errors::ServiceError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Any body that cannot be decoded is a client error, never 415 or 422.
pub fn json_rejection(rejection: JsonRejection) -> ServiceError {
    debug!(error = %rejection.body_text(), "rejected request body");
    ServiceError::BadRequest(rejection.body_text())
}

pub fn path_rejection(rejection: PathRejection) -> ServiceError {
    debug!(error = %rejection.body_text(), "rejected path parameter");
    ServiceError::BadRequest(rejection.body_text())
}
