//! Typed errors and HTTP mapping.

use crate::validation::FieldErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// PostgreSQL foreign_key_violation. Raised both by restricted deletes and by
/// inserts that lose the race against a concurrent delete of the referent.
const FK_VIOLATION: &str = "23503";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Validation failures carry the field -> messages map verbatim.
            AppError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
            }
            AppError::Config(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "config_error",
                e.to_string(),
            ),
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("not found: {}", what),
            ),
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, "conflict", format!("conflict: {}", msg))
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                format!("bad request: {}", msg),
            ),
            AppError::Db(e) => match &e {
                sqlx::Error::RowNotFound => {
                    (StatusCode::NOT_FOUND, "not_found", "not found".to_string())
                }
                sqlx::Error::Database(db) if db.code().as_deref() == Some(FK_VIOLATION) => (
                    StatusCode::CONFLICT,
                    "conflict",
                    "operation violates a foreign-key constraint".to_string(),
                ),
                _ => {
                    tracing::error!(error = %e, "database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "database_error",
                        "internal database error".to_string(),
                    )
                }
            },
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = AppError::NotFound("customer 7".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let mut errors = FieldErrors::new();
        errors.push("name", "name is required");
        let resp = AppError::Validation(errors).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let resp = AppError::Db(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let resp = AppError::Conflict("customer 3 still has accounts".into()).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn config_error_maps_to_500() {
        let resp = AppError::Config(ConfigError::Missing("DATABASE_URL")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let resp = AppError::BadRequest("body must be a JSON object".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
