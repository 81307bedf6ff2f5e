use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Faults in the static catalog data. Raised while building a `Catalog`;
/// the service refuses to start on any of these.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog has no job roles")]
    EmptyJobRoles,

    #[error("Catalog has no courses")]
    EmptyCourses,

    #[error("Skill weight for '{skill}' must be in (0, {max}], got {weight}")]
    InvalidWeight { skill: String, weight: f64, max: f64 },

    #[error("Industry cluster '{0}' has no skills")]
    EmptyCluster(String),

    #[error("Industry cluster '{0}' is declared more than once")]
    DuplicateCluster(String),

    #[error("Industry cluster '{cluster}' lists skill '{skill}' more than once")]
    DuplicateClusterSkill { cluster: String, skill: String },

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
