pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::recommend::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/recommendations", post(handlers::handle_recommend))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::recommend::catalog::Catalog;
    use crate::recommend::engine::RecommendationEngine;

    fn app() -> Router {
        let engine = RecommendationEngine::new(Catalog::embedded().unwrap());
        build_router(AppState {
            engine: Arc::new(engine),
        })
    }

    async fn post_json(body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/recommendations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_recommendations_envelope() {
        let (status, body) = post_json(
            &json!({
                "skills": ["Python", "Java", "SQL", "Git", "Agile"],
                "summary": "ignored"
            })
            .to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        let recs = &body["data"]["recommendations"];
        assert_eq!(recs["matched_industry"], "web_development");
        assert_eq!(recs["job_recommendations"][0]["title"], "Software Engineer");
        assert!(recs["job_recommendations"].as_array().unwrap().len() <= 3);
        assert!(recs["course_recommendations"].as_array().unwrap().len() <= 3);
    }

    #[tokio::test]
    async fn test_unrelated_skills_return_empty_jobs() {
        let (status, body) = post_json(r#"{"skills": ["Welding"]}"#).await;
        assert_eq!(status, StatusCode::OK);
        let recs = &body["data"]["recommendations"];
        assert_eq!(recs["job_recommendations"], json!([]));
        assert!(recs["matched_industry"].is_null());
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_error() {
        let (status, body) = post_json(r#"{"skills": "Python"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/upload-resume").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
