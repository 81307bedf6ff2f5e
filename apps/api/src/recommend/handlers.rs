//! Axum route handlers for the Recommendations API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::models::recommendation::RecommendationSet;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Output of the upstream resume analysis. Fields other than these three
/// (key phrases, entities, summary) are accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_level: Option<String>,
    pub industry_preference: Option<String>,
}

impl From<RecommendationRequest> for CandidateProfile {
    fn from(request: RecommendationRequest) -> Self {
        let mut profile = CandidateProfile::new(request.skills);
        if let Some(level) = request.experience_level {
            profile = profile.with_experience_level(level);
        }
        if let Some(industry) = request.industry_preference {
            profile = profile.with_industry_preference(industry);
        }
        profile
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationData {
    pub recommendations: RecommendationSet,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: &'static str,
    pub data: RecommendationData,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Ranks jobs and courses for an analysed candidate. An empty skill list is
/// not an error; it yields no jobs and gap-only course suggestions.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let profile = CandidateProfile::from(request);

    let engine = state.engine.clone();
    let recommendations = tokio::task::spawn_blocking(move || engine.recommend(&profile))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("recommendation task failed: {e}")))?;

    Ok(Json(RecommendationResponse {
        status: "success",
        data: RecommendationData { recommendations },
    }))
}
