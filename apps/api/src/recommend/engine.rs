use std::sync::Arc;

use tracing::{debug, info};

use crate::models::profile::CandidateProfile;
use crate::models::recommendation::RecommendationSet;
use crate::recommend::catalog::Catalog;
use crate::recommend::courses::recommend_courses;
use crate::recommend::industry::match_industry;
use crate::recommend::jobs::recommend_jobs;
use crate::recommend::similarity::{SimilarityRanker, TfIdfRanker};
use crate::recommend::weighting::weighted_text;

/// Hand-tuned constants for the job and course rankings.
#[derive(Debug, Clone)]
pub struct RankingWeights {
    /// Added to a job's similarity when it shares a skill with the matched industry.
    pub industry_bonus: f64,
    /// Relevance lost per step between the candidate's level and a course's level.
    pub level_decay: f64,
    pub relevance_weight: f64,
    pub importance_weight: f64,
    /// Cap on each recommendation list.
    pub max_results: usize,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            industry_bonus: 0.2,
            level_decay: 0.2,
            relevance_weight: 0.7,
            importance_weight: 0.3,
            max_results: 3,
        }
    }
}

/// Entry point: turns a candidate profile into job and course recommendations.
///
/// Holds only immutable state, so one instance can serve concurrent requests
/// behind an `Arc`.
pub struct RecommendationEngine {
    catalog: Catalog,
    ranker: Arc<dyn SimilarityRanker>,
    weights: RankingWeights,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_ranker(catalog, Arc::new(TfIdfRanker), RankingWeights::default())
    }

    pub fn with_ranker(
        catalog: Catalog,
        ranker: Arc<dyn SimilarityRanker>,
        weights: RankingWeights,
    ) -> Self {
        info!(
            "Recommendation engine ready: {} job roles, {} courses, {} industry clusters",
            catalog.job_roles().len(),
            catalog.courses().len(),
            catalog.industry_clusters().len()
        );
        Self {
            catalog,
            ranker,
            weights,
        }
    }

    /// Weights the skills once, resolves the industry (an explicit preference
    /// wins over the computed match), then ranks jobs and courses.
    pub fn recommend(&self, profile: &CandidateProfile) -> RecommendationSet {
        let weighted = weighted_text(&profile.skills, self.catalog.skill_weights());

        let matched_industry = match &profile.industry_preference {
            Some(preference) => Some(preference.clone()),
            None => match_industry(&profile.skills, self.catalog.industry_clusters())
                .map(|cluster| cluster.name.clone()),
        };
        let cluster = matched_industry
            .as_deref()
            .and_then(|name| self.catalog.industry(name));

        let job_recommendations = recommend_jobs(
            self.catalog.job_roles(),
            self.ranker.as_ref(),
            &weighted,
            cluster,
            &self.weights,
        );
        let course_recommendations = recommend_courses(
            self.catalog.courses(),
            self.ranker.as_ref(),
            &weighted,
            profile,
            self.catalog.skill_weights(),
            &self.weights,
        );

        debug!(
            "Recommended {} jobs and {} courses for {} skills (industry={:?})",
            job_recommendations.len(),
            course_recommendations.len(),
            profile.skills.len(),
            matched_industry
        );

        RecommendationSet {
            job_recommendations,
            course_recommendations,
            matched_industry,
        }
    }
}
