use crate::models::catalog::{IndustryCluster, JobRole};
use crate::models::recommendation::JobRecommendation;
use crate::recommend::engine::RankingWeights;
use crate::recommend::similarity::SimilarityRanker;

/// Ranks job roles against the candidate's weighted skill text.
///
/// Algorithm:
/// 1. Score each role's joined `required_skills` with the similarity ranker
/// 2. Drop every role scoring exactly 0
/// 3. Add `industry_bonus` when the role shares a skill with the matched
///    industry, capped at 1.0
/// 4. Stable sort descending, keep the top `max_results`
pub fn recommend_jobs(
    roles: &[JobRole],
    ranker: &dyn SimilarityRanker,
    weighted_skills: &str,
    industry: Option<&IndustryCluster>,
    weights: &RankingWeights,
) -> Vec<JobRecommendation> {
    let corpus: Vec<String> = roles.iter().map(|r| r.required_skills.join(" ")).collect();
    let similarities = ranker.rank(&corpus, weighted_skills);

    let mut recommendations: Vec<JobRecommendation> = roles
        .iter()
        .zip(similarities)
        .filter(|(_, similarity)| *similarity > 0.0)
        .map(|(role, similarity)| {
            let aligned = industry
                .filter(|_| weights.industry_bonus > 0.0)
                .filter(|cluster| role.required_skills.iter().any(|s| cluster.contains(s)));
            let bonus = if aligned.is_some() {
                weights.industry_bonus
            } else {
                0.0
            };

            JobRecommendation {
                role: role.clone(),
                match_score: (similarity + bonus).clamp(0.0, 1.0),
                industry_alignment: aligned.map(|cluster| cluster.name.clone()),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    recommendations.truncate(weights.max_results);
    recommendations
}
