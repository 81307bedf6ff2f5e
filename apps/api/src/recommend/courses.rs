use crate::models::catalog::Course;
use crate::models::profile::{CandidateProfile, ExperienceLevel};
use crate::models::recommendation::CourseRecommendation;
use crate::recommend::catalog::SkillWeights;
use crate::recommend::engine::RankingWeights;
use crate::recommend::similarity::SimilarityRanker;

/// Ranks courses by how relevant they are and how valuable the skills they
/// would add are.
///
/// Algorithm:
/// 1. Score each course's joined `skills` with the similarity ranker
/// 2. Decay the score by `level_decay` per step of experience-level distance
/// 3. Skip courses that teach nothing the candidate lacks
/// 4. skill_importance = mean weight of the missing skills
/// 5. Sort key = relevance_weight × relevance + importance_weight × importance,
///    stable sort descending, keep the top `max_results`
pub fn recommend_courses(
    courses: &[Course],
    ranker: &dyn SimilarityRanker,
    weighted_skills: &str,
    profile: &CandidateProfile,
    skill_weights: &SkillWeights,
    weights: &RankingWeights,
) -> Vec<CourseRecommendation> {
    let corpus: Vec<String> = courses.iter().map(|c| c.skills.join(" ")).collect();
    let similarities = ranker.rank(&corpus, weighted_skills);
    let user_level = profile.level();

    let mut ranked: Vec<(f64, CourseRecommendation)> = courses
        .iter()
        .zip(similarities)
        .filter_map(|(course, similarity)| {
            let missing_skills: Vec<String> = course
                .skills
                .iter()
                .filter(|s| !profile.has_skill(s))
                .cloned()
                .collect();
            if missing_skills.is_empty() {
                return None;
            }

            let distance = ExperienceLevel::from_label(&course.level).distance(user_level);
            let relevance_score = similarity * (1.0 - weights.level_decay * f64::from(distance));
            let skill_importance = missing_skills
                .iter()
                .map(|s| skill_weights.get(s))
                .sum::<f64>()
                / missing_skills.len() as f64;

            let key = weights.relevance_weight * relevance_score
                + weights.importance_weight * skill_importance;

            Some((
                key,
                CourseRecommendation {
                    course: course.clone(),
                    missing_skills,
                    relevance_score,
                    skill_importance,
                    experience_match: levels_match(&course.level, &profile.experience_level),
                },
            ))
        })
        .collect();

    ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    ranked
        .into_iter()
        .take(weights.max_results)
        .map(|(_, rec)| rec)
        .collect()
}

/// Compares the raw level labels, ignoring ASCII case, so "Beginner" in the
/// catalog matches a caller's "beginner".
fn levels_match(course_level: &str, user_level: &str) -> bool {
    course_level.trim().eq_ignore_ascii_case(user_level.trim())
}
