use serde::{Deserialize, Serialize};

use crate::models::catalog::{Course, JobRole};

/// A ranked job role. The role's own fields are flattened into the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    #[serde(flatten)]
    pub role: JobRole,
    /// 0.0 – 1.0
    pub match_score: f64,
    /// Set only when the industry bonus was applied.
    pub industry_alignment: Option<String>,
}

/// A ranked course with the skills it would add for this candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    #[serde(flatten)]
    pub course: Course,
    pub missing_skills: Vec<String>,
    pub relevance_score: f64,
    pub skill_importance: f64,
    pub experience_match: bool,
}

/// Everything produced for a single candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub job_recommendations: Vec<JobRecommendation>,
    pub course_recommendations: Vec<CourseRecommendation>,
    pub matched_industry: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_recommendation_flattens_role_fields() {
        let rec = JobRecommendation {
            role: JobRole {
                title: "Software Engineer".to_string(),
                required_skills: vec!["Python".to_string()],
                description: "Builds things".to_string(),
            },
            match_score: 0.75,
            industry_alignment: None,
        };

        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["title"], "Software Engineer");
        assert_eq!(value["required_skills"], json!(["Python"]));
        assert_eq!(value["match_score"], 0.75);
        assert!(value["industry_alignment"].is_null());
        assert!(value.get("role").is_none());
    }

    #[test]
    fn test_empty_set_serializes_null_industry() {
        let set = RecommendationSet {
            job_recommendations: vec![],
            course_recommendations: vec![],
            matched_industry: None,
        };
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(
            value,
            json!({
                "job_recommendations": [],
                "course_recommendations": [],
                "matched_industry": null
            })
        );
    }
}
