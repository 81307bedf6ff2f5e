use std::collections::HashSet;

pub const DEFAULT_EXPERIENCE_LEVEL: &str = "intermediate";

/// Experience tiers used to measure the distance between a candidate and a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Case-insensitive. Anything unrecognised is treated as intermediate.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "beginner" => ExperienceLevel::Beginner,
            "advanced" => ExperienceLevel::Advanced,
            _ => ExperienceLevel::Intermediate,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            ExperienceLevel::Beginner => 0,
            ExperienceLevel::Intermediate => 1,
            ExperienceLevel::Advanced => 2,
        }
    }

    pub fn distance(self, other: ExperienceLevel) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }
}

/// Per-request view of a candidate. Skills are unique and in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    /// Raw label as supplied by the caller, e.g. "beginner".
    pub experience_level: String,
    pub industry_preference: Option<String>,
}

impl CandidateProfile {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();

        Self {
            skills,
            experience_level: DEFAULT_EXPERIENCE_LEVEL.to_string(),
            industry_preference: None,
        }
    }

    pub fn with_experience_level(mut self, level: impl Into<String>) -> Self {
        self.experience_level = level.into();
        self
    }

    /// An empty string counts as no preference; anything else is kept verbatim.
    pub fn with_industry_preference(mut self, industry: impl Into<String>) -> Self {
        let industry = industry.into();
        self.industry_preference = if industry.is_empty() {
            None
        } else {
            Some(industry)
        };
        self
    }

    pub fn level(&self) -> ExperienceLevel {
        ExperienceLevel::from_label(&self.experience_level)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
