use serde::{Deserialize, Serialize};

/// A job role from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRole {
    pub title: String,
    pub required_skills: Vec<String>,
    pub description: String,
}

/// A course from the catalog. `level` is kept as written in the catalog
/// ("Beginner", "Intermediate", "Advanced").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub skills: Vec<String>,
    pub level: String,
}

/// An industry and the skills that represent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryCluster {
    pub name: String,
    pub skills: Vec<String>,
}

impl IndustryCluster {
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
