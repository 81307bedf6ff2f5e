//! Catalog Store: skill weights, industry clusters, job roles and courses.
//!
//! Built once at startup and shared read-only for the life of the process.
//! The default catalog is embedded from `data/catalog.json`; `CATALOG_PATH`
//! points the service at another file with the same shape.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::errors::CatalogError;
use crate::models::catalog::{Course, IndustryCluster, JobRole};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Weight applied to skills missing from the table.
pub const DEFAULT_SKILL_WEIGHT: f64 = 1.0;

/// Upper bound on a catalog weight. Each unit of weight adds ten tokens to
/// every request's weighted text.
pub const MAX_SKILL_WEIGHT: f64 = 100.0;

/// Market-demand weight per skill. Lookups are exact string matches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SkillWeights(HashMap<String, f64>);

impl SkillWeights {
    pub fn get(&self, skill: &str) -> f64 {
        self.0.get(skill).copied().unwrap_or(DEFAULT_SKILL_WEIGHT)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for SkillWeights {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(s, w)| (s.into(), w)).collect())
    }
}

/// Raw shape of a catalog file, before validation.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    skill_weights: SkillWeights,
    #[serde(default)]
    industry_clusters: Vec<IndustryCluster>,
    job_roles: Vec<JobRole>,
    courses: Vec<Course>,
}

/// Validated, immutable reference data. Clusters, roles and courses keep
/// their declared order, which is what every tie-break falls back to.
#[derive(Debug, Clone)]
pub struct Catalog {
    skill_weights: SkillWeights,
    industry_clusters: Vec<IndustryCluster>,
    job_roles: Vec<JobRole>,
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(
        skill_weights: SkillWeights,
        industry_clusters: Vec<IndustryCluster>,
        job_roles: Vec<JobRole>,
        courses: Vec<Course>,
    ) -> Result<Self, CatalogError> {
        if job_roles.is_empty() {
            return Err(CatalogError::EmptyJobRoles);
        }
        if courses.is_empty() {
            return Err(CatalogError::EmptyCourses);
        }

        if let Some((skill, weight)) = skill_weights
            .0
            .iter()
            .find(|(_, w)| !w.is_finite() || **w <= 0.0 || **w > MAX_SKILL_WEIGHT)
        {
            return Err(CatalogError::InvalidWeight {
                skill: skill.clone(),
                weight: *weight,
                max: MAX_SKILL_WEIGHT,
            });
        }

        let mut names = HashSet::new();
        for cluster in &industry_clusters {
            if cluster.skills.is_empty() {
                return Err(CatalogError::EmptyCluster(cluster.name.clone()));
            }
            if !names.insert(cluster.name.as_str()) {
                return Err(CatalogError::DuplicateCluster(cluster.name.clone()));
            }
            let mut skills = HashSet::new();
            if let Some(skill) = cluster.skills.iter().find(|s| !skills.insert(s.as_str())) {
                return Err(CatalogError::DuplicateClusterSkill {
                    cluster: cluster.name.clone(),
                    skill: skill.clone(),
                });
            }
        }

        Ok(Self {
            skill_weights,
            industry_clusters,
            job_roles,
            courses,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(
            file.skill_weights,
            file.industry_clusters,
            file.job_roles,
            file.courses,
        )
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn skill_weights(&self) -> &SkillWeights {
        &self.skill_weights
    }

    pub fn industry_clusters(&self) -> &[IndustryCluster] {
        &self.industry_clusters
    }

    pub fn industry(&self, name: &str) -> Option<&IndustryCluster> {
        self.industry_clusters.iter().find(|c| c.name == name)
    }

    pub fn job_roles(&self) -> &[JobRole] {
        &self.job_roles
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}
