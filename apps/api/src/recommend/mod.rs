// Recommendation Engine
// Implements: catalog store, skill weighting, industry matching, TF-IDF similarity,
// job ranking, course ranking, and the HTTP handler that fronts them.
// Ranking is synchronous and in-memory; nothing here performs I/O per request.

pub mod catalog;
pub mod courses;
pub mod engine;
pub mod handlers;
pub mod industry;
pub mod jobs;
pub mod similarity;
pub mod weighting;
