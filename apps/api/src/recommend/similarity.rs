//! Similarity Ranker: scores every corpus document against a query.
//!
//! Default: `TfIdfRanker`, which fits a fresh TF-IDF space on `corpus ∪ {query}`
//! per call. Nothing is fitted ahead of time and nothing is kept between calls.
//!
//! The engine holds an `Arc<dyn SimilarityRanker>` so another backend can be
//! swapped in without touching the job or course recommenders.

use std::collections::BTreeMap;

/// Sparse term → weight vector. `BTreeMap` keeps summation order fixed.
type TermVector = BTreeMap<String, f64>;

/// Scores corpus documents against a query.
pub trait SimilarityRanker: Send + Sync {
    /// One score in `[0, 1]` per corpus document, in corpus order.
    fn rank(&self, corpus: &[String], query: &str) -> Vec<f64>;
}

/// TF-IDF with smoothed IDF and L2-normalised vectors, compared by cosine.
///
/// Algorithm:
/// 1. Tokenize every document: lowercase, split on non-word characters, drop
///    tokens shorter than two characters
/// 2. idf(t) = ln((1 + n) / (1 + df(t))) + 1, over the corpus plus the query
/// 3. Each document vector = raw term count × idf, scaled to unit length
/// 4. Score = dot(query, document), clamped to `[0, 1]`; NaN becomes 0
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfRanker;

impl SimilarityRanker for TfIdfRanker {
    fn rank(&self, corpus: &[String], query: &str) -> Vec<f64> {
        let mut documents: Vec<BTreeMap<String, f64>> =
            corpus.iter().map(|doc| term_counts(doc)).collect();
        documents.push(term_counts(query));

        let idf = inverse_document_frequency(&documents);
        let mut vectors: Vec<TermVector> = documents
            .into_iter()
            .map(|counts| weigh(counts, &idf))
            .collect();

        let query_vector = vectors.pop().unwrap_or_default();
        vectors
            .iter()
            .map(|doc| normalize_score(cosine(&query_vector, doc)))
            .collect()
    }
}

/// Splits on anything that is not alphanumeric or `_`, lowercased. Single
/// characters are dropped, so "R" and "C" never become terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

fn term_counts(text: &str) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn inverse_document_frequency(documents: &[BTreeMap<String, f64>]) -> BTreeMap<String, f64> {
    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in documents {
        for term in doc.keys() {
            *df.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = documents.len() as f64;
    df.into_iter()
        .map(|(term, count)| {
            let idf = ((1.0 + n) / (1.0 + count as f64)).ln() + 1.0;
            (term.to_string(), idf)
        })
        .collect()
}

fn weigh(counts: BTreeMap<String, f64>, idf: &BTreeMap<String, f64>) -> TermVector {
    let mut vector: TermVector = counts
        .into_iter()
        .map(|(term, tf)| {
            let weight = tf * idf.get(&term).copied().unwrap_or(1.0);
            (term, weight)
        })
        .collect();

    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
    vector
}

/// Dot product of two unit vectors. A zero vector scores 0.
fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum()
}

fn normalize_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(
            tokenize("CI/CD Machine-Learning node_js"),
            vec!["ci", "cd", "machine", "learning", "node_js"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        assert_eq!(tokenize("R C Go"), vec!["go"]);
    }

    #[test]
    fn test_identical_document_scores_one() {
        let scores = TfIdfRanker.rank(&corpus(&["python sql", "docker aws"]), "python sql");
        assert!((scores[0] - 1.0).abs() < 1e-9, "Score was {}", scores[0]);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_score_uses_smoothed_idf_and_unit_vectors() {
        // n = 3 documents; python appears in 2, sql in 1
        let scores = TfIdfRanker.rank(&corpus(&["python sql", "docker"]), "python");
        let idf_python = (4.0_f64 / 3.0).ln() + 1.0;
        let idf_sql = (4.0_f64 / 2.0).ln() + 1.0;
        let expected = idf_python / (idf_python.powi(2) + idf_sql.powi(2)).sqrt();

        assert!((scores[0] - expected).abs() < 1e-9, "Score was {}", scores[0]);
        assert!((scores[0] - 0.605349).abs() < 1e-5, "Score was {}", scores[0]);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_scores_follow_corpus_order() {
        let scores = TfIdfRanker.rank(
            &corpus(&["docker aws", "python java", "python sql git"]),
            "python sql",
        );
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 0.0);
        assert!(scores[2] > scores[1]);
    }

    #[test]
    fn test_empty_query_scores_zero_everywhere() {
        let scores = TfIdfRanker.rank(&corpus(&["python sql", "docker"]), "");
        assert_eq!(scores, vec![0.0, 0.0]);
        assert!(scores.iter().all(|s| !s.is_nan()));
    }

    #[test]
    fn test_document_without_terms_scores_zero() {
        let scores = TfIdfRanker.rank(&corpus(&["R", "python"]), "python R");
        assert_eq!(scores[0], 0.0);
        assert!(scores[1] > 0.0);
    }

    #[test]
    fn test_empty_corpus_gives_no_scores() {
        assert!(TfIdfRanker.rank(&[], "python").is_empty());
    }

    #[test]
    fn test_repetition_shifts_weight() {
        let docs = corpus(&["python", "java"]);
        let python_heavy = TfIdfRanker.rank(&docs, "python python python java");
        assert!(python_heavy[0] > python_heavy[1]);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let docs = corpus(&["python java sql git agile", "docker kubernetes aws linux"]);
        for score in TfIdfRanker.rank(&docs, "python python java aws") {
            assert!((0.0..=1.0).contains(&score), "Score was {score}");
        }
    }

    #[test]
    fn test_normalize_score_handles_nan() {
        assert_eq!(normalize_score(f64::NAN), 0.0);
        assert_eq!(normalize_score(1.0000001), 1.0);
        assert_eq!(normalize_score(-0.1), 0.0);
    }
}
