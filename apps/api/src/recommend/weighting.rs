use crate::recommend::catalog::SkillWeights;

/// Expands skills into a bag of tokens for the TF-IDF step. Each skill is
/// repeated `round(weight * 10)` times so heavier skills carry more term
/// frequency.
pub fn weighted_text(skills: &[String], weights: &SkillWeights) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for skill in skills {
        let repeats = (weights.get(skill) * 10.0).round() as usize;
        tokens.extend(std::iter::repeat(skill.as_str()).take(repeats));
    }
    tokens.join(" ")
}
