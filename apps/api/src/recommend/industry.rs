use std::collections::HashSet;

use crate::models::catalog::IndustryCluster;

/// Picks the cluster whose representative skills the candidate covers best.
///
/// Score is `|skills ∩ cluster| / |cluster|`. The first cluster in declared
/// order wins a tie. Returns `None` when nothing overlaps.
pub fn match_industry<'a>(
    skills: &[String],
    clusters: &'a [IndustryCluster],
) -> Option<&'a IndustryCluster> {
    let mut best: Option<(&IndustryCluster, f64)> = None;

    for cluster in clusters {
        let score = coverage(skills, cluster);
        if score <= 0.0 {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((cluster, score)),
        }
    }

    best.map(|(cluster, _)| cluster)
}

/// Fraction of the cluster's distinct skills the candidate has.
pub fn coverage(skills: &[String], cluster: &IndustryCluster) -> f64 {
    let distinct: HashSet<&str> = cluster.skills.iter().map(String::as_str).collect();
    if distinct.is_empty() {
        return 0.0;
    }
    let common = distinct
        .iter()
        .filter(|s| skills.iter().any(|owned| owned == *s))
        .count();
    common as f64 / distinct.len() as f64
}
