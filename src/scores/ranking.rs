use crate::models::{Score, ScoreKey};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Compare two scores by (dx_rating, dx_score, achievements). Missing values sort lowest.
pub fn compare_scores(a: &Score, b: &Score) -> Ordering {
    let rating = |s: &Score| s.dx_rating.unwrap_or(f64::NEG_INFINITY);
    let achievements = |s: &Score| s.achievements.unwrap_or(f64::NEG_INFINITY);

    rating(a)
        .total_cmp(&rating(b))
        .then_with(|| a.dx_score.cmp(&b.dx_score))
        .then_with(|| achievements(a).total_cmp(&achievements(b)))
}

/// Keep the best score per (song, type, level). Keys keep the order in which
/// they were first seen; on an exact tie the earlier score stays.
pub fn distinct(scores: &[Score]) -> Vec<Score> {
    let mut best: Vec<Score> = Vec::new();
    let mut positions: HashMap<ScoreKey, usize> = HashMap::new();

    for score in scores {
        match positions.get(&score.key()) {
            Some(&index) => {
                if compare_scores(score, &best[index]) == Ordering::Greater {
                    best[index] = score.clone();
                }
            }
            None => {
                positions.insert(score.key(), best.len());
                best.push(score.clone());
            }
        }
    }

    best
}

/// Sort best first. The sort is stable so equal scores keep their input order.
pub fn rank(scores: &mut [Score]) {
    scores.sort_by(|a, b| compare_scores(b, a));
}
