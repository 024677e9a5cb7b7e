//! Weighted score aggregation.
//!
//! Converts per-level correct/total counts into percentages and one overall
//! weighted score. Higher levels weigh more: a percentage point at Create
//! (weight 6) moves the composite six times as far as one at Remember
//! (weight 1). Levels with no questions are excluded from the weighted
//! denominator rather than counted as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::LevelScore;
use crate::taxonomy::CognitiveLevel;

/// Percentage of correct answers for one level, rounded to the nearest
/// integer. A level with no questions scores 0 rather than raising a
/// division error; these are display values, not safety-critical results.
pub fn percentage(score: &LevelScore) -> u32 {
    if score.total == 0 {
        return 0;
    }
    (100.0 * f64::from(score.correct) / f64::from(score.total)).round() as u32
}

/// Overall weighted score across all levels, in `0..=100`.
///
/// Numerator: sum of `percentage(level) * weight(level)` over levels with at
/// least one question. Denominator: sum of those same weights. Returns 0
/// when no level has any questions.
pub fn overall_weighted_score(level_scores: &BTreeMap<CognitiveLevel, LevelScore>) -> u32 {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0u32;

    for (level, score) in level_scores {
        if score.total == 0 {
            continue;
        }
        weighted_sum += f64::from(percentage(score)) * f64::from(level.weight());
        weight_total += level.weight();
    }

    if weight_total == 0 {
        return 0;
    }
    (weighted_sum / f64::from(weight_total)).round() as u32
}

/// Per-level percentages plus the overall weighted score, as one structure
/// for display consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Rounded percentage per level.
    pub per_level: BTreeMap<CognitiveLevel, u32>,
    /// Overall weighted score, `0..=100`.
    pub overall: u32,
}

impl ScoreBreakdown {
    /// Compute the breakdown from raw per-level counts.
    pub fn from_level_scores(level_scores: &BTreeMap<CognitiveLevel, LevelScore>) -> Self {
        let per_level = level_scores
            .iter()
            .map(|(level, score)| (*level, percentage(score)))
            .collect();
        Self {
            per_level,
            overall: overall_weighted_score(level_scores),
        }
    }
}
