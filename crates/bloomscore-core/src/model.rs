//! Core data model types for bloomscore.
//!
//! Generated quiz questions and their per-level aggregates. Everything here
//! is ephemeral: built by the generator, read by scoring and display code,
//! dropped when the caller is done. Nothing is mutated after construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::taxonomy::CognitiveLevel;

/// One generated sample question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Unique within a single generation, e.g. `"apply-3"`.
    pub id: String,
    /// Question text.
    pub text: String,
    /// The cognitive action verb the question exercises.
    pub verb: String,
    /// The taxonomy level this question belongs to.
    pub level: CognitiveLevel,
    /// Whether the student answered correctly. `None` when the quiz was
    /// generated without a student context.
    #[serde(default)]
    pub is_correct: Option<bool>,
    /// Seconds the student spent on the question, if a student context exists.
    #[serde(default)]
    pub time_taken_secs: Option<f64>,
}

/// Correct/total counts for one level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelScore {
    /// Number of questions generated at this level.
    pub total: u32,
    /// Number of those answered correctly. Always `<= total`.
    pub correct: u32,
}

/// The full result of one generation for a (course, student) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizData {
    /// Per-level aggregate counts.
    pub level_scores: BTreeMap<CognitiveLevel, LevelScore>,
    /// Per-level question lists, in generation order.
    pub questions: BTreeMap<CognitiveLevel, Vec<QuizQuestion>>,
}

impl QuizData {
    /// Total question count across all levels.
    pub fn total_questions(&self) -> u32 {
        self.level_scores.values().map(|s| s.total).sum()
    }

    /// Total correct count across all levels.
    pub fn total_correct(&self) -> u32 {
        self.level_scores.values().map(|s| s.correct).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_question_serde_roundtrip() {
        let q = QuizQuestion {
            id: "apply-0".into(),
            text: "Solve the worked example with new inputs".into(),
            verb: "solve".into(),
            level: CognitiveLevel::Apply,
            is_correct: Some(true),
            time_taken_secs: Some(42.5),
        };
        let json = serde_json::to_string(&q).unwrap();
        let back: QuizQuestion = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "apply-0");
        assert_eq!(back.level, CognitiveLevel::Apply);
        assert_eq!(back.is_correct, Some(true));
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let json = r#"{
            "id": "remember-1",
            "text": "List the key terms",
            "verb": "list",
            "level": "remember"
        }"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.is_correct, None);
        assert_eq!(q.time_taken_secs, None);
    }

    #[test]
    fn quiz_data_totals() {
        let mut level_scores = BTreeMap::new();
        level_scores.insert(CognitiveLevel::Remember, LevelScore { total: 5, correct: 4 });
        level_scores.insert(CognitiveLevel::Create, LevelScore { total: 7, correct: 2 });
        let data = QuizData {
            level_scores,
            questions: BTreeMap::new(),
        };
        assert_eq!(data.total_questions(), 12);
        assert_eq!(data.total_correct(), 6);
    }
}
