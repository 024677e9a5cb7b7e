//! Assessment report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::QuizData;
use crate::scoring::ScoreBreakdown;
use crate::taxonomy::CognitiveLevel;

/// A complete assessment report for one (course, student) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The course this report covers.
    pub course_id: String,
    /// The student, when the report was generated in a student context.
    #[serde(default)]
    pub student_id: Option<String>,
    /// The generated quiz data.
    pub quiz: QuizData,
    /// Per-level percentages and the overall weighted score.
    pub breakdown: ScoreBreakdown,
}

impl AssessmentReport {
    /// Build a report from freshly generated quiz data.
    pub fn new(course_id: &str, student_id: Option<&str>, quiz: QuizData) -> Self {
        let breakdown = ScoreBreakdown::from_level_scores(&quiz.level_scores);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            course_id: course_id.to_string(),
            student_id: student_id.map(str::to_string),
            quiz,
            breakdown,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as a markdown table, one row per level.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}", self.course_id));
        if let Some(student) = &self.student_id {
            md.push_str(&format!(" — {student}"));
        }
        md.push_str("\n\n");

        md.push_str("| Level | Weight | Questions | Correct | Score |\n");
        md.push_str("|-------|--------|-----------|---------|-------|\n");
        for level in CognitiveLevel::ALL {
            let score = self
                .quiz
                .level_scores
                .get(&level)
                .copied()
                .unwrap_or_default();
            let pct = self.breakdown.per_level.get(&level).copied().unwrap_or(0);
            md.push_str(&format!(
                "| {} | {} | {} | {} | {}% |\n",
                level.metadata().title_en,
                level.weight(),
                score.total,
                score.correct,
                pct,
            ));
        }

        md.push_str(&format!(
            "\n**Overall weighted score:** {}%\n",
            self.breakdown.overall
        ));

        md
    }
}
