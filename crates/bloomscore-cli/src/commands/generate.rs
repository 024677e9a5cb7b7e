//! The `bloomscore generate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use bloomscore_core::report::AssessmentReport;
use bloomscore_core::taxonomy::CognitiveLevel;

pub fn execute(
    course_id: String,
    student_id: Option<String>,
    seed: Option<u64>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let report = super::generate_report(&course_id, student_id.as_deref(), seed)?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        _ => {
            // table format
            print_summary(&report);
        }
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved: {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &AssessmentReport) {
    let mut table = Table::new();
    table.set_header(vec!["Level", "Weight", "Questions", "Correct", "Score"]);

    for level in CognitiveLevel::ALL {
        let score = report
            .quiz
            .level_scores
            .get(&level)
            .copied()
            .unwrap_or_default();
        let pct = report.breakdown.per_level.get(&level).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(level.metadata().title_en),
            Cell::new(level.weight()),
            Cell::new(score.total),
            Cell::new(score.correct),
            Cell::new(format!("{pct}%")),
        ]);
    }

    println!("{table}");
    println!(
        "Overall weighted score: {}% ({} questions)",
        report.breakdown.overall,
        report.quiz.total_questions()
    );
}
