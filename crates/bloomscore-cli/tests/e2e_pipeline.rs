//! End-to-end pipeline test: batch generation through the CLI, then loading
//! and re-checking the reports through the core crate.

use assert_cmd::Command;
use tempfile::TempDir;

use bloomscore_core::report::AssessmentReport;
use bloomscore_core::scoring::overall_weighted_score;
use bloomscore_core::taxonomy::CognitiveLevel;

fn bloomscore() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("bloomscore").unwrap()
}

#[test]
fn batch_reports_survive_a_load_and_rescore() {
    let dir = TempDir::new().unwrap();
    let roster_path = dir.path().join("roster.toml");
    let output_dir = dir.path().join("reports");
    std::fs::write(
        &roster_path,
        r#"
[roster]
id = "pipeline"
name = "Pipeline Roster"

[[entries]]
course_id = "cse-201"
student_id = "student-a"

[[entries]]
course_id = "cse-201"
student_id = "student-b"
"#,
    )
    .unwrap();

    bloomscore()
        .arg("batch")
        .arg("--roster")
        .arg(&roster_path)
        .arg("--output")
        .arg(&output_dir)
        .arg("--seed")
        .arg("7")
        .assert()
        .success();

    for index in 0..2 {
        let path = output_dir.join(format!("pipeline-{index}.json"));
        let report = AssessmentReport::load_json(&path).unwrap();

        assert_eq!(report.course_id, "cse-201");
        assert!(report.student_id.is_some());

        // Persisted counts still satisfy the generation invariants.
        for level in CognitiveLevel::ALL {
            let score = report.quiz.level_scores[&level];
            let questions = &report.quiz.questions[&level];
            assert_eq!(score.total as usize, questions.len());
            assert_eq!(
                score.correct as usize,
                questions
                    .iter()
                    .filter(|q| q.is_correct == Some(true))
                    .count()
            );
        }

        // The stored breakdown matches a fresh aggregation.
        assert_eq!(
            report.breakdown.overall,
            overall_weighted_score(&report.quiz.level_scores)
        );
    }
}
