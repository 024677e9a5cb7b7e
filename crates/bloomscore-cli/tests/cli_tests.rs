//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bloomscore() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("bloomscore").unwrap()
}

const SAMPLE_ROSTER: &str = r#"
[roster]
id = "test-roster"
name = "Test Roster"

[[entries]]
course_id = "cse-101"
student_id = "student-1"

[[entries]]
course_id = "cse-101"
"#;

#[test]
fn help_output() {
    bloomscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bloom's Taxonomy quiz analytics"));
}

#[test]
fn version_output() {
    bloomscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bloomscore"));
}

#[test]
fn levels_table_lists_all_six() {
    bloomscore()
        .arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remember"))
        .stdout(predicate::str::contains("Understand"))
        .stdout(predicate::str::contains("Apply"))
        .stdout(predicate::str::contains("Analyze"))
        .stdout(predicate::str::contains("Evaluate"))
        .stdout(predicate::str::contains("Create"));
}

#[test]
fn levels_bengali() {
    bloomscore()
        .arg("levels")
        .arg("--lang")
        .arg("bn")
        .assert()
        .success()
        .stdout(predicate::str::contains("মনে রাখা"))
        .stdout(predicate::str::contains("সৃষ্টি"));
}

#[test]
fn levels_rejects_unknown_language() {
    bloomscore()
        .arg("levels")
        .arg("--lang")
        .arg("fr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn generate_table_output() {
    bloomscore()
        .arg("generate")
        .arg("--course-id")
        .arg("cse-101")
        .arg("--student-id")
        .arg("student-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall weighted score"))
        .stdout(predicate::str::contains("Remember"));
}

#[test]
fn generate_rejects_empty_course_id() {
    bloomscore()
        .arg("generate")
        .arg("--course-id")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("course id must not be empty"));
}

#[test]
fn generate_json_counts_are_stable_across_runs() {
    let run = || -> serde_json::Value {
        let output = bloomscore()
            .arg("generate")
            .arg("--course-id")
            .arg("cse-101")
            .arg("--student-id")
            .arg("student-1")
            .arg("--format")
            .arg("json")
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    };

    let first = run();
    let second = run();

    // Seed-derived per-level totals match; correctness flags may not.
    for level in ["remember", "understand", "apply", "analyze", "evaluate", "create"] {
        assert_eq!(
            first["quiz"]["level_scores"][level]["total"],
            second["quiz"]["level_scores"][level]["total"],
            "total for {level} differs between runs"
        );
    }
}

#[test]
fn generate_without_student_has_no_correctness() {
    let output = bloomscore()
        .arg("generate")
        .arg("--course-id")
        .arg("cse-101")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["student_id"].is_null());
    for (_, questions) in report["quiz"]["questions"].as_object().unwrap() {
        for q in questions.as_array().unwrap() {
            assert!(q["is_correct"].is_null());
        }
    }
    for (_, score) in report["quiz"]["level_scores"].as_object().unwrap() {
        assert_eq!(score["correct"], 0);
    }
}

#[test]
fn generate_with_seed_is_fully_reproducible() {
    let run = || -> serde_json::Value {
        let output = bloomscore()
            .arg("generate")
            .arg("--course-id")
            .arg("cse-101")
            .arg("--student-id")
            .arg("student-1")
            .arg("--seed")
            .arg("42")
            .arg("--format")
            .arg("json")
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first["quiz"], second["quiz"]);
    assert_eq!(first["breakdown"], second["breakdown"]);
}

#[test]
fn generate_saves_report_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    bloomscore()
        .arg("generate")
        .arg("--course-id")
        .arg("cse-101")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved"));

    assert!(path.exists());
}

#[test]
fn validate_valid_roster() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.toml");
    std::fs::write(&path, SAMPLE_ROSTER).unwrap();

    bloomscore()
        .arg("validate")
        .arg("--roster")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"))
        .stdout(predicate::str::contains("All rosters valid"));
}

#[test]
fn validate_flags_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.toml");
    std::fs::write(
        &path,
        r#"
[roster]
id = "dupes"
name = "Dupes"

[[entries]]
course_id = "c1"
student_id = "s1"

[[entries]]
course_id = "c1"
student_id = "s1"
"#,
    )
    .unwrap();

    bloomscore()
        .arg("validate")
        .arg("--roster")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate"));
}

#[test]
fn validate_nonexistent_file() {
    bloomscore()
        .arg("validate")
        .arg("--roster")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn batch_writes_one_report_per_entry() {
    let dir = TempDir::new().unwrap();
    let roster_path = dir.path().join("roster.toml");
    let output_dir = dir.path().join("reports");
    std::fs::write(&roster_path, SAMPLE_ROSTER).unwrap();

    bloomscore()
        .arg("batch")
        .arg("--roster")
        .arg(&roster_path)
        .arg("--output")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 report(s) written"));

    assert!(output_dir.join("test-roster-0.json").exists());
    assert!(output_dir.join("test-roster-1.json").exists());
}

#[test]
fn init_creates_roster() {
    let dir = TempDir::new().unwrap();

    bloomscore()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created roster.toml"));

    assert!(dir.path().join("roster.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    bloomscore()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    bloomscore()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
