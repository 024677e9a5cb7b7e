//! The `bloomscore init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create a starter roster
    if std::path::Path::new("roster.toml").exists() {
        println!("roster.toml already exists, skipping.");
    } else {
        std::fs::write("roster.toml", SAMPLE_ROSTER)?;
        println!("Created roster.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit roster.toml with your course and student ids");
    println!("  2. Run: bloomscore validate --roster roster.toml");
    println!("  3. Run: bloomscore batch --roster roster.toml");

    Ok(())
}

const SAMPLE_ROSTER: &str = r#"# bloomscore roster

[roster]
id = "example"
name = "Example Roster"
description = "A starter roster to get going"

[[entries]]
course_id = "cse-101"
student_id = "student-1"

[[entries]]
course_id = "cse-101"
student_id = "student-2"

# Course-level sample without answer data
[[entries]]
course_id = "cse-101"
"#;
