//! The `bloomscore batch` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::{Cell, Table};

use bloomscore_core::roster::{self, Roster};

pub fn execute(roster_path: PathBuf, output: PathBuf, seed: Option<u64>) -> Result<()> {
    let rosters = if roster_path.is_dir() {
        roster::load_roster_directory(&roster_path)?
    } else {
        vec![roster::parse_roster(&roster_path)?]
    };

    anyhow::ensure!(!rosters.is_empty(), "no roster files found");

    std::fs::create_dir_all(&output)?;

    let mut table = Table::new();
    table.set_header(vec!["Entry", "Questions", "Overall"]);
    let mut generated = 0usize;

    for roster in &rosters {
        for warning in roster::validate_roster(roster) {
            tracing::warn!("{}: {}", roster.id, warning.message);
        }
        generated += run_roster(roster, &output, seed, &mut table)?;
    }

    println!("{table}");
    println!(
        "{generated} report(s) written to {}",
        output.display()
    );

    Ok(())
}

fn run_roster(
    roster: &Roster,
    output: &Path,
    seed: Option<u64>,
    table: &mut Table,
) -> Result<usize> {
    let mut generated = 0usize;

    for (index, entry) in roster.entries.iter().enumerate() {
        let report =
            super::generate_report(&entry.course_id, entry.student_id.as_deref(), seed)?;

        let file_name = format!("{}-{index}.json", roster.id);
        report.save_json(&output.join(file_name))?;
        generated += 1;

        table.add_row(vec![
            Cell::new(entry.display_label()),
            Cell::new(report.quiz.total_questions()),
            Cell::new(format!("{}%", report.breakdown.overall)),
        ]);
    }

    Ok(generated)
}
