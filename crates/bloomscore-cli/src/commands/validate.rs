//! The `bloomscore validate` command.

use std::path::PathBuf;

use anyhow::Result;

use bloomscore_core::roster;

pub fn execute(roster_path: PathBuf) -> Result<()> {
    let rosters = if roster_path.is_dir() {
        roster::load_roster_directory(&roster_path)?
    } else {
        vec![roster::parse_roster(&roster_path)?]
    };

    let mut total_warnings = 0;

    for r in &rosters {
        println!("Roster: {} ({} entries)", r.name, r.entries.len());

        let warnings = roster::validate_roster(r);
        for w in &warnings {
            let prefix = w
                .entry
                .as_ref()
                .map(|e| format!("  [{e}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All rosters valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
