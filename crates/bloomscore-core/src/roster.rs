//! TOML roster parser.
//!
//! Loads batch-generation rosters from TOML files and directories, and
//! validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A batch of (course, student) pairs to generate reports for.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Unique identifier for this roster.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this roster.
    pub description: String,
    /// The entries, in file order.
    pub entries: Vec<RosterEntry>,
}

/// One (course, student) pair.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub course_id: String,
    pub student_id: Option<String>,
    /// Optional display label for summaries.
    pub label: Option<String>,
}

impl RosterEntry {
    /// Display label: the explicit label if set, otherwise
    /// `course` or `course/student`.
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match &self.student_id {
            Some(student) => format!("{}/{}", self.course_id, student),
            None => self.course_id.clone(),
        }
    }
}

/// Intermediate TOML structure for parsing roster files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    roster: TomlRosterHeader,
    #[serde(default)]
    entries: Vec<TomlRosterEntry>,
}

#[derive(Debug, Deserialize)]
struct TomlRosterHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlRosterEntry {
    course_id: String,
    #[serde(default)]
    student_id: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

/// Parse a single TOML file into a `Roster`.
pub fn parse_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse a TOML string into a `Roster` (useful for testing).
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<Roster> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let entries = parsed
        .entries
        .into_iter()
        .map(|e| RosterEntry {
            course_id: e.course_id,
            student_id: e.student_id,
            label: e.label,
        })
        .collect();

    Ok(Roster {
        id: parsed.roster.id,
        name: parsed.roster.name,
        description: parsed.roster.description,
        entries,
    })
}

/// Recursively load all `.toml` roster files from a directory.
pub fn load_roster_directory(dir: &Path) -> Result<Vec<Roster>> {
    let mut rosters = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            rosters.extend(load_roster_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_roster(&path) {
                Ok(roster) => rosters.push(roster),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(rosters)
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Label of the offending entry (if applicable).
    pub entry: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a roster for common issues.
pub fn validate_roster(roster: &Roster) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if roster.entries.is_empty() {
        warnings.push(ValidationWarning {
            entry: None,
            message: "roster has no entries".into(),
        });
    }

    // Empty course ids would be rejected at generation time; flag them here.
    for entry in &roster.entries {
        if entry.course_id.trim().is_empty() {
            warnings.push(ValidationWarning {
                entry: Some(entry.display_label()),
                message: "course_id is empty".into(),
            });
        }
    }

    // Duplicate (course, student) pairs produce identical reports.
    let mut seen = std::collections::HashSet::new();
    for entry in &roster.entries {
        let key = (entry.course_id.clone(), entry.student_id.clone());
        if !seen.insert(key) {
            warnings.push(ValidationWarning {
                entry: Some(entry.display_label()),
                message: format!("duplicate entry: {}", entry.display_label()),
            });
        }
    }

    warnings
}
