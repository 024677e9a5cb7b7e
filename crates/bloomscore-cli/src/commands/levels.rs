//! The `bloomscore levels` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use bloomscore_core::taxonomy::CognitiveLevel;

pub fn execute(lang: String) -> Result<()> {
    anyhow::ensure!(
        matches!(lang.as_str(), "en" | "bn"),
        "unsupported language: {lang} (expected en or bn)"
    );

    let mut table = Table::new();
    table.set_header(vec!["Level", "Weight", "Description", "Verbs"]);

    for level in CognitiveLevel::ALL {
        let meta = level.metadata();
        let (title, description) = match lang.as_str() {
            "bn" => (meta.title_bn, meta.description_bn),
            _ => (meta.title_en, meta.description_en),
        };
        table.add_row(vec![
            Cell::new(title),
            Cell::new(meta.weight),
            Cell::new(description),
            Cell::new(meta.verbs.join(", ")),
        ]);
    }

    println!("{table}");
    Ok(())
}
