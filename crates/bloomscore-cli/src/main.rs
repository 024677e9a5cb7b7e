//! bloomscore CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bloomscore", version, about = "Bloom's Taxonomy quiz analytics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sample assessment report for one course/student pair
    Generate {
        /// Course identifier
        #[arg(long)]
        course_id: String,

        /// Student identifier (omit for a course-level sample without answers)
        #[arg(long)]
        student_id: Option<String>,

        /// RNG seed for fully reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: table, json, markdown
        #[arg(long, default_value = "table")]
        format: String,

        /// Also save the report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate reports for every entry in a roster file
    Batch {
        /// Path to a .toml roster file or directory
        #[arg(long)]
        roster: PathBuf,

        /// Output directory for the JSON reports
        #[arg(long, default_value = "./bloomscore-reports")]
        output: PathBuf,

        /// RNG seed for fully reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate roster TOML files
    Validate {
        /// Path to a roster file or directory
        #[arg(long)]
        roster: PathBuf,
    },

    /// Print the six-level taxonomy catalog
    Levels {
        /// Display language: en, bn
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Create a starter roster file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bloomscore=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            course_id,
            student_id,
            seed,
            format,
            output,
        } => commands::generate::execute(course_id, student_id, seed, format, output),
        Commands::Batch {
            roster,
            output,
            seed,
        } => commands::batch::execute(roster, output, seed),
        Commands::Validate { roster } => commands::validate::execute(roster),
        Commands::Levels { lang } => commands::levels::execute(lang),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
