#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # markone
//!
//! Command-line entry point for the markone autograder. `calc` grades
//! spreadsheet-style grid submissions; `writer` grades structured document
//! submissions by category. Both walk the class roster, write one Markdown
//! report per student, and consolidate scores into `REPORT.csv`.

use std::path::PathBuf;

use anyhow::Result;
use bpaf::*;
use markone::{batch, config::ComparisonConfig, paths::AssignmentPaths, roster::Roster};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade grid (spreadsheet) submissions.
    Calc {
        /// Course root directory.
        root:       PathBuf,
        /// Assignment identifier.
        assignment: String,
        /// Roster file path.
        roster:     PathBuf,
    },
    /// Grade structured document submissions.
    Writer {
        /// Optional comparison configuration file.
        config:     Option<PathBuf>,
        /// Course root directory.
        root:       PathBuf,
        /// Assignment identifier.
        assignment: String,
        /// Roster file path.
        roster:     PathBuf,
    },
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the assignment identifier
    fn assignment() -> impl Parser<String> {
        positional("ASSIGNMENT").help("Assignment identifier, e.g. 2025/recipes")
    }

    /// parses the roster file path
    fn roster() -> impl Parser<PathBuf> {
        positional("ROSTER").help("Path to the class roster JSON file")
    }

    /// parses the course root directory option
    fn root() -> impl Parser<PathBuf> {
        long("root")
            .help("Course root holding assignments/, solutions/ and evaluations/")
            .argument::<PathBuf>("DIR")
            .fallback(PathBuf::from("."))
    }

    /// parses the optional comparison configuration path
    fn config() -> impl Parser<Option<PathBuf>> {
        long("config")
            .help("Path to a comparison configuration JSON file")
            .argument::<PathBuf>("PATH")
            .optional()
    }

    let calc = construct!(Cmd::Calc {
        root(),
        assignment(),
        roster()
    })
    .to_options()
    .command("calc")
    .help("Grade spreadsheet submissions cell by cell");

    let writer = construct!(Cmd::Writer {
        config(),
        root(),
        assignment(),
        roster()
    })
    .to_options()
    .command("writer")
    .help("Grade document submissions by category");

    let cmd = construct!([calc, writer]);

    cmd.to_options()
        .descr("A batch autograder for structured-document assignments")
        .run()
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Calc {
            root,
            assignment,
            roster,
        } => {
            let roster = Roster::from_json_path(&roster)?;
            let paths = AssignmentPaths::new(root, assignment);
            batch::run_grid_evaluation(&paths, &roster)?;
        }
        Cmd::Writer {
            config,
            root,
            assignment,
            roster,
        } => {
            let roster = Roster::from_json_path(&roster)?;
            let config = match config {
                Some(path) => ComparisonConfig::from_json_path(&path)?,
                None => ComparisonConfig::default(),
            };
            let paths = AssignmentPaths::new(root, assignment);
            batch::run_document_evaluation(&paths, &roster, &config)?;
        }
    }

    Ok(())
}
