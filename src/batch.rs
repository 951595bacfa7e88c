#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Panel, Style},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::ComparisonConfig,
    convert::convert_to,
    document::DocumentSnapshot,
    grade::{
        DocumentGrader, GridGrader, render_failure_report, render_grid_report,
        render_missing_report,
    },
    grid::CellGrid,
    paths::AssignmentPaths,
    roster::{Roster, match_submission},
};

/// Why one student's submission could not be graded.
///
/// These errors stay with the student they belong to: the batch records a
/// zero score plus a diagnostic report and moves on.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The external converter failed to normalize the submission.
    #[error("unable to convert `{path}`: {source}")]
    Conversion {
        /// Path of the submission that failed to convert.
        path:   String,
        /// Underlying converter error.
        #[source]
        source: anyhow::Error,
    },
    /// The submission existed but could not be read or parsed.
    #[error("unable to read `{path}`: {source}")]
    Unreadable {
        /// Path of the unreadable submission.
        path:   String,
        /// Underlying read or parse error.
        #[source]
        source: anyhow::Error,
    },
}

/// One row of the consolidated summary, shown in the console overview and
/// written to `REPORT.csv`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SummaryRow {
    /// Student display name.
    #[tabled(rename = "Student")]
    #[serde(rename = "Student")]
    pub student: String,
    /// Final score percentage, rounded to two decimals.
    #[tabled(rename = "Score (%)")]
    #[serde(rename = "Score (%)")]
    pub score:   f64,
}

/// One graded student: the summary row data plus the report to persist.
struct StudentOutcome {
    /// Student display name.
    student: String,
    /// Final score percentage.
    score:   f64,
    /// Rendered Markdown report.
    report:  String,
}

/// Runs the grid evaluation for every roster entry.
///
/// The reference solution and template must be readable — anything wrong
/// with them aborts the batch before any student is graded. Per-student
/// problems never abort: every roster entry yields exactly one summary row.
pub fn run_grid_evaluation(paths: &AssignmentPaths, roster: &Roster) -> Result<Vec<SummaryRow>> {
    let solution_path = convert_to(&paths.solution_grid()?, "csv")?;
    let template_path = convert_to(&paths.template_grid()?, "csv")?;
    let solution = CellGrid::from_csv_path(&solution_path)?;
    let template = CellGrid::from_csv_path(&template_path)?;
    let candidates = paths.submission_candidates(&["csv", "ods"])?;

    let outcomes: Vec<StudentOutcome> = roster
        .student_names()
        .into_par_iter()
        .map(|student| grade_grid_student(student, &candidates, &solution, &template))
        .collect();

    finalize(paths, outcomes)
}

/// Runs the document evaluation for every roster entry.
pub fn run_document_evaluation(
    paths: &AssignmentPaths,
    roster: &Roster,
    config: &ComparisonConfig,
) -> Result<Vec<SummaryRow>> {
    let reference = DocumentSnapshot::from_json_path(&paths.solution_snapshot()?)?;
    let candidates = paths.submission_candidates(&["json"])?;

    let outcomes: Vec<StudentOutcome> = roster
        .student_names()
        .into_par_iter()
        .map(|student| grade_document_student(student, &candidates, &reference, config))
        .collect();

    finalize(paths, outcomes)
}

/// Grades one student's grid submission, degrading to a zero-score outcome
/// on any per-student failure.
fn grade_grid_student(
    student: &str,
    candidates: &[PathBuf],
    solution: &CellGrid,
    template: &CellGrid,
) -> StudentOutcome {
    let Some(submission_path) = match_submission(student, candidates) else {
        warn!("No submission for {student}");
        return StudentOutcome {
            student: student.to_string(),
            score:   0.0,
            report:  render_missing_report(student),
        };
    };
    info!("Submission for {student}: {}", submission_path.display());

    match read_submission_grid(submission_path) {
        Ok(submission) => {
            let outcome = GridGrader::builder()
                .solution(solution.clone())
                .template(template.clone())
                .submission(submission)
                .build()
                .grade();
            info!("Evaluation for {student}: {:.2}%", outcome.score);
            StudentOutcome {
                student: student.to_string(),
                score:   outcome.score,
                report:  render_grid_report(student, &outcome),
            }
        }
        Err(error) => failed_outcome(student, &error),
    }
}

/// Grades one student's document submission, degrading to a zero-score
/// outcome on any per-student failure.
fn grade_document_student(
    student: &str,
    candidates: &[PathBuf],
    reference: &DocumentSnapshot,
    config: &ComparisonConfig,
) -> StudentOutcome {
    let Some(submission_path) = match_submission(student, candidates) else {
        warn!("No submission for {student}");
        return StudentOutcome {
            student: student.to_string(),
            score:   0.0,
            report:  render_missing_report(student),
        };
    };
    info!("Submission for {student}: {}", submission_path.display());

    let submission = match DocumentSnapshot::from_json_path(submission_path) {
        Ok(submission) => submission,
        Err(source) => {
            let error = SubmissionError::Unreadable {
                path: submission_path.display().to_string(),
                source,
            };
            return failed_outcome(student, &error);
        }
    };

    let report = DocumentGrader::builder()
        .student(student)
        .reference(reference.clone())
        .submission(submission)
        .config(*config)
        .build()
        .grade();
    info!("Evaluation for {student}: {:.2}%", report.final_score);

    StudentOutcome {
        student: student.to_string(),
        score:   report.final_score,
        report:  report.rendered,
    }
}

/// Converts (when needed) and reads one grid submission.
fn read_submission_grid(path: &Path) -> Result<CellGrid, SubmissionError> {
    let csv_path = convert_to(path, "csv").map_err(|source| SubmissionError::Conversion {
        path: path.display().to_string(),
        source,
    })?;
    CellGrid::from_csv_path(&csv_path).map_err(|source| SubmissionError::Unreadable {
        path: csv_path.display().to_string(),
        source,
    })
}

/// Builds the zero-score outcome recorded for a failed submission. The
/// student keeps their row in the summary.
fn failed_outcome(student: &str, error: &SubmissionError) -> StudentOutcome {
    warn!("Grading failed for {student}: {error}");
    StudentOutcome {
        student: student.to_string(),
        score:   0.0,
        report:  render_failure_report(student, &error.to_string()),
    }
}

/// Persists the per-student reports and the consolidated summary, prints
/// the console overview, and returns the summary rows sorted by student.
fn finalize(paths: &AssignmentPaths, mut outcomes: Vec<StudentOutcome>) -> Result<Vec<SummaryRow>> {
    outcomes.sort_by(|a, b| a.student.cmp(&b.student));
    paths.ensure_evaluations_dir()?;

    for outcome in &outcomes {
        let report_path = paths.student_report(&outcome.student);
        std::fs::write(&report_path, &outcome.report)
            .with_context(|| format!("Unable to write report {}", report_path.display()))?;
    }

    let rows: Vec<SummaryRow> = outcomes
        .into_iter()
        .map(|outcome| SummaryRow {
            student: outcome.student,
            score:   outcome.score,
        })
        .collect();

    write_summary(&paths.summary_file(), &rows)?;
    show_overview(&rows);
    info!("Overall evaluation report available at {}", paths.summary_file().display());

    Ok(rows)
}

/// Writes the consolidated summary as CSV, one row per roster entry,
/// sorted by student name.
fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create summary file {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Unable to write summary row for {}", row.student))?;
    }
    writer
        .flush()
        .with_context(|| format!("Unable to flush summary file {}", path.display()))
}

/// Prints the grading overview table to stderr.
fn show_overview(rows: &[SummaryRow]) {
    if rows.is_empty() {
        return;
    }

    let average = rows.iter().map(|row| row.score).sum::<f64>() / rows.len() as f64;
    eprintln!(
        "{}",
        Table::new(rows)
            .with(Panel::header("Evaluation Overview"))
            .with(Panel::footer(format!("Class Average: {average:.2}%")))
            .with(Style::modern())
    );
}
