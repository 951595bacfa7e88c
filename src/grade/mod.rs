#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Weighted combination of category scores.
pub mod aggregate;
/// Per-category comparators and their shared pairing contract.
pub mod category;
/// The document grader tying comparators, weights, and rendering together.
pub mod document;
/// Cell-by-cell grid grading against a gradable mask.
pub mod grid;
/// Deterministic Markdown report rendering.
pub mod report;
/// Shared score and result types.
pub mod results;

pub use aggregate::{CategoryScores, aggregate};
pub use category::{
    Category, GenericValue, compare_generic, compare_images, compare_margins, compare_paragraphs,
    compare_tables, text_similarity,
};
pub use document::DocumentGrader;
pub use grid::{GridGrader, GridOutcome};
pub use report::{
    render_document_report, render_failure_report, render_grid_report, render_missing_report,
};
pub use results::{CategoryResult, EvaluationReport, round2};
