#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use typed_builder::TypedBuilder;

use super::{
    aggregate::{CategoryScores, aggregate},
    category::{compare_images, compare_margins, compare_paragraphs, compare_tables},
    report::render_document_report,
    results::{EvaluationReport, round2},
};
use crate::{config::ComparisonConfig, document::DocumentSnapshot};

/// Grades one document submission against a reference solution.
///
/// Runs the four category comparators, combines their scores with the
/// configured weights, and renders the Markdown report. Pure: the grader
/// holds only read-only snapshots and a copy of the configuration.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
#[builder(field_defaults(setter(into)))]
pub struct DocumentGrader {
    /// Display name of the student being graded, used in the report heading.
    student:    String,
    /// The reference solution document.
    reference:  DocumentSnapshot,
    /// The student's document.
    submission: DocumentSnapshot,
    /// Weights and tolerances for this comparison.
    #[builder(default)]
    config:     ComparisonConfig,
}

impl DocumentGrader {
    /// Runs the comparison and produces the full evaluation report.
    pub fn grade(&self) -> EvaluationReport {
        let tolerances = &self.config.tolerances;

        let paragraphs = compare_paragraphs(
            &self.reference.paragraphs,
            &self.submission.paragraphs,
            tolerances,
        );
        let images = compare_images(&self.reference.images, &self.submission.images, tolerances);
        let tables = compare_tables(&self.reference.tables, &self.submission.tables, tolerances);
        let margins = compare_margins(
            self.reference.margins.as_ref(),
            self.submission.margins.as_ref(),
            tolerances,
        );

        let scores = CategoryScores {
            paragraphs: paragraphs.score,
            images:     images.score,
            tables:     tables.score,
            margins:    margins.score,
        };
        let final_score = round2(aggregate(&scores, &self.config.weights));

        let rendered = render_document_report(
            &self.student,
            &paragraphs,
            &images,
            &tables,
            &margins,
            final_score,
        );

        EvaluationReport {
            paragraphs,
            images,
            tables,
            margins,
            final_score,
            rendered,
        }
    }
}
