#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use typed_builder::TypedBuilder;

use super::results::round2;
use crate::grid::CellGrid;

/// The outcome of grading one grid submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOutcome {
    /// Percentage of gradable cells answered correctly, rounded to two
    /// decimals. Zero when no cell was gradable.
    pub score:         f64,
    /// Number of gradable cells inside the compared rectangle.
    pub total_graded:  usize,
    /// Number of gradable cells matching the solution.
    pub correct:       usize,
    /// One formatted entry per wrong gradable cell, in row-major order.
    pub discrepancies: Vec<String>,
}

/// Grades a grid submission cell by cell against a reference pair.
///
/// `solution` and `template` are the authoritative pair: a cell is gradable
/// only where they differ, which keeps cells the assignment left
/// unconstrained out of the score. The submission may have any shape; only
/// the rectangle it shares with the solution is considered.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct GridGrader {
    /// Reference grid holding the expected values.
    solution:   CellGrid,
    /// Ungraded template the assignment started from.
    template:   CellGrid,
    /// The student's grid.
    submission: CellGrid,
}

impl GridGrader {
    /// Runs the comparison. Pure: same inputs, same outcome.
    ///
    /// A run with zero gradable cells scores 0, not 100 — with nothing to
    /// confirm, no credit is given. This is distinct from the category
    /// comparators, where an empty/empty pair is vacuously perfect.
    pub fn grade(&self) -> GridOutcome {
        let rows = self.solution.row_count().min(self.submission.row_count());
        let cols = self
            .solution
            .column_count()
            .min(self.submission.column_count());

        let mut total_graded = 0;
        let mut correct = 0;
        let mut discrepancies = Vec::new();

        for row in 0..rows {
            for col in 0..cols {
                let expected = self.solution.cell(row, col);
                if expected == self.template.cell(row, col) {
                    continue;
                }

                total_graded += 1;
                let got = self.submission.cell(row, col);
                if expected == got {
                    correct += 1;
                } else {
                    discrepancies.push(format!(
                        "- **Cell ({}, {}) mismatch:**\n  - **Expected:** `{}`\n  - **Student \
                         Submission:** `{}`",
                        row + 1,
                        col + 1,
                        expected,
                        got
                    ));
                }
            }
        }

        let score = if total_graded > 0 {
            round2(correct as f64 / total_graded as f64 * 100.0)
        } else {
            0.0
        };

        GridOutcome {
            score,
            total_graded,
            correct,
            discrepancies,
        }
    }
}
