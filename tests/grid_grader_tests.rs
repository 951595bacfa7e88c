use markone::{grade::GridGrader, grid::CellGrid};

fn grid(rows: &[&[&str]]) -> CellGrid {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>())
        .collect()
}

fn grader(solution: &[&[&str]], template: &[&[&str]], submission: &[&[&str]]) -> GridGrader {
    GridGrader::builder()
        .solution(grid(solution))
        .template(grid(template))
        .submission(grid(submission))
        .build()
}

#[test]
fn exact_match_scores_full_credit() {
    let outcome = grader(&[&["A", "B"]], &[&["A", "X"]], &[&["A", "B"]]).grade();

    assert_eq!(outcome.total_graded, 1);
    assert_eq!(outcome.correct, 1);
    assert_eq!(outcome.score, 100.0);
    assert!(outcome.discrepancies.is_empty());
}

#[test]
fn mismatch_scores_zero_and_cites_cell() {
    let outcome = grader(&[&["A", "B"]], &[&["A", "X"]], &[&["A", "Y"]]).grade();

    assert_eq!(outcome.score, 0.0);
    assert_eq!(outcome.discrepancies.len(), 1);
    let entry = &outcome.discrepancies[0];
    assert!(entry.contains("Cell (1, 2)"), "row/col should be 1-based: {entry}");
    assert!(entry.contains("`B`"));
    assert!(entry.contains("`Y`"));
}

#[test]
fn no_gradable_cells_scores_zero_not_hundred() {
    let outcome = grader(
        &[&["A", "B"], &["C", "D"]],
        &[&["A", "B"], &["C", "D"]],
        &[&["A", "B"], &["C", "D"]],
    )
    .grade();

    assert_eq!(outcome.total_graded, 0);
    assert_eq!(outcome.score, 0.0);
    assert!(outcome.discrepancies.is_empty());
}

#[test]
fn oversized_submission_scores_like_cropped_one() {
    let solution = &[&["A", "B"][..], &["C", "D"][..]];
    let template = &[&["A", "X"][..], &["C", "Y"][..]];

    let oversized = grader(
        solution,
        template,
        &[&["A", "B", "Z"], &["C", "Q", "Z"], &["Z", "Z", "Z"]],
    )
    .grade();
    let cropped = grader(solution, template, &[&["A", "B"], &["C", "Q"]]).grade();

    assert_eq!(oversized.score, cropped.score);
    assert_eq!(oversized.total_graded, cropped.total_graded);
    assert_eq!(oversized.discrepancies, cropped.discrepancies);
}

#[test]
fn undersized_submission_only_grades_overlap() {
    // Second column is gradable but outside the submission's single column.
    let outcome = grader(&[&["A", "B"]], &[&["A", "X"]], &[&["A"]]).grade();

    assert_eq!(outcome.total_graded, 0);
    assert_eq!(outcome.score, 0.0);
}

#[test]
fn score_rounds_to_two_decimals() {
    let outcome = grader(
        &[&["1", "2", "3"]],
        &[&["x", "y", "z"]],
        &[&["1", "0", "0"]],
    )
    .grade();

    assert_eq!(outcome.total_graded, 3);
    assert_eq!(outcome.correct, 1);
    assert_eq!(outcome.score, 33.33);
}

#[test]
fn grading_is_idempotent() {
    let grader = grader(&[&["A", "B"]], &[&["A", "X"]], &[&["A", "Y"]]);

    assert_eq!(grader.grade(), grader.grade());
}

#[test]
fn ragged_submission_rows_read_back_as_empty_strings() {
    // The submission's second row is short; its missing cell normalizes to
    // "" and grades as a mismatch against the expected "D".
    let outcome = grader(
        &[&["A", "B"], &["C", "D"]],
        &[&["A", "B"], &["C", "X"]],
        &[&["A", "B"], &["C"]],
    )
    .grade();

    assert_eq!(outcome.total_graded, 1);
    assert_eq!(outcome.score, 0.0);
    assert!(outcome.discrepancies[0].contains("`D`"));
}
