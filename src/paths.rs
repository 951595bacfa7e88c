#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::glob;

/// Directory layout of one assignment under the course root.
///
/// Submissions live in `assignments/<id>/`, reference files in
/// `solutions/<id>/`, and generated reports in `evaluations/<id>/`. The
/// assignment identifier may contain `/` segments (e.g. `2025/recipes`).
#[derive(Debug, Clone)]
pub struct AssignmentPaths {
    /// Course root directory.
    root:          PathBuf,
    /// Assignment identifier.
    assignment_id: String,
}

impl AssignmentPaths {
    /// Creates the layout for an assignment under `root`.
    pub fn new(root: impl Into<PathBuf>, assignment_id: impl Into<String>) -> Self {
        Self {
            root:          root.into(),
            assignment_id: assignment_id.into(),
        }
    }

    /// The assignment identifier.
    pub fn assignment_id(&self) -> &str {
        &self.assignment_id
    }

    /// Directory holding the student submissions.
    pub fn submissions_dir(&self) -> PathBuf {
        self.root.join("assignments").join(&self.assignment_id)
    }

    /// Directory holding the reference solution and template.
    pub fn solutions_dir(&self) -> PathBuf {
        self.root.join("solutions").join(&self.assignment_id)
    }

    /// Directory receiving the generated reports.
    pub fn evaluations_dir(&self) -> PathBuf {
        self.root.join("evaluations").join(&self.assignment_id)
    }

    /// Path of the consolidated summary file.
    pub fn summary_file(&self) -> PathBuf {
        self.evaluations_dir().join("REPORT.csv")
    }

    /// Path of one student's Markdown report.
    pub fn student_report(&self, student: &str) -> PathBuf {
        self.evaluations_dir().join(format!("{student}.md"))
    }

    /// Creates the evaluations directory if needed.
    pub fn ensure_evaluations_dir(&self) -> Result<()> {
        let dir = self.evaluations_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create {}", dir.display()))
    }

    /// Resolves a reference file in the solutions directory, trying each
    /// extension in order.
    fn solution_file(&self, stem: &str, extensions: &[&str]) -> Result<PathBuf> {
        for ext in extensions {
            let candidate = self.solutions_dir().join(format!("{stem}.{ext}"));
            if candidate.exists() {
                return Ok(candidate);
            }
        }
        bail!(
            "Reference file `{stem}` for assignment `{}` is not available in {}",
            self.assignment_id,
            self.solutions_dir().display()
        )
    }

    /// The reference solution grid, preferring CSV over ODS.
    pub fn solution_grid(&self) -> Result<PathBuf> {
        self.solution_file("solution", &["csv", "ods"])
    }

    /// The ungraded template grid, preferring CSV over ODS.
    pub fn template_grid(&self) -> Result<PathBuf> {
        self.solution_file("assignment", &["csv", "ods"])
    }

    /// The reference solution document snapshot.
    pub fn solution_snapshot(&self) -> Result<PathBuf> {
        self.solution_file("solution", &["json"])
    }

    /// Submission candidates in the submissions directory, one glob per
    /// accepted extension, sorted for deterministic matching.
    pub fn submission_candidates(&self, extensions: &[&str]) -> Result<Vec<PathBuf>> {
        let dir = self.submissions_dir();
        if !dir.exists() {
            bail!("Assignment folder {} is not available", dir.display());
        }

        let mut candidates = Vec::new();
        for ext in extensions {
            let pattern = pattern_string(&dir, ext)?;
            candidates.extend(
                glob(&pattern)
                    .with_context(|| format!("Could not create glob {pattern}"))?
                    .filter_map(Result::ok),
            );
        }
        candidates.sort();
        Ok(candidates)
    }
}

/// Builds the glob pattern for files with one extension in a directory.
fn pattern_string(dir: &Path, extension: &str) -> Result<String> {
    let mut pattern = dir.to_path_buf();
    pattern.push(format!("*.{extension}"));
    Ok(pattern
        .to_str()
        .context("Could not convert submissions directory to string")?
        .to_string())
}
