#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// The class roster: student identifiers mapped to display names.
///
/// Loaded from a JSON object file. Iteration is sorted by display name so
/// that batch output is deterministic regardless of file order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster(BTreeMap<String, String>);

impl Roster {
    /// Reads a roster from a JSON object of `identifier: display name`
    /// pairs. Failure here is fatal to a batch run.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse roster file: {}", path.display()))
    }

    /// Display names, sorted.
    pub fn student_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.values().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of roster entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the roster holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Roster {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Matches a student to their submission file.
///
/// Submission files are named after the student, possibly shortened: the
/// file stem, uppercased and split on whitespace, must equal the first N
/// words of the uppercased display name, where N is the stem's word count.
/// The first candidate that matches wins.
pub fn match_submission<'a>(student_name: &str, candidates: &'a [PathBuf]) -> Option<&'a PathBuf> {
    let name_words: Vec<String> = student_name
        .to_uppercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect();

    candidates.iter().find(|candidate| {
        let stem = match candidate.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_uppercase(),
            None => return false,
        };
        let stem_words: Vec<&str> = stem.split_whitespace().collect();

        !stem_words.is_empty()
            && stem_words.len() <= name_words.len()
            && stem_words
                .iter()
                .zip(&name_words)
                .all(|(stem_word, name_word)| stem_word == name_word)
    })
}
