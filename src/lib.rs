//! # markone
//!
//! A batch autograder for structured-document assignments: grades every
//! roster entry's submission against a reference solution and generates
//! per-student feedback reports plus a consolidated summary.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Batch evaluation across a class roster
pub mod batch;
/// Comparison weights and tolerances
pub mod config;
/// For invoking the external office-document converter
pub mod convert;
/// Structured document snapshot records
pub mod document;
/// For all things related to grading
pub mod grade;
/// String cell grids extracted from spreadsheets
pub mod grid;
/// Assignment directory layout and submission discovery
pub mod paths;
/// Class roster loading and submission-file matching
pub mod roster;
