//! Core types for check results.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One reported instance of a missing annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Human-readable message.
    pub message: String,
    /// File the issue originates from.
    pub file: String,
    /// Line of the definition (1-indexed).
    pub line: usize,
}

/// The issues found in one checked file.
///
/// Issues are a list, not a set: two callables with identical names and
/// lines in different scopes legitimately produce identical-looking
/// entries, and both are reported.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
}

/// Aggregate results of one run.
#[derive(Debug, Default)]
pub struct CheckResult {
    pub reports: Vec<FileReport>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the report for one file.
    pub fn add_report(&mut self, report: FileReport) {
        self.files_checked += 1;
        self.reports.push(report);
    }

    /// Total issue count across all files.
    pub fn total_issues(&self) -> usize {
        self.reports.iter().map(|r| r.issues.len()).sum()
    }

    /// Number of files with at least one issue.
    pub fn files_with_issues(&self) -> usize {
        self.reports.iter().filter(|r| !r.issues.is_empty()).count()
    }

    pub fn is_clean(&self) -> bool {
        self.total_issues() == 0
    }
}
