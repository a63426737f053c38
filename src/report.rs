//! Output formatting for check results.
//!
//! Two formats:
//! - Pretty: colored per-file grouped listing for terminals
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::detect::CheckResult;

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub files_checked: usize,
    pub issue_count: usize,
    pub issues: Vec<JsonIssue>,
}

/// One issue in the JSON report.
#[derive(Serialize, Deserialize)]
pub struct JsonIssue {
    pub file: String,
    pub line: usize,
    pub message: String,
}

/// Render a path relative to the working directory when possible.
fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd).unwrap_or(path).display().to_string()
}

/// Build the JSON report value.
pub fn json_report(result: &CheckResult, cwd: &Path) -> JsonReport {
    let issues = result
        .reports
        .iter()
        .flat_map(|report| {
            report.issues.iter().map(|issue| JsonIssue {
                file: display_path(&report.path, cwd),
                line: issue.line,
                message: issue.message.clone(),
            })
        })
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        files_checked: result.files_checked,
        issue_count: result.total_issues(),
        issues,
    }
}

/// Write results as JSON to stdout.
pub fn write_json(result: &CheckResult, cwd: &Path) -> anyhow::Result<()> {
    let report = json_report(result, cwd);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Write results as a colored per-file grouped listing to stdout.
pub fn write_pretty(result: &CheckResult, cwd: &Path) {
    if result.is_clean() {
        println!("{}", "No issues found".green());
        return;
    }

    for report in &result.reports {
        if report.issues.is_empty() {
            continue;
        }
        println!("{}", display_path(&report.path, cwd).cyan().bold());
        for issue in &report.issues {
            println!("  {}  {}", format!(":{}", issue.line).dimmed(), issue.message);
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Found {} issue(s) in {} of {} file(s)",
            result.total_issues(),
            result.files_with_issues(),
            result.files_checked
        )
        .red()
        .bold()
    );
}
