//! Command-line interface for hintcheck.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::analysis::PythonAnalyzer;
use crate::detect::{self, CheckResult, FileReport, Issue};
use crate::error::Error;
use crate::exclude::ExclusionResolver;
use crate::report;
use crate::settings::Settings;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Python type annotation presence checker.
///
/// hintcheck flags functions and methods whose parameters or return
/// values lack type annotations. It does not validate the annotations
/// themselves - only that they are present, with documented exemptions
/// for receiver parameters, constructors, and inline suppression.
#[derive(Parser)]
#[command(name = "hintcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files/directories to recursively check
    pub files: Vec<PathBuf>,

    /// Gitignore-style pattern of files/directories to exclude (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Do not read .gitignore files to exclude files
    #[arg(long)]
    pub no_gitignore: bool,

    /// Do not flag unannotated arguments that carry a default value
    #[arg(long)]
    pub ignore_if_has_default: bool,

    /// Do not print issues
    #[arg(short, long)]
    pub quiet: bool,

    /// Print debugging information to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format: pretty or json
    #[arg(long, default_value = "pretty")]
    pub format: String,
}

/// Run the checker. Returns the process exit code.
pub fn run_check(cli: &Cli) -> anyhow::Result<i32> {
    // Validate format
    if cli.format != "pretty" && cli.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            cli.format
        );
        return Ok(EXIT_ERROR);
    }

    let cwd = std::env::current_dir()?.canonicalize()?;
    let settings = Settings::load(cli, &cwd)?;

    if settings.paths.is_empty() {
        eprintln!("Error: no files or directories to check");
        eprintln!("Pass paths on the command line or set tool.hintcheck.paths");
        return Ok(EXIT_ERROR);
    }

    // Scope discovery completes fully before any file is checked.
    let mut resolver = ExclusionResolver::new();
    if !settings.no_gitignore {
        resolver.discover(&cwd, settings.verbose);
    }
    resolver.add_patterns(&cwd, &settings.exclude)?;

    let files = resolver.collect_files(&settings.paths, settings.verbose)?;
    if files.is_empty() {
        eprintln!("Warning: no files to check");
    }

    let analyzer = PythonAnalyzer::new();
    let mut result = CheckResult::new();
    let mut had_errors = false;

    for file in &files {
        if settings.verbose {
            eprintln!("Checking {}", file.display());
        }
        match check_one(&analyzer, file, &settings) {
            Ok(issues) => result.add_report(FileReport {
                path: file.clone(),
                issues,
            }),
            Err(e) => {
                // One failing file must not silently produce zero
                // issues; report it and keep checking the rest.
                eprintln!("Error: {}", e);
                had_errors = true;
            }
        }
    }

    if !settings.quiet {
        match cli.format.as_str() {
            "json" => report::write_json(&result, &cwd)?,
            _ => report::write_pretty(&result, &cwd),
        }
    }

    if had_errors {
        Ok(EXIT_ERROR)
    } else if result.total_issues() > 0 {
        Ok(EXIT_ISSUES)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Read, parse, and check a single file.
fn check_one(
    analyzer: &PythonAnalyzer,
    file: &Path,
    settings: &Settings,
) -> Result<Vec<Issue>, Error> {
    let source = std::fs::read(file).map_err(|e| Error::Io {
        path: file.to_path_buf(),
        source: e,
    })?;
    let parsed = analyzer.parse(file, &source)?;
    Ok(detect::check_file(analyzer, &parsed, settings))
}
