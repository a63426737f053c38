//! Scope discovery, path matching, and source file enumeration.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;

use super::scope::ExclusionScope;

/// File name of discovered ignore files.
const IGNORE_FILE_NAME: &str = ".gitignore";
/// Extension of checkable Python source files.
const SOURCE_EXTENSION: &str = "py";
/// Extension of stub files; a stub shadows the source of the same name.
const STUB_EXTENSION: &str = "pyi";

/// Resolves which files are in scope for checking.
///
/// Holds an ordered list of [`ExclusionScope`]s: discovered ignore
/// files first (top-down), then one scope for the explicit exclusion
/// patterns. Scopes are independent and OR-combined; only negation
/// within a single scope's own pattern list can un-exclude a path.
#[derive(Default)]
pub struct ExclusionResolver {
    scopes: Vec<ExclusionScope>,
}

impl ExclusionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover ignore-file scopes under `root`.
    ///
    /// Candidates are processed top-down by path depth so that parent
    /// scopes are in place before nested ignore files are considered. A
    /// candidate that is itself excluded by the scopes accumulated so
    /// far is skipped entirely and contributes no rules.
    pub fn discover(&mut self, root: &Path, verbose: bool) {
        let mut candidates: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.file_name() == IGNORE_FILE_NAME)
            .map(|e| e.into_path())
            .collect();
        candidates.sort_by(|a, b| {
            a.components()
                .count()
                .cmp(&b.components().count())
                .then_with(|| a.cmp(b))
        });

        for candidate in candidates {
            if self.is_excluded(&candidate, false) {
                if verbose {
                    eprintln!("Skipping {}", candidate.display());
                }
                continue;
            }
            if verbose {
                eprintln!("Loading {}", candidate.display());
            }
            self.scopes.push(ExclusionScope::from_ignore_file(&candidate));
        }
    }

    /// Append one scope compiled from explicit exclusion patterns,
    /// anchored at `anchor`.
    pub fn add_patterns(&mut self, anchor: &Path, patterns: &[String]) -> Result<(), Error> {
        if patterns.is_empty() {
            return Ok(());
        }
        self.scopes.push(ExclusionScope::from_patterns(anchor, patterns)?);
        Ok(())
    }

    /// Number of active scopes.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Whether any scope excludes `path`.
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        self.scopes.iter().any(|s| s.matches(path, is_dir))
    }

    /// Expand the input paths into the final set of files to check.
    ///
    /// A file stands for itself; a directory expands recursively to
    /// every `.py` / `.pyi` file beneath it. When a stub and a source
    /// file share a base name only the stub survives. The result is
    /// de-duplicated by absolute path, filtered through the exclusion
    /// scopes, and sorted for deterministic output.
    pub fn collect_files(&self, roots: &[PathBuf], verbose: bool) -> Result<Vec<PathBuf>, Error> {
        let mut candidates: BTreeSet<PathBuf> = BTreeSet::new();

        for root in roots {
            let root = match root.canonicalize() {
                Ok(p) => p,
                Err(_) => {
                    eprintln!("Warning: cannot access {}, skipping", root.display());
                    continue;
                }
            };

            if root.is_dir() {
                for entry in WalkDir::new(&root) {
                    let entry = entry.map_err(|e| {
                        let path = e
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| root.clone());
                        Error::Io {
                            path,
                            source: e
                                .into_io_error()
                                .unwrap_or_else(|| std::io::Error::other("filesystem loop")),
                        }
                    })?;
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let ext = entry.path().extension().and_then(|e| e.to_str());
                    if matches!(ext, Some(SOURCE_EXTENSION) | Some(STUB_EXTENSION)) {
                        candidates.insert(entry.into_path());
                    }
                }
            } else {
                // An explicitly listed file is checked whatever its
                // extension, subject to the same exclusions.
                candidates.insert(root);
            }
        }

        let shadowed: Vec<PathBuf> = candidates
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == SOURCE_EXTENSION))
            .filter(|p| candidates.contains(&p.with_extension(STUB_EXTENSION)))
            .cloned()
            .collect();
        for path in shadowed {
            candidates.remove(&path);
        }

        let mut files = Vec::new();
        for path in candidates {
            if self.is_excluded(&path, false) {
                if verbose {
                    eprintln!("Skipping {}", path.display());
                }
                continue;
            }
            files.push(path);
        }
        Ok(files)
    }
}
