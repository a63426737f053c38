//! A single exclusion scope: an anchor directory plus compiled
//! gitignore-style patterns.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Error;

/// Compiled patterns anchored at one directory.
///
/// Paths are matched relative to the anchor; a scope never matches a
/// path outside its own subtree. Negation (`!pattern`) works within a
/// scope's own pattern list, and a directory-only pattern (`build/`)
/// covers everything beneath that directory.
#[derive(Debug)]
pub struct ExclusionScope {
    anchor: PathBuf,
    matcher: Gitignore,
}

impl ExclusionScope {
    /// Compile an ignore file into a scope anchored at its directory.
    ///
    /// A malformed line is dropped with a warning; the remaining valid
    /// lines still compile into the scope.
    pub fn from_ignore_file(path: &Path) -> Self {
        let (matcher, err) = Gitignore::new(path);
        if let Some(err) = err {
            eprintln!("Warning: {}: {}", path.display(), err);
        }
        Self {
            anchor: matcher.path().to_path_buf(),
            matcher,
        }
    }

    /// Compile explicit exclusion patterns into a scope anchored at
    /// `anchor`. Unlike ignore-file lines, an invalid explicit pattern
    /// is a configuration error.
    pub fn from_patterns(anchor: &Path, patterns: &[String]) -> Result<Self, Error> {
        let mut builder = GitignoreBuilder::new(anchor);
        for pattern in patterns {
            builder
                .add_line(None, pattern)
                .map_err(|e| Error::Config(format!("invalid exclude pattern {:?}: {}", pattern, e)))?;
        }
        let matcher = builder
            .build()
            .map_err(|e| Error::Config(format!("invalid exclude patterns: {}", e)))?;
        Ok(Self {
            anchor: anchor.to_path_buf(),
            matcher,
        })
    }

    /// The directory this scope is anchored at.
    pub fn anchor(&self) -> &Path {
        &self.anchor
    }

    /// Whether this scope excludes `path`. Paths outside the anchor
    /// subtree never match.
    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        let Ok(rel) = path.strip_prefix(&self.anchor) else {
            return false;
        };
        self.matcher
            .matched_path_or_any_parents(rel, is_dir)
            .is_ignore()
    }
}
