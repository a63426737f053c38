//! Error types for hintcheck.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the checker.
///
/// Malformed ignore-file lines are not represented here: they are
/// recovered locally (the line is dropped with a warning) so that a
/// single bad rule cannot disable an entire exclusion scope.
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be parsed as Python.
    #[error("cannot parse {}: invalid Python syntax", path.display())]
    Syntax { path: PathBuf },

    /// A configuration value has the wrong shape, or an explicit
    /// exclusion pattern is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a file or ignore file failed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Python grammar could not be loaded into the parser.
    #[error("parser initialization failed: {0}")]
    Parser(#[from] tree_sitter::LanguageError),
}
