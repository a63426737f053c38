//! hintcheck - Python type annotation presence checker.
//!
//! hintcheck walks the syntax tree of each Python source file and flags
//! every function or method parameter and return value that lacks a
//! type annotation, subject to documented exemptions: `self`/`cls`
//! receivers, `__init__`/`__new__` return values, inline `# noqa`
//! suppression, and (optionally) parameters that carry default values.
//! It never typechecks - only presence is verified.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for AST-based analysis:
//!
//! - `analysis`: Python parsing and callable signature extraction
//! - `detect`: the annotation completeness rule
//! - `exclude`: gitignore scope discovery and file enumeration
//! - `settings`: pyproject.toml + command line configuration merge
//! - `report`: output formatting (pretty, JSON)

pub mod analysis;
pub mod cli;
pub mod detect;
pub mod error;
pub mod exclude;
pub mod report;
pub mod settings;

pub use analysis::{
    CallableSignature, DecoratorKind, Parameter, ParsedFile, PythonAnalyzer, ScopeKind,
};
pub use detect::{check_file, check_function, CheckResult, FileReport, Issue};
pub use error::Error;
pub use exclude::{ExclusionResolver, ExclusionScope};
pub use settings::Settings;
