//! Syntax-tree analysis: parsing Python sources and extracting
//! callable signature facts.
//!
//! The walk is a single recursive traversal over module, class, and
//! function bodies. Class bodies flip an explicit `inside_class` flag;
//! function bodies clear it again, so nested functions are ordinary
//! functions even when declared inside a method. Detection rules in
//! [`crate::detect`] consume the extracted facts.

mod facts;
mod python;

pub use facts::{
    keyword_has_default, positional_has_default, CallableSignature, DecoratorKind, Parameter,
    ScopeKind,
};
pub use python::{ParsedFile, PythonAnalyzer};
