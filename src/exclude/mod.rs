//! Exclusion resolution: ignore-file scope discovery and source file
//! enumeration.
//!
//! An ignore file can itself sit inside a subtree that a broader scope
//! excludes, so discovery is an ordered incremental build: scopes are
//! accumulated top-down, and each new candidate is tested against the
//! scopes collected so far before it is trusted.

mod resolver;
mod scope;

pub use resolver::ExclusionResolver;
pub use scope::ExclusionScope;
