//! Fact structures extracted from the syntax tree.

/// Kind of scope a callable is defined in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Module level, or the body of another function.
    Module,
    /// Directly inside a class body.
    Class,
}

/// Classification of one decorator expression.
///
/// Only a direct, unqualified reference (`@classmethod`) counts as an
/// identifier. Calls (`@app.route("/")`) and attribute accesses
/// (`@functools.wraps`) are `Other` and never satisfy the
/// classmethod/property receiver exemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorKind {
    Identifier(String),
    Other,
}

/// A single parameter of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// Position within its own group (positional or keyword-only).
    pub index: usize,
    /// Whether the parameter carries a type annotation.
    pub has_annotation: bool,
    /// Whether the parameter carries a default value.
    pub has_default: bool,
}

/// Signature facts for one function or method definition.
///
/// Built fresh for each definition the walk visits and not mutated
/// afterwards. `line` is the line of the `def` keyword (1-indexed),
/// which excludes any decorators above it.
#[derive(Debug, Clone)]
pub struct CallableSignature {
    /// The callable's name.
    pub name: String,
    /// Defining line (1-indexed, the `def` line).
    pub line: usize,
    /// Plain positional parameters, in declaration order.
    pub positional: Vec<Parameter>,
    /// Keyword-only parameters (after `*` or `*args`), in order.
    pub keyword_only: Vec<Parameter>,
    /// Classification of each decorator, in source order.
    pub decorators: Vec<DecoratorKind>,
    /// Whether a `-> type` return annotation is present.
    pub has_return_annotation: bool,
    /// Whether the definition sits directly inside a class body.
    pub inside_class: bool,
    /// The enclosing scope kind.
    pub scope: ScopeKind,
}

impl CallableSignature {
    /// Check whether the callable carries a decorator that is a direct
    /// reference to `name`.
    pub fn has_decorator(&self, name: &str) -> bool {
        self.decorators
            .iter()
            .any(|d| matches!(d, DecoratorKind::Identifier(id) if id == name))
    }
}

/// Whether the positional parameter at `index` carries a default value.
///
/// Defaults align against the tail of the parameter list: with `count`
/// positional parameters and `defaults` default values, the defaults
/// belong to the last `defaults` parameters.
pub fn positional_has_default(index: usize, count: usize, defaults: usize) -> bool {
    count - 1 - index < defaults
}

/// Whether the keyword-only parameter at `index` carries a default value.
///
/// Keyword defaults are positional: a missing entry at a position means
/// that parameter has no default.
pub fn keyword_has_default(index: usize, defaults: &[bool]) -> bool {
    defaults.get(index).copied().unwrap_or(false)
}
