//! Python signature extraction using tree-sitter.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use crate::analysis::facts::{
    keyword_has_default, positional_has_default, CallableSignature, DecoratorKind, Parameter,
    ScopeKind,
};
use crate::error::Error;

/// Holds a parsed tree-sitter tree and associated metadata.
///
/// Kept separate from the extracted signatures so the source text stays
/// available for node text extraction and suppression-line checks.
#[derive(Debug)]
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The original source code.
    pub source: Vec<u8>,
    /// The file path (for error reporting).
    pub path: String,
}

impl ParsedFile {
    /// Get the source code as a string slice.
    pub fn source_str(&self) -> &str {
        std::str::from_utf8(&self.source).unwrap_or("")
    }

    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }
}

/// Parses Python source and extracts callable signature facts.
pub struct PythonAnalyzer {
    language: Language,
}

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Parse a source file into a tree.
    ///
    /// tree-sitter is lenient, so a parse failure is defined as either
    /// producing no tree at all or producing a tree containing ERROR
    /// nodes; both surface as [`Error::Syntax`] for the file.
    pub fn parse(&self, path: &Path, source: &[u8]) -> Result<ParsedFile, Error> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;

        let tree = parser.parse(source, None).ok_or_else(|| Error::Syntax {
            path: path.to_path_buf(),
        })?;

        if tree.root_node().has_error() {
            return Err(Error::Syntax {
                path: path.to_path_buf(),
            });
        }

        Ok(ParsedFile {
            tree,
            source: source.to_vec(),
            path: path.to_string_lossy().to_string(),
        })
    }

    /// Extract every callable signature from the file, in pre-order
    /// (outer definitions before the definitions nested inside them).
    pub fn signatures(&self, parsed: &ParsedFile) -> Vec<CallableSignature> {
        let mut out = Vec::new();
        self.collect_from_block(parsed, parsed.tree.root_node(), false, &mut out);
        out
    }

    /// Walk one statement block. Class bodies recurse with
    /// `inside_class = true`; function bodies recurse with it false
    /// (a nested function is an ordinary function, not a method).
    /// Other compound statements are not descended into.
    fn collect_from_block(
        &self,
        parsed: &ParsedFile,
        block: Node,
        inside_class: bool,
        out: &mut Vec<CallableSignature>,
    ) {
        let mut cursor = block.walk();
        for child in block.named_children(&mut cursor) {
            match child.kind() {
                "class_definition" => {
                    if let Some(body) = child.child_by_field_name("body") {
                        self.collect_from_block(parsed, body, true, out);
                    }
                }
                "function_definition" => {
                    self.visit_function(parsed, child, Vec::new(), inside_class, out);
                }
                "decorated_definition" => {
                    let decorators = self.classify_decorators(parsed, child);
                    if let Some(def) = child.child_by_field_name("definition") {
                        match def.kind() {
                            "function_definition" => {
                                self.visit_function(parsed, def, decorators, inside_class, out);
                            }
                            "class_definition" => {
                                if let Some(body) = def.child_by_field_name("body") {
                                    self.collect_from_block(parsed, body, true, out);
                                }
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Record the function's signature, then walk its body.
    fn visit_function(
        &self,
        parsed: &ParsedFile,
        func: Node,
        decorators: Vec<DecoratorKind>,
        inside_class: bool,
        out: &mut Vec<CallableSignature>,
    ) {
        out.push(self.signature_of(parsed, func, decorators, inside_class));
        if let Some(body) = func.child_by_field_name("body") {
            self.collect_from_block(parsed, body, false, out);
        }
    }

    /// Classify each decorator of a `decorated_definition` node.
    fn classify_decorators(&self, parsed: &ParsedFile, node: Node) -> Vec<DecoratorKind> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|c| c.kind() == "decorator")
            .map(|d| match d.named_child(0) {
                Some(expr) if expr.kind() == "identifier" => {
                    DecoratorKind::Identifier(parsed.node_text(expr).to_string())
                }
                _ => DecoratorKind::Other,
            })
            .collect()
    }

    /// Build the signature facts for one `function_definition` node.
    ///
    /// `*args` and `**kwargs` are never checked and do not become
    /// parameters; a bare `*` or a `*args` switches collection to the
    /// keyword-only group. The `/` separator is skipped (the parameters
    /// before it are ordinary positional parameters).
    fn signature_of(
        &self,
        parsed: &ParsedFile,
        func: Node,
        decorators: Vec<DecoratorKind>,
        inside_class: bool,
    ) -> CallableSignature {
        let name = func
            .child_by_field_name("name")
            .map(|n| parsed.node_text(n).to_string())
            .unwrap_or_default();
        let line = func.start_position().row + 1;
        let has_return_annotation = func.child_by_field_name("return_type").is_some();

        // (name, has_annotation, direct default flag)
        let mut raw_positional: Vec<(String, bool, bool)> = Vec::new();
        let mut raw_keyword: Vec<(String, bool, bool)> = Vec::new();
        let mut in_keyword_group = false;

        if let Some(params) = func.child_by_field_name("parameters") {
            let mut cursor = params.walk();
            for p in params.named_children(&mut cursor) {
                let entry = match p.kind() {
                    "identifier" => Some((parsed.node_text(p).to_string(), false, false)),
                    "typed_parameter" => match p.named_child(0) {
                        Some(inner) if inner.kind() == "identifier" => {
                            Some((parsed.node_text(inner).to_string(), true, false))
                        }
                        Some(inner) if inner.kind() == "list_splat_pattern" => {
                            in_keyword_group = true;
                            None
                        }
                        _ => None,
                    },
                    "default_parameter" => p
                        .child_by_field_name("name")
                        .filter(|n| n.kind() == "identifier")
                        .map(|n| (parsed.node_text(n).to_string(), false, true)),
                    "typed_default_parameter" => p
                        .child_by_field_name("name")
                        .map(|n| (parsed.node_text(n).to_string(), true, true)),
                    "list_splat_pattern" | "keyword_separator" => {
                        in_keyword_group = true;
                        None
                    }
                    _ => None,
                };

                if let Some(entry) = entry {
                    if in_keyword_group {
                        raw_keyword.push(entry);
                    } else {
                        raw_positional.push(entry);
                    }
                }
            }
        }

        let count = raw_positional.len();
        let defaults = raw_positional.iter().filter(|(_, _, d)| *d).count();
        let positional = raw_positional
            .into_iter()
            .enumerate()
            .map(|(i, (name, has_annotation, _))| Parameter {
                name,
                index: i,
                has_annotation,
                has_default: positional_has_default(i, count, defaults),
            })
            .collect();

        let kw_defaults: Vec<bool> = raw_keyword.iter().map(|(_, _, d)| *d).collect();
        let keyword_only = raw_keyword
            .into_iter()
            .enumerate()
            .map(|(i, (name, has_annotation, _))| Parameter {
                name,
                index: i,
                has_annotation,
                has_default: keyword_has_default(i, &kw_defaults),
            })
            .collect();

        CallableSignature {
            name,
            line,
            positional,
            keyword_only,
            decorators,
            has_return_annotation,
            inside_class,
            scope: if inside_class {
                ScopeKind::Class
            } else {
                ScopeKind::Module
            },
        }
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
