//! The annotation completeness rule.
//!
//! Consumes the signature facts extracted by [`crate::analysis`] and
//! decides which missing annotations are genuine issues versus exempted
//! conventions: receiver parameters (`self`, decorated `cls`),
//! constructors and allocators, inline `# noqa` suppression, and the
//! optional has-default exemption.

use crate::analysis::{CallableSignature, ParsedFile, PythonAnalyzer};
use crate::settings::Settings;

use super::types::Issue;

/// Inline marker that suppresses checking of the definition on its line.
const NOQA_MARKER: &str = "# noqa";

/// Constructor method name; may omit its return annotation.
const CONSTRUCTOR: &str = "__init__";
/// Allocator method name; may omit its return annotation and takes an
/// undecorated `cls` receiver.
const ALLOCATOR: &str = "__new__";

/// Check one parsed file and return its issues in walk order.
///
/// A definition whose `def` line carries the suppression marker is
/// skipped entirely, but the callables nested inside its body are still
/// checked.
pub fn check_file(
    analyzer: &PythonAnalyzer,
    parsed: &ParsedFile,
    settings: &Settings,
) -> Vec<Issue> {
    let lines: Vec<&str> = parsed.source_str().lines().collect();
    let mut issues = Vec::new();

    for sig in analyzer.signatures(parsed) {
        if line_is_suppressed(&lines, sig.line) {
            continue;
        }
        issues.extend(check_function(&sig, settings, &parsed.path));
    }

    issues
}

fn line_is_suppressed(lines: &[&str], line: usize) -> bool {
    line > 0 && lines.get(line - 1).is_some_and(|l| l.contains(NOQA_MARKER))
}

/// Apply the per-callable rule and return the issues for one signature:
/// positional parameters first, then keyword-only, then the return
/// annotation.
pub fn check_function(sig: &CallableSignature, settings: &Settings, file: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let function_name = format!("{}:{}", sig.name, sig.line);

    for param in &sig.positional {
        if sig.inside_class && param.index == 0 {
            // A plain instance method receiver.
            if param.name == "self" {
                continue;
            }
            // A class receiver, when the decoration (or the allocator
            // name) says this callable actually receives the class.
            if param.name == "cls"
                && (sig.has_decorator("classmethod")
                    || sig.has_decorator("property")
                    || sig.name == ALLOCATOR)
            {
                continue;
            }
        }

        // Static methods get no special treatment.

        if !param.has_annotation {
            if settings.ignore_if_has_default && param.has_default {
                continue;
            }
            issues.push(Issue {
                message: format!(
                    "Argument '{}' of function '{}' has no type annotation",
                    param.name, function_name
                ),
                file: file.to_string(),
                line: sig.line,
            });
        }
    }

    for param in &sig.keyword_only {
        if !param.has_annotation {
            if settings.ignore_if_has_default && param.has_default {
                continue;
            }
            issues.push(Issue {
                message: format!(
                    "Argument '{}' of function '{}' has no type annotation",
                    param.name, function_name
                ),
                file: file.to_string(),
                line: sig.line,
            });
        }
    }

    if !sig.has_return_annotation && sig.name != CONSTRUCTOR && sig.name != ALLOCATOR {
        issues.push(Issue {
            message: format!("Function '{}' has no return type annotation", function_name),
            file: file.to_string(),
            line: sig.line,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(source: &str, settings: &Settings) -> Vec<Issue> {
        let analyzer = PythonAnalyzer::new();
        let parsed = analyzer
            .parse(Path::new("test.py"), source.as_bytes())
            .unwrap();
        check_file(&analyzer, &parsed, settings)
    }

    #[test]
    fn test_fully_annotated_is_clean() {
        let source = r#"
def add(one: int, two: int) -> int:
    return one + two
"#;
        assert!(check(source, &Settings::default()).is_empty());
    }

    #[test]
    fn test_missing_argument_annotation() {
        let source = r#"
def add(one: int, two) -> int:
    return one + two
"#;
        let issues = check(source, &Settings::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Argument 'two' of function 'add:2' has no type annotation"
        );
        assert_eq!(issues[0].line, 2);
    }

    #[test]
    fn test_missing_return_annotation() {
        let issues = check("def add(one: int, two: int):\n    return one + two\n", &Settings::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Function 'add:1' has no return type annotation"
        );
    }

    #[test]
    fn test_self_receiver_is_exempt() {
        let source = r#"
class Car:
    def drive(self) -> None:
        pass
"#;
        assert!(check(source, &Settings::default()).is_empty());
    }

    #[test]
    fn test_cls_requires_recognized_decorator() {
        let decorated = r#"
class Car:
    @classmethod
    def seats(cls) -> int:
        return 4
"#;
        assert!(check(decorated, &Settings::default()).is_empty());

        // The same receiver without the decorator is an ordinary
        // parameter and gets flagged.
        let undecorated = r#"
class Car:
    def seats(cls) -> int:
        return 4
"#;
        let issues = check(undecorated, &Settings::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'cls'"));
    }

    #[test]
    fn test_property_cls_receiver_is_exempt() {
        let source = r#"
class Car:
    @property
    def wheels(cls) -> int:
        return 4
"#;
        assert!(check(source, &Settings::default()).is_empty());
    }

    #[test]
    fn test_unrecognized_decorator_does_not_exempt() {
        let source = r#"
class Car:
    @app.route("/seats")
    def seats(cls) -> int:
        return 4
"#;
        let issues = check(source, &Settings::default());
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_constructor_and_allocator_return_exemption() {
        let source = r#"
class Car:
    def __init__(self):
        pass

    def __new__(cls):
        pass
"#;
        assert!(check(source, &Settings::default()).is_empty());
    }

    #[test]
    fn test_self_outside_class_is_flagged() {
        let issues = check("def free(self) -> None:\n    pass\n", &Settings::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'self'"));
    }

    #[test]
    fn test_zero_parameter_function() {
        assert!(check("def nop() -> None:\n    pass\n", &Settings::default()).is_empty());
        let issues = check("def nop():\n    pass\n", &Settings::default());
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_ignore_if_has_default() {
        let source = r#"
def greet(name="world", count: int = 1, *, sep=" ") -> None:
    pass
"#;
        let issues = check(source, &Settings::default());
        assert_eq!(issues.len(), 2);

        let settings = Settings {
            ignore_if_has_default: true,
            ..Settings::default()
        };
        assert!(check(source, &settings).is_empty());

        // The exemption only covers parameters that carry defaults.
        let partial = "def greet(name, sep=\"*\") -> None:\n    pass\n";
        let issues = check(partial, &settings);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'name'"));
    }

    #[test]
    fn test_noqa_suppresses_only_the_marked_definition() {
        let source = r#"
def outer(a):  # noqa
    def inner(b):
        pass
"#;
        let issues = check(source, &Settings::default());
        // Outer is skipped entirely; inner is still checked.
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.message.contains("inner:3")));
    }

    #[test]
    fn test_keyword_only_order_after_positional() {
        let source = "def f(a, *, b):\n    pass\n";
        let issues = check(source, &Settings::default());
        assert_eq!(issues.len(), 3);
        assert!(issues[0].message.contains("'a'"));
        assert!(issues[1].message.contains("'b'"));
        assert!(issues[2].message.contains("return type"));
    }

    #[test]
    fn test_duplicate_looking_issues_are_both_kept() {
        // Same name, same relative line shape, different scopes.
        let source = r#"
class A:
    def go(x):
        pass

class B:
    def go(x):
        pass
"#;
        let issues = check(source, &Settings::default());
        assert_eq!(issues.len(), 4);
    }
}
