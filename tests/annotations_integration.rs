//! Integration tests for the annotation checking pipeline.
//!
//! These tests validate the per-file rule against the fixtures under
//! `testdata/`: exemptions for receivers and constructors, the
//! has-default exemption, and inline suppression.

use std::path::PathBuf;

use hintcheck::{check_file, Issue, PythonAnalyzer, Settings};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn check_fixture(name: &str, settings: &Settings) -> Vec<Issue> {
    let path = testdata_path().join(name);
    let source = std::fs::read(&path).expect("should read fixture");
    let analyzer = PythonAnalyzer::new();
    let parsed = analyzer.parse(&path, &source).expect("should parse fixture");
    check_file(&analyzer, &parsed, settings)
}

fn check_source(source: &str, settings: &Settings) -> Vec<Issue> {
    let analyzer = PythonAnalyzer::new();
    let parsed = analyzer
        .parse(&PathBuf::from("inline.py"), source.as_bytes())
        .expect("should parse source");
    check_file(&analyzer, &parsed, settings)
}

#[test]
fn test_fully_annotated_fixture_is_clean() {
    let issues = check_fixture("pass.py", &Settings::default());
    assert!(issues.is_empty(), "expected no issues, got {:?}", issues);
}

#[test]
fn test_missing_argument_annotation() {
    let issues = check_fixture("fail_args.py", &Settings::default());
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        "Argument 'second' of function 'combine:1' has no type annotation"
    );
    assert_eq!(issues[0].line, 1);
}

#[test]
fn test_missing_return_annotation() {
    let issues = check_fixture("fail_return.py", &Settings::default());
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.to_lowercase().contains("return"));
}

#[test]
fn test_undecorated_cls_receiver_is_flagged() {
    let issues = check_fixture("fail_method.py", &Settings::default());
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("'cls'"));
}

#[test]
fn test_has_default_exemption_toggles() {
    // host, port, and timeout lack annotations; retries is annotated.
    let issues = check_fixture("defaults.py", &Settings::default());
    assert_eq!(issues.len(), 3);

    // Only host lacks both an annotation and a default.
    let settings = Settings {
        ignore_if_has_default: true,
        ..Settings::default()
    };
    let issues = check_fixture("defaults.py", &settings);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("'host'"));
}

#[test]
fn test_suppressed_definition_still_has_its_body_checked() {
    let issues = check_fixture("noqa.py", &Settings::default());
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.message.contains("helper")));
}

#[test]
fn test_removing_one_annotation_adds_exactly_one_issue() {
    let annotated = "def resize(width: int, height: int, *, scale: float = 1.0) -> None:\n    pass\n";
    assert!(check_source(annotated, &Settings::default()).is_empty());

    let cases = [
        (
            "def resize(width, height: int, *, scale: float = 1.0) -> None:\n    pass\n",
            "'width'",
        ),
        (
            "def resize(width: int, height, *, scale: float = 1.0) -> None:\n    pass\n",
            "'height'",
        ),
        (
            "def resize(width: int, height: int, *, scale=1.0) -> None:\n    pass\n",
            "'scale'",
        ),
        (
            "def resize(width: int, height: int, *, scale: float = 1.0):\n    pass\n",
            "return type",
        ),
    ];
    for (source, expected) in cases {
        let issues = check_source(source, &Settings::default());
        assert_eq!(issues.len(), 1, "source: {}", source);
        assert!(
            issues[0].message.contains(expected),
            "expected {:?} in {:?}",
            expected,
            issues[0].message
        );
    }
}

#[test]
fn test_issue_order_follows_the_walk() {
    let source = r#"
def first(a):
    def nested(b):
        pass

class Late:
    def method(self, c):
        pass
"#;
    let issues = check_source(source, &Settings::default());
    let mentioned: Vec<&str> = issues
        .iter()
        .filter_map(|i| {
            i.message
                .split('\'')
                .nth(1)
                .filter(|name| ["a", "b", "c"].contains(name))
        })
        .collect();
    assert_eq!(mentioned, vec!["a", "b", "c"]);
}
