use std::path::Path;

use super::*;

#[test]
fn filter_accepts_matching_extension() {
    let filter = SourceFilter::new(vec!["rs".to_string()], &[]).unwrap();
    assert!(filter.should_include(Path::new("src/lib.rs")));
}

#[test]
fn filter_rejects_other_extensions() {
    let filter = SourceFilter::new(vec!["rs".to_string()], &[]).unwrap();
    assert!(!filter.should_include(Path::new("notes.md")));
    assert!(!filter.should_include(Path::new("Makefile")));
}

#[test]
fn filter_empty_extension_set_accepts_everything() {
    let filter = SourceFilter::new(Vec::new(), &[]).unwrap();
    assert!(filter.should_include(Path::new("anything.xyz")));
    assert!(filter.should_include(Path::new("no_extension")));
}

#[test]
fn filter_excludes_glob_matches() {
    let filter =
        SourceFilter::new(vec!["rs".to_string()], &["**/tests/**".to_string()]).unwrap();

    assert!(!filter.should_include(Path::new("crates/core/tests/it.rs")));
    assert!(!filter.should_include(Path::new("tests/b.rs")));
    assert!(filter.should_include(Path::new("crates/core/src/lib.rs")));
}

#[test]
fn filter_exclude_matches_segment_not_substring() {
    let filter =
        SourceFilter::new(vec!["rs".to_string()], &["**/tests/**".to_string()]).unwrap();

    // "integration_tests" is not a "tests" path segment
    assert!(filter.should_include(Path::new("src/integration_tests/mod.rs")));
}

#[test]
fn filter_multiple_extensions() {
    let filter = SourceFilter::new(vec!["rs".to_string(), "go".to_string()], &[]).unwrap();
    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("main.go")));
    assert!(!filter.should_include(Path::new("main.py")));
}

#[test]
fn filter_invalid_pattern_errors() {
    let result = SourceFilter::new(Vec::new(), &["a{".to_string()]);
    assert!(matches!(
        result,
        Err(crate::error::HygieneGuardError::InvalidPattern { .. })
    ));
}
