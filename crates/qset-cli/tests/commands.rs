//! Integration tests for the check, fmt, and show commands.

use std::fs;
use std::path::PathBuf;

use qset_cli::commands::{run_check, run_fmt, run_show};
use qset_model::parse;

/// Canonical on-disk form of a one-question set.
const CANONICAL: &str = r#"{
  "name": "Customer Intake",
  "questions": [
    {
      "id": "q1",
      "question": "What is your name?",
      "type": "text",
      "note": ""
    }
  ]
}
"#;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "qset-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

fn write_source(name: &str, contents: &str) -> PathBuf {
    let dir = unique_temp_dir(name);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("questions.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_check_passes_a_clean_file() {
    let path = write_source("check-clean", CANONICAL);

    let report = run_check(&path).unwrap();
    assert_eq!(report.issue, None);
    let set = report.set.as_ref().expect("set derived");
    assert_eq!(set.name, "Customer Intake");
    assert_eq!(set.questions.len(), 1);
    assert!(!report.failed(false));
    assert!(!report.failed(true));
}

#[test]
fn test_check_reports_structural_problems() {
    let path = write_source("check-structural", r#"{"name": "Customer Intake"}"#);

    let report = run_check(&path).unwrap();
    assert_eq!(report.set, None);
    assert!(report.issue.is_some());
    assert!(report.failed(false));
}

#[test]
fn test_check_fails_advisory_problems_only_under_strict() {
    let path = write_source(
        "check-advisory",
        r#"{"name": "ab", "questions": [{"id": "q1", "question": "Name?", "type": "text"}]}"#,
    );

    let report = run_check(&path).unwrap();
    assert!(report.set.is_some());
    assert!(!report.failed(false));
    assert!(report.failed(true));
}

#[test]
fn test_check_errors_on_a_missing_file() {
    let path = unique_temp_dir("check-missing").join("questions.json");
    assert!(run_check(&path).is_err());
}

#[test]
fn test_fmt_rewrites_to_the_canonical_encoding() {
    let messy = r#"{"questions":[{"id":"q1","question":"What is your name?","type":"text","note":""}],"name":"Customer Intake"}"#;
    let path = write_source("fmt-rewrite", messy);

    let outcome = run_fmt(&path, true).unwrap();
    assert!(outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), outcome.canonical);
    assert_eq!(outcome.canonical, CANONICAL);

    // A second run settles.
    let outcome = run_fmt(&path, true).unwrap();
    assert!(!outcome.changed);
}

#[test]
fn test_fmt_check_mode_leaves_the_file_alone() {
    let messy = r#"{"questions": [], "name": "Customer Intake"}"#;
    let path = write_source("fmt-check-mode", messy);

    let outcome = run_fmt(&path, false).unwrap();
    assert!(outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), messy);
}

#[test]
fn test_fmt_fills_in_normalization_defaults() {
    let sparse = r#"{"name": "Customer Intake", "questions": [{"id": "", "question": "", "type": "options"}]}"#;
    let path = write_source("fmt-normalize", sparse);

    let outcome = run_fmt(&path, true).unwrap();
    let set = parse(&outcome.canonical).set.expect("canonical text parses");
    assert_eq!(set.questions[0].id, "q1");
    assert_eq!(set.questions[0].question, "Untitled question");
    assert_eq!(set.questions[0].options, Some(vec!["Option 1".to_string()]));
}

#[test]
fn test_fmt_refuses_blocked_sources() {
    let path = write_source("fmt-blocked", "[1, 2, 3]");

    let error = run_fmt(&path, true).unwrap_err();
    assert!(error.to_string().contains("cannot format"));
    // The file is untouched.
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
}

#[test]
fn test_show_derives_the_set() {
    let path = write_source("show-clean", CANONICAL);

    let report = run_show(&path).unwrap();
    assert_eq!(report.set.name, "Customer Intake");
    assert_eq!(report.issue, None);
}

#[test]
fn test_show_surfaces_advisory_problems() {
    let path = write_source("show-advisory", r#"{"name": "Customer Intake", "questions": []}"#);

    let report = run_show(&path).unwrap();
    assert!(report.set.questions.is_empty());
    assert!(report.issue.is_some());
}

#[test]
fn test_show_refuses_blocked_sources() {
    let path = write_source("show-blocked", "not json at all");

    let error = run_show(&path).unwrap_err();
    assert!(error.to_string().contains("cannot preview"));
}
