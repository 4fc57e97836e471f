//! Integration tests for deriving question sets from raw source text.
//!
//! Covers the structural checks (which block the preview), the advisory
//! checks (which do not), and the normalization defaults.

use qset_model::{IssueClass, QuestionSet, SchemaIssue, parse};

/// Helper for sources that must parse without any issue.
fn derive(raw: &str) -> QuestionSet {
    let parsed = parse(raw);
    assert_eq!(parsed.issue, None, "expected a clean parse, got an issue");
    parsed.set.expect("clean parse carries a set")
}

#[test]
fn test_empty_source_is_the_empty_set() {
    let set = derive("");
    assert_eq!(set, QuestionSet::default());
    assert_eq!(set.name, "");
    assert!(set.questions.is_empty());

    // Whitespace-only text counts as untouched too.
    assert_eq!(derive("  \n\t "), QuestionSet::default());
}

#[test]
fn test_unparseable_text_is_a_decode_issue() {
    let parsed = parse("{ not json");
    assert_eq!(parsed.set, None);
    let issue = parsed.issue.expect("decode issue");
    assert_eq!(issue.class(), IssueClass::Decode);
    assert!(issue.blocks_preview());
}

#[test]
fn test_non_object_root_is_structural() {
    for raw in ["[]", "\"hello\"", "42", "null", "true"] {
        let parsed = parse(raw);
        assert_eq!(parsed.set, None, "root {raw} should block the preview");
        assert_eq!(parsed.issue, Some(SchemaIssue::QuestionsNotArray));
    }
}

#[test]
fn test_missing_or_non_array_questions_is_structural() {
    let parsed = parse(r#"{"name": "Intake"}"#);
    assert_eq!(parsed.issue, Some(SchemaIssue::QuestionsNotArray));
    assert_eq!(parsed.set, None);

    let parsed = parse(r#"{"name": "Intake", "questions": {}}"#);
    assert_eq!(parsed.issue, Some(SchemaIssue::QuestionsNotArray));

    assert_eq!(
        parsed.issue.unwrap().message(),
        "Schema must be an object with a 'questions' array"
    );
}

#[test]
fn test_missing_or_non_string_name_is_structural() {
    let parsed = parse(r#"{"questions": []}"#);
    assert_eq!(parsed.issue, Some(SchemaIssue::NameNotString));
    assert_eq!(parsed.set, None);

    let parsed = parse(r#"{"name": 7, "questions": []}"#);
    assert_eq!(parsed.issue, Some(SchemaIssue::NameNotString));
    assert_eq!(
        parsed.issue.unwrap().message(),
        "Schema must include a 'name' string"
    );
}

#[test]
fn test_questions_checked_after_the_array_and_name() {
    // The name check runs before any per-question shape check.
    let parsed = parse(r#"{"questions": [null]}"#);
    assert_eq!(parsed.issue, Some(SchemaIssue::NameNotString));
}

#[test]
fn test_malformed_question_reports_its_index() {
    let raw = r#"{
        "name": "Intake",
        "questions": [
            {"id": "q1", "question": "Name?", "type": "text"},
            "not an object"
        ]
    }"#;
    let parsed = parse(raw);
    assert_eq!(parsed.set, None);
    assert_eq!(parsed.issue, Some(SchemaIssue::MalformedQuestion { index: 1 }));
    assert_eq!(
        parsed.issue.unwrap().message(),
        "Invalid question object at index 1. Expected { id, question, type, note? }"
    );
}

#[test]
fn test_question_requires_string_id_question_and_type() {
    let missing_id = r#"{"name": "Intake", "questions": [{"question": "Name?", "type": "text"}]}"#;
    let numeric_prompt = r#"{"name": "Intake", "questions": [{"id": "q1", "question": 5, "type": "text"}]}"#;
    let null_kind =
        r#"{"name": "Intake", "questions": [{"id": "q1", "question": "Name?", "type": null}]}"#;

    for raw in [missing_id, numeric_prompt, null_kind] {
        let parsed = parse(raw);
        assert_eq!(
            parsed.issue,
            Some(SchemaIssue::MalformedQuestion { index: 0 }),
            "source should be malformed: {raw}"
        );
    }
}

#[test]
fn test_note_is_optional_on_the_wire() {
    let raw = r#"{
        "name": "Intake",
        "questions": [
            {"id": "q1", "question": "Name?", "type": "text"},
            {"id": "q2", "question": "Email?", "type": "email", "note": null},
            {"id": "q3", "question": "Age?", "type": "text", "note": "numbers only"}
        ]
    }"#;
    let set = derive(raw);
    assert_eq!(set.questions[0].note, "");
    assert_eq!(set.questions[1].note, "");
    assert_eq!(set.questions[2].note, "numbers only");
}

#[test]
fn test_non_string_note_is_malformed() {
    let raw = r#"{"name": "Intake", "questions": [{"id": "q1", "question": "Name?", "type": "text", "note": 3}]}"#;
    let parsed = parse(raw);
    assert_eq!(parsed.issue, Some(SchemaIssue::MalformedQuestion { index: 0 }));
}

#[test]
fn test_empty_fields_take_their_defaults() {
    let raw = r#"{
        "name": "Intake",
        "questions": [{"id": "", "question": "", "type": ""}]
    }"#;
    let set = derive(raw);
    let question = &set.questions[0];
    assert_eq!(question.id, "q1");
    assert_eq!(question.question, "Untitled question");
    assert_eq!(question.kind, "text");
    assert_eq!(question.options, None);
}

#[test]
fn test_positional_default_id_follows_the_index() {
    let raw = r#"{
        "name": "Intake",
        "questions": [
            {"id": "keep", "question": "Name?", "type": "text"},
            {"id": "", "question": "Email?", "type": "email"}
        ]
    }"#;
    let set = derive(raw);
    assert_eq!(set.questions[0].id, "keep");
    assert_eq!(set.questions[1].id, "q2");
}

#[test]
fn test_options_kind_is_seeded_with_a_placeholder() {
    let absent =
        r#"{"name": "Intake", "questions": [{"id": "q1", "question": "Pick one", "type": "options"}]}"#;
    let set = derive(absent);
    assert_eq!(set.questions[0].options, Some(vec!["Option 1".to_string()]));

    let empty = r#"{"name": "Intake", "questions": [{"id": "q1", "question": "Pick one", "type": "options", "options": []}]}"#;
    let set = derive(empty);
    assert_eq!(set.questions[0].options, Some(vec!["Option 1".to_string()]));
}

#[test]
fn test_source_options_are_kept_for_any_kind() {
    let raw = r#"{
        "name": "Intake",
        "questions": [
            {"id": "q1", "question": "Pick one", "type": "options", "options": ["A", "B"]},
            {"id": "q2", "question": "Name?", "type": "text", "options": ["stray"]}
        ]
    }"#;
    let set = derive(raw);
    assert_eq!(
        set.questions[0].options,
        Some(vec!["A".to_string(), "B".to_string()])
    );
    // A stray list on a non-options kind survives normalization.
    assert_eq!(set.questions[1].options, Some(vec!["stray".to_string()]));
}

#[test]
fn test_non_string_option_entries_keep_their_encoding() {
    let raw = r#"{
        "name": "Intake",
        "questions": [
            {"id": "q1", "question": "Pick one", "type": "options", "options": ["A", 2, true]}
        ]
    }"#;
    let set = derive(raw);
    assert_eq!(
        set.questions[0].options,
        Some(vec!["A".to_string(), "2".to_string(), "true".to_string()])
    );
}

#[test]
fn test_text_kind_without_options_stays_bare() {
    let raw =
        r#"{"name": "Intake", "questions": [{"id": "q1", "question": "Name?", "type": "text"}]}"#;
    let set = derive(raw);
    assert_eq!(set.questions[0].options, None);
}

#[test]
fn test_short_name_is_advisory_and_keeps_the_set() {
    let raw = r#"{"name": "ab", "questions": [{"id": "q1", "question": "Name?", "type": "text"}]}"#;
    let parsed = parse(raw);
    let issue = parsed.issue.expect("advisory issue");
    assert_eq!(issue, SchemaIssue::NameTooShort);
    assert_eq!(issue.class(), IssueClass::Advisory);
    assert!(!issue.blocks_preview());
    assert_eq!(issue.message(), "\"name\" must be at least 3 characters");

    // The set is still derived for the preview.
    let set = parsed.set.expect("advisory parse carries a set");
    assert_eq!(set.name, "ab");
    assert_eq!(set.questions.len(), 1);
}

#[test]
fn test_name_length_counts_characters_not_bytes() {
    let raw = r#"{"name": "héé", "questions": [{"id": "q1", "question": "Name?", "type": "text"}]}"#;
    let set = derive(raw);
    assert_eq!(set.name, "héé");
}

#[test]
fn test_zero_questions_is_advisory() {
    let parsed = parse(r#"{"name": "Intake", "questions": []}"#);
    let issue = parsed.issue.expect("advisory issue");
    assert_eq!(issue, SchemaIssue::NoQuestions);
    assert_eq!(issue.message(), "Schema must have at least 1 question");
    assert_eq!(
        parsed.set,
        Some(QuestionSet {
            name: "Intake".to_string(),
            questions: Vec::new(),
        })
    );
}

#[test]
fn test_name_advisory_wins_over_question_count() {
    let parsed = parse(r#"{"name": "ab", "questions": []}"#);
    assert_eq!(parsed.issue, Some(SchemaIssue::NameTooShort));
}
