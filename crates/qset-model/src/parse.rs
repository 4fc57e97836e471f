//! Deriving a question set from raw source text.
//!
//! Parsing never fails fatally: malformed text produces a [`SchemaIssue`]
//! instead of an error, and advisory failures still return the derived
//! set so the structural preview can render it.

use serde_json::{Map, Value};

use crate::issue::SchemaIssue;
use crate::question::{
    DEFAULT_KIND, PLACEHOLDER_OPTION, Question, QuestionKind, QuestionSet, UNTITLED_PROMPT,
    positional_id,
};

/// Minimum name length for the advisory check.
const MIN_NAME_CHARS: usize = 3;

/// Outcome of a parse: the derived set, an issue, or (for advisory
/// failures) both at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Derived set; `None` when the issue blocks the preview.
    pub set: Option<QuestionSet>,
    /// Problem to surface, if any.
    pub issue: Option<SchemaIssue>,
}

impl Parsed {
    fn clean(set: QuestionSet) -> Self {
        Parsed {
            set: Some(set),
            issue: None,
        }
    }

    fn blocked(issue: SchemaIssue) -> Self {
        Parsed {
            set: None,
            issue: Some(issue),
        }
    }

    fn advisory(set: QuestionSet, issue: SchemaIssue) -> Self {
        Parsed {
            set: Some(set),
            issue: Some(issue),
        }
    }
}

/// Derive a question set from raw source text.
///
/// Empty or all-whitespace text is the untouched state: it yields the
/// canonical empty set and no issue. Structural checks run in order and
/// stop at the first failure; advisory checks (name length, question
/// count) run after normalization and never withhold the set.
pub fn parse(raw: &str) -> Parsed {
    if raw.trim().is_empty() {
        return Parsed::clean(QuestionSet::default());
    }
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(error) => {
            return Parsed::blocked(SchemaIssue::Decode {
                message: error.to_string(),
            });
        }
    };
    let Value::Object(object) = value else {
        return Parsed::blocked(SchemaIssue::QuestionsNotArray);
    };
    let Some(Value::Array(entries)) = object.get("questions") else {
        return Parsed::blocked(SchemaIssue::QuestionsNotArray);
    };
    let Some(Value::String(name)) = object.get("name") else {
        return Parsed::blocked(SchemaIssue::NameNotString);
    };

    let mut questions = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match normalize_question(entry, index) {
            Some(question) => questions.push(question),
            None => return Parsed::blocked(SchemaIssue::MalformedQuestion { index }),
        }
    }

    let set = QuestionSet {
        name: name.clone(),
        questions,
    };
    if set.name.chars().count() < MIN_NAME_CHARS {
        return Parsed::advisory(set, SchemaIssue::NameTooShort);
    }
    if set.questions.is_empty() {
        return Parsed::advisory(set, SchemaIssue::NoQuestions);
    }
    Parsed::clean(set)
}

/// Canonical pretty-printed encoding (2-space indent). The only path by
/// which structural edits reach the raw source text.
pub fn serialize(set: &QuestionSet) -> String {
    serde_json::to_string_pretty(set).expect("question set serializes to JSON")
}

/// Check one questions entry against the required shape and fill in its
/// defaults. `None` marks the entry structurally invalid.
fn normalize_question(entry: &Value, index: usize) -> Option<Question> {
    let object = entry.as_object()?;
    let id = required_string(object, "id")?;
    let prompt = required_string(object, "question")?;
    let kind = required_string(object, "type")?;
    // `note` may be absent or null; a present non-string is malformed.
    let note = match object.get("note") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(note)) => note.clone(),
        Some(_) => return None,
    };

    let id = if id.is_empty() { positional_id(index) } else { id };
    let prompt = if prompt.is_empty() {
        UNTITLED_PROMPT.to_string()
    } else {
        prompt
    };
    let kind = if kind.is_empty() {
        DEFAULT_KIND.to_string()
    } else {
        kind
    };

    // A source array is kept as-is (whatever the kind); an absent, empty,
    // or non-array choice list is seeded only for the "options" kind.
    let wants_options = QuestionKind::parse(&kind) == Some(QuestionKind::Options);
    let options = match object.get("options").and_then(Value::as_array) {
        Some(entries) if entries.is_empty() && wants_options => {
            Some(vec![PLACEHOLDER_OPTION.to_string()])
        }
        Some(entries) => Some(entries.iter().map(option_text).collect()),
        None if wants_options => Some(vec![PLACEHOLDER_OPTION.to_string()]),
        None => None,
    };

    Some(Question {
        id,
        question: prompt,
        kind,
        options,
        note,
    })
}

/// Field that must be present and a string.
fn required_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        _ => None,
    }
}

/// Choice entries are strings on the wire; anything else is kept as its
/// literal encoding rather than dropped.
fn option_text(entry: &Value) -> String {
    match entry {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
