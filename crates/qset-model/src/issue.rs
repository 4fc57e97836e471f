//! Parse and validation issue types.
//!
//! Each variant carries only the data its message needs. The
//! decode/structure/advisory split decides whether the structural
//! preview may keep rendering while the issue is shown.

use thiserror::Error;

/// How the editor reacts to an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueClass {
    /// Text is not well-formed serialized data.
    Decode,
    /// Decoded value does not match the required shape.
    Structure,
    /// Soft business rule failed; the derived set is still usable.
    Advisory,
}

impl IssueClass {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Decode => "Decode",
            Self::Structure => "Structure",
            Self::Advisory => "Advisory",
        }
    }
}

/// A single problem found while deriving a question set from raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaIssue {
    /// The decoder rejected the text outright.
    #[error("{message}")]
    Decode { message: String },

    /// Top-level value is not an object carrying a `questions` array.
    #[error("Schema must be an object with a 'questions' array")]
    QuestionsNotArray,

    /// Top-level `name` is missing or not a string.
    #[error("Schema must include a 'name' string")]
    NameNotString,

    /// A questions entry does not match the required shape.
    #[error("Invalid question object at index {index}. Expected {{ id, question, type, note? }}")]
    MalformedQuestion { index: usize },

    /// Display name shorter than the minimum.
    #[error("\"name\" must be at least 3 characters")]
    NameTooShort,

    /// The set has no questions yet.
    #[error("Schema must have at least 1 question")]
    NoQuestions,
}

impl SchemaIssue {
    /// Class for this issue.
    pub fn class(&self) -> IssueClass {
        match self {
            SchemaIssue::Decode { .. } => IssueClass::Decode,
            SchemaIssue::QuestionsNotArray => IssueClass::Structure,
            SchemaIssue::NameNotString => IssueClass::Structure,
            SchemaIssue::MalformedQuestion { .. } => IssueClass::Structure,
            SchemaIssue::NameTooShort => IssueClass::Advisory,
            SchemaIssue::NoQuestions => IssueClass::Advisory,
        }
    }

    /// True when the structural preview must keep its last good state
    /// instead of reflecting the parse that produced this issue.
    pub fn blocks_preview(&self) -> bool {
        self.class() != IssueClass::Advisory
    }

    /// Single-line message shown beneath the raw-text field.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
