use serde::{Deserialize, Serialize};
use std::fmt;

/// Prompt text substituted when a question's prompt is missing or blank.
pub const UNTITLED_PROMPT: &str = "Untitled question";

/// Seed entry for a choice list that would otherwise be empty.
pub const PLACEHOLDER_OPTION: &str = "Option 1";

/// Answer kind assigned when a question omits its `type`.
pub const DEFAULT_KIND: &str = "text";

/// Positional id for the question at `index` (`q1`, `q2`, ...).
pub fn positional_id(index: usize) -> String {
    format!("q{}", index + 1)
}

/// Known answer kinds. Storage stays a free-form string; this enum only
/// classifies the kinds the editor treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// Free-text answer.
    Text,
    /// Email address answer.
    Email,
    /// One choice from a fixed list.
    Options,
}

impl QuestionKind {
    /// Classify a stored kind string. Unknown kinds return `None`;
    /// matching is exact since the wire vocabulary is lowercase.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(QuestionKind::Text),
            "email" => Some(QuestionKind::Email),
            "options" => Some(QuestionKind::Options),
            _ => None,
        }
    }

    /// The canonical kind string as stored on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Email => "email",
            QuestionKind::Options => "options",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in a question set.
///
/// Field order matches the wire layout: id, question, type, options, note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// Prompt text shown to the end user.
    pub question: String,
    /// Answer kind ("text", "email", "options"), kept free-form.
    #[serde(rename = "type")]
    pub kind: String,
    /// Choice list; present only for multiple-choice questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Operator note. Absent on the wire means empty.
    #[serde(default)]
    pub note: String,
}

impl Question {
    /// True when this question presents a multiple-choice list.
    pub fn is_options(&self) -> bool {
        QuestionKind::parse(&self.kind) == Some(QuestionKind::Options)
    }
}

/// An ordered question set plus its display name.
///
/// Question order is semantic (it is the order presented to the end user)
/// and survives serialization round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub name: String,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// Reassign sequential ids (`q1`, `q2`, ...) from current positions.
    pub fn renumber(&mut self) {
        for (index, question) in self.questions.iter_mut().enumerate() {
            question.id = positional_id(index);
        }
    }
}
