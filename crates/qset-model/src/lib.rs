//! Question set data model.
//!
//! The raw JSON source text is authoritative; this crate derives the
//! structured [`QuestionSet`] from it ([`parse`]), reports problems as
//! [`SchemaIssue`] values, and encodes edited sets back to canonical
//! text ([`serialize`]).

pub mod issue;
pub mod parse;
pub mod question;

pub use issue::{IssueClass, SchemaIssue};
pub use parse::{Parsed, parse, serialize};
pub use question::{
    DEFAULT_KIND, PLACEHOLDER_OPTION, Question, QuestionKind, QuestionSet, UNTITLED_PROMPT,
    positional_id,
};
