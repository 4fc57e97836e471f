//! Edit panel state for adding and editing questions.
//!
//! The panel works on a draft copy of a question. Nothing reaches the
//! source text until the draft is committed; closing the panel simply
//! drops it.

use qset_model::{DEFAULT_KIND, PLACEHOLDER_OPTION, Question, QuestionKind, QuestionSet};

// ============================================================================
// Question Draft
// ============================================================================

/// Working copy of a question's editable fields.
///
/// Option rows are kept verbatim while editing (including blank rows);
/// they are only cleaned up on [`QuestionDraft::commit`].
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    /// Prompt text shown to the end user
    pub question: String,
    /// Answer kind (free vocabulary; "options" unlocks the choice list)
    pub kind: String,
    /// Operator-facing note
    pub note: String,
    /// Choice rows being edited
    pub options: Vec<String>,
}

impl QuestionDraft {
    /// Fresh template for the add panel.
    pub fn blank() -> Self {
        Self {
            question: String::new(),
            kind: DEFAULT_KIND.to_string(),
            note: String::new(),
            options: vec![PLACEHOLDER_OPTION.to_string()],
        }
    }

    /// Draft seeded from an existing question for the edit panel.
    pub fn from_question(question: &Question) -> Self {
        Self {
            question: question.question.clone(),
            kind: question.kind.clone(),
            note: question.note.clone(),
            options: question
                .options
                .clone()
                .unwrap_or_else(|| vec![PLACEHOLDER_OPTION.to_string()]),
        }
    }

    /// Append an empty choice row.
    pub fn add_option_row(&mut self) {
        self.options.push(String::new());
    }

    /// Replace the text of one choice row. Rows that no longer exist
    /// are ignored.
    pub fn update_option_row(&mut self, index: usize, text: &str) {
        if let Some(row) = self.options.get_mut(index) {
            *row = text.to_string();
        }
    }

    /// Delete one choice row. Rows that no longer exist are ignored.
    pub fn remove_option_row(&mut self, index: usize) {
        if index < self.options.len() {
            self.options.remove(index);
        }
    }

    /// Turn the draft into a question under the given id.
    ///
    /// Choice rows are trimmed and blank rows dropped, and the list is
    /// kept only for the "options" kind. An options question whose rows
    /// are all blank ends up with no list at all; deriving the set later
    /// re-seeds the placeholder.
    pub fn commit(&self, id: String) -> Question {
        let options = if QuestionKind::parse(&self.kind) == Some(QuestionKind::Options) {
            let rows: Vec<String> = self
                .options
                .iter()
                .map(|row| row.trim())
                .filter(|row| !row.is_empty())
                .map(str::to_string)
                .collect();
            (!rows.is_empty()).then_some(rows)
        } else {
            None
        };
        Question {
            id,
            question: self.question.clone(),
            kind: self.kind.clone(),
            options,
            note: self.note.clone(),
        }
    }
}

// ============================================================================
// Panel State
// ============================================================================

/// Single source of truth for the edit panel.
///
/// Each variant carries exactly the data that mode needs. Opening a
/// panel replaces whatever was showing before; the last request wins.
#[derive(Debug, Clone, Default)]
pub enum PanelState {
    /// No panel showing.
    #[default]
    Closed,
    /// Composing a brand-new question.
    Adding {
        /// Draft under edit.
        draft: QuestionDraft,
    },
    /// Editing the question at a list position captured at open time.
    Editing {
        /// Position in the derived set when the panel opened.
        index: usize,
        /// Draft under edit.
        draft: QuestionDraft,
    },
}

impl PanelState {
    /// Check if a panel is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Discard any draft and close.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Open the add panel with a fresh template.
    pub fn open_add(&mut self) {
        *self = Self::Adding {
            draft: QuestionDraft::blank(),
        };
    }

    /// Open the edit panel seeded from the question at `index`.
    /// Ignored when the index does not exist in the given set.
    pub fn open_edit(&mut self, index: usize, set: &QuestionSet) {
        if let Some(question) = set.questions.get(index) {
            *self = Self::Editing {
                index,
                draft: QuestionDraft::from_question(question),
            };
        }
    }

    /// Draft behind the open panel, if any.
    pub fn draft(&self) -> Option<&QuestionDraft> {
        match self {
            Self::Closed => None,
            Self::Adding { draft } | Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Mutable draft behind the open panel, if any.
    pub fn draft_mut(&mut self) -> Option<&mut QuestionDraft> {
        match self {
            Self::Closed => None,
            Self::Adding { draft } | Self::Editing { draft, .. } => Some(draft),
        }
    }
}
