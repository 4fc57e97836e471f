//! Synchronization between the raw source text and the derived set.
//!
//! The raw text owns the truth. [`SourceSync`] caches the last good
//! derived set and re-derives it on every revision; structural edits
//! never touch the cache directly. Each edit returns the canonical text
//! of the edited set, which is fed back through [`SourceSync::absorb`]
//! like any hand-typed revision.

use tracing::{debug, warn};

use qset_model::{Parsed, QuestionSet, SchemaIssue, parse, positional_id, serialize};

use crate::panel::QuestionDraft;

/// Direction for reordering a question within the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// What absorbing a revision of the source text did to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The derived set changed.
    Updated,
    /// The revision derives a set equal to the cached one.
    Unchanged,
    /// The revision is blocked; the last good set is kept.
    Rejected,
}

/// Cache of the last good derived set, plus the issue (if any) raised
/// by the most recent revision of the source text.
#[derive(Debug, Clone, Default)]
pub struct SourceSync {
    set: QuestionSet,
    issue: Option<SchemaIssue>,
}

impl SourceSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last good derived set.
    pub fn current(&self) -> &QuestionSet {
        &self.set
    }

    /// Issue raised by the most recent revision, if any.
    pub fn issue(&self) -> Option<&SchemaIssue> {
        self.issue.as_ref()
    }

    /// Re-derive the set from a new revision of the source text.
    ///
    /// A blocked revision keeps the previous set so the structural view
    /// stays usable while the text is mid-edit. A revision equal to the
    /// cache reports [`SyncOutcome::Unchanged`], which is what stops
    /// text written by a structural edit from cycling forever.
    pub fn absorb(&mut self, raw: &str) -> SyncOutcome {
        let Parsed { set, issue } = parse(raw);
        self.issue = issue;
        let Some(set) = set else {
            if let Some(issue) = &self.issue {
                warn!(issue = %issue, "source text blocked, keeping last good set");
            }
            return SyncOutcome::Rejected;
        };
        if set == self.set {
            return SyncOutcome::Unchanged;
        }
        debug!(questions = set.questions.len(), "derived set replaced");
        self.set = set;
        SyncOutcome::Updated
    }

    /// Canonical text with the set renamed. Question ids are left alone.
    pub fn set_name(&self, name: &str) -> String {
        let mut set = self.set.clone();
        set.name = name.to_string();
        serialize(&set)
    }

    /// Canonical text with the committed draft appended and the whole
    /// list renumbered so ids stay positional.
    pub fn add_question(&self, draft: &QuestionDraft) -> String {
        let mut set = self.set.clone();
        let question = draft.commit(positional_id(set.questions.len()));
        set.questions.push(question);
        set.renumber();
        serialize(&set)
    }

    /// Canonical text with the question at `index` replaced by the
    /// committed draft. The slot keeps its id, so no renumbering.
    /// `None` when the index no longer exists.
    pub fn edit_question(&self, index: usize, draft: &QuestionDraft) -> Option<String> {
        let id = self.set.questions.get(index)?.id.clone();
        let mut set = self.set.clone();
        set.questions[index] = draft.commit(id);
        Some(serialize(&set))
    }

    /// Canonical text with the question at `index` removed and the rest
    /// renumbered. `None` when the index no longer exists.
    pub fn remove_question(&self, index: usize) -> Option<String> {
        if index >= self.set.questions.len() {
            return None;
        }
        let mut set = self.set.clone();
        set.questions.remove(index);
        set.renumber();
        Some(serialize(&set))
    }

    /// Canonical text with the question at `index` swapped one slot up
    /// or down. Boundary moves return `None` rather than clamping.
    pub fn move_question(&self, index: usize, direction: MoveDirection) -> Option<String> {
        let last = self.set.questions.len().checked_sub(1)?;
        let target = match direction {
            MoveDirection::Up if index > 0 && index <= last => index - 1,
            MoveDirection::Down if index < last => index + 1,
            _ => return None,
        };
        let mut set = self.set.clone();
        set.questions.swap(index, target);
        set.renumber();
        Some(serialize(&set))
    }
}
