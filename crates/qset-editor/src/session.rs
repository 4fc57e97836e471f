//! Editor session: wires the sync cache and the edit panel to a host
//! form through narrow sink traits.
//!
//! The host owns the actual form widgets. The session tells it what to
//! display through [`FieldErrorSink`] and [`ValueSink`], and hears about
//! text edits through [`EditorSession::source_changed`]. Text written by
//! the session itself is replayed through the same path, where it parses
//! back to the cached set and settles as
//! [`SyncOutcome::Unchanged`](crate::sync::SyncOutcome::Unchanged).

use tracing::debug;

use qset_model::{QuestionSet, SchemaIssue};

use crate::panel::{PanelState, QuestionDraft};
use crate::sync::{MoveDirection, SourceSync, SyncOutcome};

/// Form field holding the raw question set text.
pub const SOURCE_FIELD: &str = "questions";

/// Receiver for validation problems on a named form field.
pub trait FieldErrorSink {
    /// Show `message` as the error for `field`.
    fn set_error(&mut self, field: &str, message: &str);

    /// Remove whatever error is shown for `field`.
    fn clear_error(&mut self, field: &str);
}

/// Receiver for programmatic writes to a named form field.
pub trait ValueSink {
    /// Replace the value of `field` with `value`.
    fn value_changed(&mut self, field: &str, value: &str);
}

/// One editing session over a question set form.
///
/// `reported` remembers the issue message currently shown on the form,
/// so each distinct problem is reported once and cleared once instead
/// of on every keystroke.
pub struct EditorSession<E, V> {
    sync: SourceSync,
    panel: PanelState,
    errors: E,
    values: V,
    reported: Option<String>,
}

impl<E: FieldErrorSink, V: ValueSink> EditorSession<E, V> {
    pub fn new(errors: E, values: V) -> Self {
        Self {
            sync: SourceSync::new(),
            panel: PanelState::default(),
            errors,
            values,
            reported: None,
        }
    }

    /// Handle a new revision of the raw text, whether typed by the
    /// operator or written by a structural edit.
    pub fn source_changed(&mut self, raw: &str) -> SyncOutcome {
        let outcome = self.sync.absorb(raw);
        match self.sync.issue().map(SchemaIssue::message) {
            Some(message) => {
                if self.reported.as_deref() != Some(message.as_str()) {
                    self.errors.set_error(SOURCE_FIELD, &message);
                    self.reported = Some(message);
                }
            }
            None => {
                if self.reported.take().is_some() {
                    self.errors.clear_error(SOURCE_FIELD);
                }
            }
        }
        outcome
    }

    /// Rename the set.
    pub fn rename(&mut self, name: &str) {
        let raw = self.sync.set_name(name);
        self.emit(&raw);
    }

    /// Remove the question at `index`. Ignored when the index no longer
    /// exists.
    pub fn remove_question(&mut self, index: usize) {
        if let Some(raw) = self.sync.remove_question(index) {
            self.emit(&raw);
        }
    }

    /// Move the question at `index` one slot up or down. Boundary moves
    /// are ignored.
    pub fn move_question(&mut self, index: usize, direction: MoveDirection) {
        if let Some(raw) = self.sync.move_question(index, direction) {
            self.emit(&raw);
        }
    }

    /// Open the add panel.
    pub fn open_add(&mut self) {
        self.panel.open_add();
    }

    /// Open the edit panel for the question currently at `index`.
    pub fn open_edit(&mut self, index: usize) {
        self.panel.open_edit(index, self.sync.current());
    }

    /// Close the panel, dropping its draft.
    pub fn cancel_panel(&mut self) {
        self.panel.close();
    }

    /// Commit the open panel's draft and close it.
    ///
    /// An edit whose captured index has since disappeared (the question
    /// was removed through the text while the panel was open) closes
    /// without writing anything.
    pub fn save_panel(&mut self) {
        let raw = match &self.panel {
            PanelState::Closed => None,
            PanelState::Adding { draft } => Some(self.sync.add_question(draft)),
            PanelState::Editing { index, draft } => self.sync.edit_question(*index, draft),
        };
        self.panel.close();
        if let Some(raw) = raw {
            self.emit(&raw);
        }
    }

    /// Derived set backing the structural view.
    pub fn question_set(&self) -> &QuestionSet {
        self.sync.current()
    }

    /// Issue raised by the latest revision, if any.
    pub fn issue(&self) -> Option<&SchemaIssue> {
        self.sync.issue()
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Mutable draft behind the open panel, for field-level edits.
    pub fn draft_mut(&mut self) -> Option<&mut QuestionDraft> {
        self.panel.draft_mut()
    }

    pub fn errors(&self) -> &E {
        &self.errors
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    /// Push canonical text to the host form, then run it through the
    /// normal change path so the cache and error reporting follow.
    fn emit(&mut self, raw: &str) {
        debug!(bytes = raw.len(), "writing canonical text to the form");
        self.values.value_changed(SOURCE_FIELD, raw);
        self.source_changed(raw);
    }
}
