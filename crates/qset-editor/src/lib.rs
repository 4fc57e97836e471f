//! Editor state for question sets.
//!
//! The raw JSON text is the single source of truth; everything here is
//! machinery for keeping a derived [`qset_model::QuestionSet`] and an
//! edit panel in step with it. [`EditorSession`] ties the pieces to a
//! host form and is the usual entry point.

pub mod panel;
pub mod session;
pub mod sync;

pub use panel::{PanelState, QuestionDraft};
pub use session::{EditorSession, FieldErrorSink, SOURCE_FIELD, ValueSink};
pub use sync::{MoveDirection, SourceSync, SyncOutcome};
