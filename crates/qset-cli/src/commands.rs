use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use qset_model::{Parsed, QuestionSet, SchemaIssue, parse, serialize};

/// Outcome of checking one source file.
#[derive(Debug)]
pub struct CheckReport {
    /// Derived set, absent when the issue blocks the preview.
    pub set: Option<QuestionSet>,
    /// Problem found, if any.
    pub issue: Option<SchemaIssue>,
}

impl CheckReport {
    /// Whether the check should fail the run. Advisory problems only
    /// fail under `strict`.
    pub fn failed(&self, strict: bool) -> bool {
        match &self.issue {
            Some(issue) => strict || issue.blocks_preview(),
            None => false,
        }
    }
}

/// Outcome of canonicalizing one source file.
#[derive(Debug)]
pub struct FmtOutcome {
    /// Canonical on-disk encoding of the derived set.
    pub canonical: String,
    /// Whether the file content differed from the canonical encoding.
    pub changed: bool,
}

/// Data behind the table preview of one source file.
#[derive(Debug)]
pub struct ShowReport {
    /// Derived set to render.
    pub set: QuestionSet,
    /// Advisory problem to surface alongside the preview, if any.
    pub issue: Option<SchemaIssue>,
}

/// Check a source file against the expected schema.
pub fn run_check(path: &Path) -> Result<CheckReport> {
    let span = info_span!("check", file = %path.display());
    let _guard = span.enter();

    let raw = read_source(path)?;
    let Parsed { set, issue } = parse(&raw);
    info!(
        questions = set.as_ref().map_or(0, |set| set.questions.len()),
        clean = issue.is_none(),
        "check complete"
    );
    Ok(CheckReport { set, issue })
}

/// Rewrite a source file to the canonical encoding, or with `write`
/// false just report whether it would change.
///
/// Formatting goes through the derived set, so it also normalizes:
/// defaults are filled in and options lists seeded. Sources that fail
/// a structural check cannot be formatted and error out.
pub fn run_fmt(path: &Path, write: bool) -> Result<FmtOutcome> {
    let span = info_span!("fmt", file = %path.display());
    let _guard = span.enter();

    let raw = read_source(path)?;
    let Parsed { set, issue } = parse(&raw);
    let Some(set) = set else {
        let reason = issue.as_ref().map(SchemaIssue::message).unwrap_or_default();
        bail!("cannot format {}: {reason}", path.display());
    };

    let canonical = canonical_file_text(&set);
    let changed = raw != canonical;
    if write && changed {
        fs::write(path, &canonical).with_context(|| format!("write {}", path.display()))?;
        info!("rewrote file");
    } else {
        debug!(changed, "file left alone");
    }
    Ok(FmtOutcome { canonical, changed })
}

/// Derive the set from a source file for the table preview.
///
/// Advisory problems ride along in the report; structural problems
/// error out since there is nothing to render.
pub fn run_show(path: &Path) -> Result<ShowReport> {
    let span = info_span!("show", file = %path.display());
    let _guard = span.enter();

    let raw = read_source(path)?;
    let Parsed { set, issue } = parse(&raw);
    let Some(set) = set else {
        let reason = issue.as_ref().map(SchemaIssue::message).unwrap_or_default();
        bail!("cannot preview {}: {reason}", path.display());
    };
    debug!(questions = set.questions.len(), "derived set for preview");
    Ok(ShowReport { set, issue })
}

/// Canonical on-disk form: the canonical encoding plus a trailing newline.
fn canonical_file_text(set: &QuestionSet) -> String {
    let mut text = serialize(set);
    text.push('\n');
    text
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
