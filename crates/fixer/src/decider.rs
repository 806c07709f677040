//! The fix decision pipeline.
//!
//! [`decide`] is the whole point of this workspace: one pure pass over a
//! document snapshot that either proposes terminator insertions or backs
//! off. Every refusal is silent by design; the caller re-evaluates on the
//! next diagnostics update or save.

use crate::signatures::SignatureSet;
use crate::text;
use semifix_types::{Diagnostic, FixEdit};

/// Everything one evaluation pass looks at.
///
/// The snapshot is borrowed wholesale from the host; the decider mutates
/// nothing.
#[derive(Debug, Clone, Copy)]
pub struct DecisionInput<'a> {
    /// Current document text
    pub text: &'a str,
    /// Language id of the document (selects applicable signatures)
    pub language_id: &'a str,
    /// Diagnostics reported for the document, in report order
    pub diagnostics: &'a [Diagnostic],
    /// Line the cursor is on, if the host knows it
    pub cursor_line: Option<u32>,
    /// Whether to skip insertions near the cursor (live trigger only)
    pub avoid_cursor: bool,
}

/// Decide which terminator insertions are safe for this snapshot.
///
/// The pipeline, in order:
/// 1. keep error-severity diagnostics whose source is tracked for the
///    document's language; nothing tracked means nothing to do;
/// 2. classify every one of them against the signature table -- a single
///    unclassified error aborts the pass with zero edits, because other
///    syntax errors mean the file is too broken to auto-patch;
/// 3. place each insertion at the diagnostic's range end, dropping it when
///    the terminator is already adjacent (stale snapshot), when the
///    position no longer maps into the text, or when the cursor guard is
///    on and the cursor sits on the insert line or the line below it.
///
/// Surviving insertions come back in diagnostic order, ready to be applied
/// as one batch.
#[must_use]
#[tracing::instrument(skip_all, fields(language = input.language_id, diagnostics = input.diagnostics.len()))]
pub fn decide(signatures: &SignatureSet, input: &DecisionInput<'_>) -> Vec<FixEdit> {
    let errors: Vec<&Diagnostic> = input
        .diagnostics
        .iter()
        .filter(|d| d.is_error() && signatures.is_tracked_source(input.language_id, d))
        .collect();

    if errors.is_empty() {
        tracing::trace!("No tracked errors in this snapshot");
        return Vec::new();
    }

    let mut classified = Vec::with_capacity(errors.len());
    for diagnostic in errors {
        let Some(signature) = signatures.classify(input.language_id, diagnostic) else {
            tracing::debug!(
                message = %diagnostic.message,
                "Unclassified error from a tracked source, withholding all fixes"
            );
            return Vec::new();
        };
        classified.push((diagnostic, signature));
    }

    let mut edits = Vec::new();
    for (diagnostic, signature) in classified {
        let position = diagnostic.range.end;

        let Some(offset) = text::byte_offset(input.text, position) else {
            tracing::debug!(
                line = position.line,
                character = position.character,
                "Insert position no longer maps into the document, skipping"
            );
            continue;
        };

        if text::char_before(input.text, offset) == Some(signature.terminator)
            || text::char_after(input.text, offset) == Some(signature.terminator)
        {
            tracing::debug!(
                line = position.line,
                character = position.character,
                "Terminator already present, skipping"
            );
            continue;
        }

        if input.avoid_cursor && cursor_blocks_line(input.cursor_line, position.line) {
            tracing::debug!(line = position.line, "Cursor too close, skipping");
            continue;
        }

        edits.push(FixEdit::insert(position, signature.terminator.to_string()));
    }

    tracing::debug!(edits = edits.len(), "Decision complete");
    edits
}

/// The cursor blocks an insert line when it sits on that line or the one
/// right below it -- multi-line fluent chains put the terminator a line
/// above where the user is typing.
fn cursor_blocks_line(cursor_line: Option<u32>, insert_line: u32) -> bool {
    cursor_line.is_some_and(|line| line == insert_line || line == insert_line + 1)
}
