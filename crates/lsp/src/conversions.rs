//! Type conversions between LSP types and the semifix model.
//!
//! These conversions are stateless and lossless for every field the
//! decider reads. Fields the model does not carry (codes, tags, related
//! information) are dropped on the way in; the way out only ever produces
//! insertions, so nothing is lost there either.
//!
//! ## Extension Traits
//!
//! For method-style conversion, use the extension traits:
//!
//! ```rust,ignore
//! use semifix_lsp::{IntoLsp, IntoSemifix};
//!
//! let position = lsp_position.into_semifix();
//! let text_edit = fix_edit.into_lsp();
//! ```

use std::collections::HashMap;

use lsp_types::{DiagnosticSeverity, TextEdit, Uri, WorkspaceEdit};
use semifix_types::{Diagnostic, FixBatch, FixEdit, Position, Range, Severity};

/// A conversion out of the semifix model failed.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The batch's document URI does not parse as an LSP URI.
    #[error("document URI `{uri}` is not a valid LSP URI: {reason}")]
    InvalidUri {
        /// The offending URI string
        uri: String,
        /// Parser's explanation
        reason: String,
    },
}

// =============================================================================
// Extension Traits
// =============================================================================

/// Extension trait for converting semifix types to LSP types.
pub trait IntoLsp {
    /// The LSP type this converts to
    type Output;
    /// Convert to the corresponding LSP type
    fn into_lsp(self) -> Self::Output;
}

/// Extension trait for converting LSP types to semifix types.
pub trait IntoSemifix {
    /// The semifix type this converts to
    type Output;
    /// Convert to the corresponding semifix type
    fn into_semifix(self) -> Self::Output;
}

impl IntoLsp for Position {
    type Output = lsp_types::Position;
    fn into_lsp(self) -> lsp_types::Position {
        convert_position(self)
    }
}

impl IntoSemifix for lsp_types::Position {
    type Output = Position;
    fn into_semifix(self) -> Position {
        convert_lsp_position(self)
    }
}

impl IntoLsp for Range {
    type Output = lsp_types::Range;
    fn into_lsp(self) -> lsp_types::Range {
        convert_range(self)
    }
}

impl IntoSemifix for lsp_types::Range {
    type Output = Range;
    fn into_semifix(self) -> Range {
        convert_lsp_range(self)
    }
}

impl IntoSemifix for lsp_types::Diagnostic {
    type Output = Diagnostic;
    fn into_semifix(self) -> Diagnostic {
        convert_lsp_diagnostic(self)
    }
}

impl IntoLsp for &FixEdit {
    type Output = TextEdit;
    fn into_lsp(self) -> TextEdit {
        convert_edit(self)
    }
}

// =============================================================================
// Standalone Conversion Functions
// =============================================================================

/// Convert an LSP Position to a semifix Position.
#[must_use]
pub const fn convert_lsp_position(pos: lsp_types::Position) -> Position {
    Position::new(pos.line, pos.character)
}

/// Convert a semifix Position to an LSP Position.
#[must_use]
pub const fn convert_position(pos: Position) -> lsp_types::Position {
    lsp_types::Position {
        line: pos.line,
        character: pos.character,
    }
}

/// Convert an LSP Range to a semifix Range.
#[must_use]
pub const fn convert_lsp_range(range: lsp_types::Range) -> Range {
    Range::new(
        convert_lsp_position(range.start),
        convert_lsp_position(range.end),
    )
}

/// Convert a semifix Range to an LSP Range.
#[must_use]
pub const fn convert_range(range: Range) -> lsp_types::Range {
    lsp_types::Range {
        start: convert_position(range.start),
        end: convert_position(range.end),
    }
}

/// Convert LSP's optional severity to a semifix Severity.
///
/// LSP allows the severity to be absent; diagnostics without one read as
/// informational so they can never pass the decider's error filter.
/// Unknown numeric values get the same treatment.
#[must_use]
pub fn convert_lsp_severity(severity: Option<DiagnosticSeverity>) -> Severity {
    match severity {
        Some(DiagnosticSeverity::ERROR) => Severity::Error,
        Some(DiagnosticSeverity::WARNING) => Severity::Warning,
        Some(DiagnosticSeverity::HINT) => Severity::Hint,
        _ => Severity::Information,
    }
}

/// Convert an LSP Diagnostic to a semifix Diagnostic.
///
/// Keeps range, severity, source, and message; everything else is dropped.
#[must_use]
pub fn convert_lsp_diagnostic(diag: lsp_types::Diagnostic) -> Diagnostic {
    Diagnostic::new(
        convert_lsp_severity(diag.severity),
        convert_lsp_range(diag.range),
        diag.source,
        diag.message,
    )
}

/// Convert a semifix insertion to an LSP `TextEdit`.
///
/// Insertions become zero-width edits: the range starts and ends at the
/// insert position.
#[must_use]
pub fn convert_edit(edit: &FixEdit) -> TextEdit {
    let position = convert_position(edit.position);
    TextEdit {
        range: lsp_types::Range {
            start: position,
            end: position,
        },
        new_text: edit.new_text.clone(),
    }
}

/// Convert a batch to an LSP `WorkspaceEdit` targeting one document.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidUri`] when the batch's document URI does
/// not parse as an LSP URI. Batches built from LSP notifications always
/// round-trip; hand-built URIs may not.
pub fn batch_to_workspace_edit(batch: &FixBatch) -> Result<WorkspaceEdit, ConvertError> {
    let uri = batch
        .uri
        .as_str()
        .parse::<Uri>()
        .map_err(|e| ConvertError::InvalidUri {
            uri: batch.uri.to_string(),
            reason: e.to_string(),
        })?;
    let edits: Vec<TextEdit> = batch.edits.iter().map(convert_edit).collect();

    let mut changes = HashMap::new();
    changes.insert(uri, edits);
    Ok(WorkspaceEdit {
        changes: Some(changes),
        ..Default::default()
    })
}
