//! Trigger events and subscription kinds.

use std::fmt;

use semifix_types::DocumentUri;

/// The two event streams a session can subscribe to.
///
/// The explicit fix command is not listed here: it is always available and
/// never subscribed to or torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// Diagnostics for some documents were republished
    DiagnosticsChanged,
    /// A document is about to be saved
    WillSave,
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiagnosticsChanged => write!(f, "diagnostics-changed"),
            Self::WillSave => write!(f, "will-save"),
        }
    }
}

/// One occasion on which the session considers proposing fixes.
///
/// Events carry only what the editor pushed; everything else is read from
/// the [`EditorHost`](crate::EditorHost) when the event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// The editor republished diagnostics for these documents
    DiagnosticsChanged {
        /// Documents whose diagnostics changed
        uris: Vec<DocumentUri>,
    },
    /// This document is about to be written to disk
    WillSave {
        /// The saving document
        uri: DocumentUri,
    },
    /// The user invoked the fix command on the active document
    FixRequested,
}

impl fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiagnosticsChanged { .. } => write!(f, "diagnostics-changed"),
            Self::WillSave { .. } => write!(f, "will-save"),
            Self::FixRequested => write!(f, "fix-requested"),
        }
    }
}
