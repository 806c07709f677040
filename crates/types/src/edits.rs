//! Edit types produced by the decider.

use crate::{DocumentUri, Position};

/// A single point insertion to apply to a document.
///
/// The decider only ever inserts; it never replaces or deletes text. The
/// position uses editor coordinates and the host (or [`FixBatch`] consumer)
/// is responsible for turning it into whatever its edit API wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixEdit {
    /// Where to insert
    pub position: Position,
    /// The text to insert (a single terminator character in practice)
    pub new_text: String,
}

impl FixEdit {
    /// Create an insertion at a position.
    #[must_use]
    pub fn insert(position: Position, text: impl Into<String>) -> Self {
        Self {
            position,
            new_text: text.into(),
        }
    }
}

/// A batch of edits for one document, applied atomically.
///
/// A batch always targets a single document and is either applied in full
/// or not at all; partial application would leave a half-fixed file behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixBatch {
    /// The document to edit
    pub uri: DocumentUri,
    /// The insertions, in the order the diagnostics reported them
    pub edits: Vec<FixEdit>,
}

impl FixBatch {
    /// Create a batch for a document.
    #[must_use]
    pub fn new(uri: DocumentUri, edits: Vec<FixEdit>) -> Self {
        Self { uri, edits }
    }

    /// Number of edits in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if the batch carries no edits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}
