//! Read-only view of editor state.

use std::sync::Arc;

use semifix_types::{Diagnostic, DocumentUri};

/// What the session needs to know about the editor at evaluation time.
///
/// Implementations answer from their current state; the session never
/// caches across events. Every accessor is fallible because editors
/// routinely have no focused document, close documents between the event
/// and the query, or lack cursor information for background buffers.
pub trait EditorHost {
    /// The document currently holding focus, if any.
    fn active_document(&self) -> Option<DocumentUri>;

    /// Language id of an open document (`"java"`, `"pascal"`, ...).
    fn language_id(&self, uri: &DocumentUri) -> Option<String>;

    /// Full text of an open document.
    fn document_text(&self, uri: &DocumentUri) -> Option<Arc<str>>;

    /// Line the primary cursor is on within the document, if known.
    fn cursor_line(&self, uri: &DocumentUri) -> Option<u32>;

    /// Diagnostics currently reported for the document, in report order.
    fn diagnostics(&self, uri: &DocumentUri) -> Vec<Diagnostic>;
}
