//! Document identity.

use std::sync::Arc;

/// A URI string identifying a document.
///
/// This is typically a `file://` URI for documents on disk, but the decider
/// treats it as an opaque identity: it only ever compares URIs and hands
/// them back to the host. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentUri(Arc<str>);

impl DocumentUri {
    /// Create a new `DocumentUri` from a string.
    #[must_use]
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Get the URI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_uri() {
        let uri = DocumentUri::new("file:///src/Main.java");
        assert_eq!(uri.as_str(), "file:///src/Main.java");
        assert_eq!(uri.to_string(), "file:///src/Main.java");
    }

    #[test]
    fn test_document_uri_equality() {
        let a = DocumentUri::new("file:///a.java");
        let b = DocumentUri::new("file:///a.java");
        let c = DocumentUri::new("file:///c.java");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
