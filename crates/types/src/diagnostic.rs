//! The diagnostic record the host hands us.

use crate::{Range, Severity};

/// A single diagnostic reported by an external analyzer.
///
/// Diagnostics are immutable snapshots supplied by the host per analysis
/// pass; this crate never produces them, it only classifies them. `source`
/// identifies the producing analyzer (e.g. `"Java"` for the Eclipse JDT
/// language server) and is optional because hosts do not guarantee it --
/// a diagnostic without a source can never match a target signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The text covered by the diagnostic
    pub range: Range,
    /// Severity as reported by the analyzer
    pub severity: Severity,
    /// Name of the producing analyzer, if it identified itself
    pub source: Option<String>,
    /// Human-readable message, matched against signature prefixes
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    #[must_use]
    pub fn new(
        severity: Severity,
        range: Range,
        source: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity,
            source,
            message: message.into(),
        }
    }

    /// Create an error diagnostic with a source.
    #[must_use]
    pub fn error(range: Range, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, range, Some(source.into()), message)
    }

    /// Create a warning diagnostic with a source.
    #[must_use]
    pub fn warning(range: Range, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, range, Some(source.into()), message)
    }

    /// Returns true for error-severity diagnostics.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// Returns true if the diagnostic reports the given source.
    #[must_use]
    pub fn has_source(&self, source: &str) -> bool {
        self.source.as_deref() == Some(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn one_line_range() -> Range {
        Range::new(Position::new(0, 4), Position::new(0, 9))
    }

    #[test]
    fn test_error_constructor() {
        let diag = Diagnostic::error(one_line_range(), "Java", "Syntax error");
        assert!(diag.is_error());
        assert_eq!(diag.source.as_deref(), Some("Java"));
        assert_eq!(diag.message, "Syntax error");
    }

    #[test]
    fn test_warning_constructor() {
        let diag = Diagnostic::warning(one_line_range(), "Java", "Unused import");
        assert!(!diag.is_error());
        assert_eq!(diag.severity, Severity::Warning);
    }

    #[test]
    fn test_has_source() {
        let diag = Diagnostic::error(one_line_range(), "Java", "msg");
        assert!(diag.has_source("Java"));
        assert!(!diag.has_source("java"));

        let anonymous = Diagnostic::new(Severity::Error, one_line_range(), None, "msg");
        assert!(!anonymous.has_source("Java"));
    }
}
