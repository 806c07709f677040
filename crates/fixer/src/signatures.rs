//! The target-error signature table.

use semifix_types::Diagnostic;
use std::sync::LazyLock;

/// One recognizable missing-terminator error shape.
///
/// A diagnostic matches when its source equals `source` exactly and its
/// message starts with `message_prefix` (case-sensitive). The prefix is
/// fixed text ending right before the analyzer's variable suffix, so a
/// trailing space in the prefix is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSignature {
    /// Language id of documents this signature applies to
    pub language_id: String,
    /// Exact diagnostic source string
    pub source: String,
    /// Fixed message prefix
    pub message_prefix: String,
    /// The character to insert at the diagnostic's range end
    pub terminator: char,
}

impl TargetSignature {
    /// Create a new signature.
    #[must_use]
    pub fn new(
        language_id: impl Into<String>,
        source: impl Into<String>,
        message_prefix: impl Into<String>,
        terminator: char,
    ) -> Self {
        Self {
            language_id: language_id.into(),
            source: source.into(),
            message_prefix: message_prefix.into(),
            terminator,
        }
    }

    /// Returns `true` if this signature is for the given language.
    #[must_use]
    pub fn applies_to(&self, language_id: &str) -> bool {
        self.language_id == language_id
    }

    /// Returns `true` if the diagnostic has this signature's shape.
    #[must_use]
    pub fn matches(&self, diagnostic: &Diagnostic) -> bool {
        diagnostic.has_source(&self.source) && diagnostic.message.starts_with(&self.message_prefix)
    }
}

/// Built-in signatures, created once and reused across all sessions.
///
/// Currently a single entry: the Eclipse JDT language server reports a
/// missing semicolon as `Syntax error, insert ";" to complete <context>`
/// with source `Java`.
static BUILTIN_SIGNATURES: LazyLock<Vec<TargetSignature>> = LazyLock::new(|| {
    vec![TargetSignature::new(
        "java",
        "Java",
        // The trailing space matters: the prefix ends right before the
        // variable suffix ("Statement", "BlockStatements", ...).
        "Syntax error, insert \";\" to complete ",
        ';',
    )]
});

/// The signature table consulted by the decider.
///
/// Immutable once constructed. Built from the built-in entries, optionally
/// followed by host-supplied extras; lookup order is table order, so
/// built-ins win when an extra shadows one.
#[derive(Debug, Clone)]
pub struct SignatureSet {
    signatures: Vec<TargetSignature>,
}

impl SignatureSet {
    /// The built-in table alone.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            signatures: BUILTIN_SIGNATURES.clone(),
        }
    }

    /// The built-in table followed by extra entries.
    #[must_use]
    pub fn with_extra(extra: impl IntoIterator<Item = TargetSignature>) -> Self {
        let mut signatures = BUILTIN_SIGNATURES.clone();
        signatures.extend(extra);
        Self { signatures }
    }

    /// Returns `true` if any signature applies to the language.
    #[must_use]
    pub fn tracks_language(&self, language_id: &str) -> bool {
        self.signatures.iter().any(|s| s.applies_to(language_id))
    }

    /// Returns `true` if the diagnostic's source is tracked for the
    /// language, regardless of whether the message matches.
    ///
    /// This is the decider's filter: only errors from tracked sources
    /// participate in the all-or-nothing gate.
    #[must_use]
    pub fn is_tracked_source(&self, language_id: &str, diagnostic: &Diagnostic) -> bool {
        self.signatures
            .iter()
            .any(|s| s.applies_to(language_id) && diagnostic.has_source(&s.source))
    }

    /// Find the first signature matching the diagnostic for the language.
    #[must_use]
    pub fn classify(&self, language_id: &str, diagnostic: &Diagnostic) -> Option<&TargetSignature> {
        self.signatures
            .iter()
            .find(|s| s.applies_to(language_id) && s.matches(diagnostic))
    }

    /// Iterate over all signatures in table order.
    pub fn iter(&self) -> impl Iterator<Item = &TargetSignature> {
        self.signatures.iter()
    }

    /// Number of signatures in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Returns `true` if the table is empty (never the case today, since
    /// the built-ins are always included).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for SignatureSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semifix_test_utils::{missing_semicolon_error, range_on_line};
    use semifix_types::{Diagnostic, Position, Range};

    #[test]
    fn test_builtin_table_has_java_entry() {
        let set = SignatureSet::builtin();
        assert_eq!(set.len(), 1);
        assert!(set.tracks_language("java"));
        assert!(!set.tracks_language("kotlin"));
    }

    #[test]
    fn test_classify_matching_diagnostic() {
        let set = SignatureSet::builtin();
        let diag = missing_semicolon_error(range_on_line(3, 20, 21), "Statement");

        let signature = set.classify("java", &diag).unwrap();
        assert_eq!(signature.terminator, ';');
        assert_eq!(signature.source, "Java");
    }

    #[test]
    fn test_classify_requires_language_match() {
        let set = SignatureSet::builtin();
        let diag = missing_semicolon_error(range_on_line(3, 20, 21), "Statement");
        assert!(set.classify("python", &diag).is_none());
    }

    #[test]
    fn test_classify_rejects_other_messages() {
        let set = SignatureSet::builtin();
        let diag = Diagnostic::error(
            range_on_line(1, 0, 4),
            "Java",
            "Syntax error on token \"}\", delete this token",
        );
        assert!(set.classify("java", &diag).is_none());
        // ... but the source is still tracked, so this error gates fixes.
        assert!(set.is_tracked_source("java", &diag));
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let set = SignatureSet::builtin();
        let diag = Diagnostic::error(
            range_on_line(0, 5, 6),
            "Java",
            "syntax error, insert \";\" to complete Statement",
        );
        assert!(set.classify("java", &diag).is_none());
    }

    #[test]
    fn test_source_match_is_exact() {
        let set = SignatureSet::builtin();
        let diag = Diagnostic::error(
            range_on_line(0, 5, 6),
            "java",
            "Syntax error, insert \";\" to complete Statement",
        );
        assert!(set.classify("java", &diag).is_none());
        assert!(!set.is_tracked_source("java", &diag));
    }

    #[test]
    fn test_untracked_source_is_ignored() {
        let set = SignatureSet::builtin();
        let diag = Diagnostic::error(range_on_line(0, 0, 1), "Checkstyle", "Missing semicolon");
        assert!(!set.is_tracked_source("java", &diag));
    }

    #[test]
    fn test_diagnostic_without_source_is_untracked() {
        let set = SignatureSet::builtin();
        let diag = Diagnostic::new(
            semifix_types::Severity::Error,
            Range::new(Position::new(0, 0), Position::new(0, 1)),
            None,
            "Syntax error, insert \";\" to complete Statement",
        );
        assert!(!set.is_tracked_source("java", &diag));
        assert!(set.classify("java", &diag).is_none());
    }

    #[test]
    fn test_with_extra_appends_after_builtins() {
        let set = SignatureSet::with_extra(vec![TargetSignature::new(
            "kotlin",
            "Kotlin",
            "Expecting ';'",
            ';',
        )]);
        assert_eq!(set.len(), 2);
        assert!(set.tracks_language("java"));
        assert!(set.tracks_language("kotlin"));

        let diag = Diagnostic::error(range_on_line(2, 7, 8), "Kotlin", "Expecting ';' after this");
        assert!(set.classify("kotlin", &diag).is_some());
        assert!(set.classify("java", &diag).is_none());
    }

    #[test]
    fn test_iter_preserves_table_order() {
        let set = SignatureSet::with_extra(vec![TargetSignature::new("x", "X", "p", '.')]);
        let languages: Vec<&str> = set.iter().map(|s| s.language_id.as_str()).collect();
        assert_eq!(languages, vec!["java", "x"]);
    }
}
