//! Ready-made documents and diagnostics for decider tests.

use semifix_types::{Diagnostic, DocumentUri, Position, Range};

/// One-line Java snippet missing the terminator after `int a = 1`.
///
/// The JDT diagnostic for it covers the `1` token, columns 28..29, so the
/// insert position is column 29.
pub const JAVA_MISSING_TERMINATOR: &str = "class X { void m(){ int a = 1 } }";

/// [`JAVA_MISSING_TERMINATOR`] with the terminator present.
pub const JAVA_TERMINATED: &str = "class X { void m(){ int a = 1; } }";

/// The URI used for fixture documents.
#[must_use]
pub fn main_java_uri() -> DocumentUri {
    DocumentUri::new("file:///src/Main.java")
}

/// A range confined to a single line.
#[must_use]
pub fn range_on_line(line: u32, start: u32, end: u32) -> Range {
    Range::new(Position::new(line, start), Position::new(line, end))
}

/// The JDT missing-semicolon diagnostic: source `Java`, message
/// `Syntax error, insert ";" to complete <context>`.
#[must_use]
pub fn missing_semicolon_error(range: Range, context: &str) -> Diagnostic {
    Diagnostic::error(
        range,
        "Java",
        format!("Syntax error, insert \";\" to complete {context}"),
    )
}

/// A JDT syntax error of a different shape, used to trip the
/// all-or-nothing gate.
#[must_use]
pub fn unexpected_token_error(range: Range, token: &str) -> Diagnostic {
    Diagnostic::error(
        range,
        "Java",
        format!("Syntax error on token \"{token}\", delete this token"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_snippets_differ_by_one_terminator() {
        assert_eq!(JAVA_MISSING_TERMINATOR.len() + 1, JAVA_TERMINATED.len());
        assert_eq!(&JAVA_TERMINATED[29..30], ";");
    }

    #[test]
    fn test_missing_semicolon_error_shape() {
        let diag = missing_semicolon_error(range_on_line(0, 28, 29), "BlockStatements");
        assert!(diag.is_error());
        assert!(diag.has_source("Java"));
        assert_eq!(
            diag.message,
            "Syntax error, insert \";\" to complete BlockStatements"
        );
    }

    #[test]
    fn test_unexpected_token_error_shape() {
        let diag = unexpected_token_error(range_on_line(1, 0, 1), "}");
        assert!(diag.is_error());
        assert_eq!(diag.message, "Syntax error on token \"}\", delete this token");
    }
}
