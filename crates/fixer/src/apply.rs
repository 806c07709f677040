//! Applying a batch of insertions to a text snapshot.

use crate::text;
use semifix_types::FixEdit;

/// Apply insertions to `text`, returning the patched document.
///
/// Edits are applied back-to-front so earlier insertions never shift the
/// offsets of later ones. An edit whose position does not map into the
/// text is skipped with a warning; the rest still apply.
#[must_use]
pub fn apply_edits(text: &str, edits: &[FixEdit]) -> String {
    let mut ordered: Vec<&FixEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.position.cmp(&a.position));

    let mut result = text.to_string();
    for edit in ordered {
        let Some(offset) = text::byte_offset(&result, edit.position) else {
            tracing::warn!(
                line = edit.position.line,
                character = edit.position.character,
                "Edit position out of bounds, skipping"
            );
            continue;
        };
        result = format!(
            "{}{}{}",
            &result[..offset],
            edit.new_text,
            &result[offset..]
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use semifix_test_utils::{JAVA_MISSING_TERMINATOR, JAVA_TERMINATED};
    use semifix_types::Position;

    #[test]
    fn test_single_insertion() {
        let edits = vec![FixEdit::insert(Position::new(0, 29), ";")];
        assert_eq!(apply_edits(JAVA_MISSING_TERMINATOR, &edits), JAVA_TERMINATED);
    }

    #[test]
    fn test_no_edits_returns_text_unchanged() {
        assert_eq!(
            apply_edits(JAVA_MISSING_TERMINATOR, &[]),
            JAVA_MISSING_TERMINATOR
        );
    }

    #[test]
    fn test_multiple_insertions_do_not_shift_each_other() {
        let text = "int a = 1\nint b = 2\n";
        let edits = vec![
            FixEdit::insert(Position::new(0, 9), ";"),
            FixEdit::insert(Position::new(1, 9), ";"),
        ];
        assert_eq!(apply_edits(text, &edits), "int a = 1;\nint b = 2;\n");
    }

    #[test]
    fn test_report_order_does_not_matter() {
        let text = "int a = 1\nint b = 2\n";
        let edits = vec![
            FixEdit::insert(Position::new(1, 9), ";"),
            FixEdit::insert(Position::new(0, 9), ";"),
        ];
        assert_eq!(apply_edits(text, &edits), "int a = 1;\nint b = 2;\n");
    }

    #[test]
    fn test_two_insertions_on_one_line() {
        let text = "a b";
        let edits = vec![
            FixEdit::insert(Position::new(0, 1), ";"),
            FixEdit::insert(Position::new(0, 3), ";"),
        ];
        assert_eq!(apply_edits(text, &edits), "a; b;");
    }

    #[test]
    fn test_out_of_bounds_edit_is_skipped() {
        let text = "int a = 1";
        let edits = vec![
            FixEdit::insert(Position::new(5, 0), ";"),
            FixEdit::insert(Position::new(0, 9), ";"),
        ];
        assert_eq!(apply_edits(text, &edits), "int a = 1;");
    }

    #[test]
    fn test_insertion_at_end_of_document() {
        let edits = vec![FixEdit::insert(Position::new(0, 3), ";")];
        assert_eq!(apply_edits("end", &edits), "end;");
    }

    #[test]
    fn test_insertion_before_multibyte_text() {
        // Offsets are recomputed per edit, so multibyte content to the
        // right of an insertion stays intact.
        let text = "s = \"𝕏\"\nt = 1\n";
        let edits = vec![
            FixEdit::insert(Position::new(0, 8), ";"),
            FixEdit::insert(Position::new(1, 5), ";"),
        ];
        assert_eq!(apply_edits(text, &edits), "s = \"𝕏\";\nt = 1;\n");
    }
}
