//! Snapshot testing assertions for decider output.
//!
//! Edits are formatted one per line so insta snapshots stay readable and
//! order-sensitive.

use semifix_types::FixEdit;

/// Format a list of edits for snapshot testing.
///
/// # Example
///
/// ```ignore
/// use semifix_test_utils::format_edits;
///
/// let edits = decide(&signatures, &input);
/// insta::assert_snapshot!(format_edits(&edits));
/// ```
#[must_use]
pub fn format_edits(edits: &[FixEdit]) -> String {
    if edits.is_empty() {
        return String::from("(no edits)");
    }

    edits
        .iter()
        .map(|e| {
            format!(
                "insert {:?} at {}:{}",
                e.new_text, e.position.line, e.position.character
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use semifix_types::Position;

    #[test]
    fn test_format_edits_empty() {
        assert_eq!(format_edits(&[]), "(no edits)");
    }

    #[test]
    fn test_format_edits_lines() {
        let edits = vec![
            FixEdit::insert(Position::new(0, 29), ";"),
            FixEdit::insert(Position::new(4, 11), ";"),
        ];
        assert_eq!(
            format_edits(&edits),
            "insert \";\" at 0:29\ninsert \";\" at 4:11"
        );
    }
}
