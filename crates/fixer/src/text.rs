//! Position arithmetic over a plain-text document snapshot.
//!
//! Editor positions count UTF-16 code units per line; everything in this
//! crate that touches actual text goes through [`byte_offset`] first. An
//! unmappable position (line past the end of the document, character past
//! the end of the line, or one that would split a surrogate pair) yields
//! `None` so callers can skip instead of splicing blindly.

use semifix_types::Position;

/// Map an editor position to a byte offset in `text`.
pub fn byte_offset(text: &str, position: Position) -> Option<usize> {
    let mut line_start = 0usize;
    let mut current_line = 0u32;

    for segment in text.split_inclusive('\n') {
        if current_line == position.line {
            return offset_within_line(segment, line_start, position.character);
        }
        line_start += segment.len();
        current_line += 1;
    }

    // Only a trailing newline opens one more addressable (empty) line; an
    // empty document still has position (0, 0). Without either, a line past
    // the final segment does not map.
    if current_line == position.line
        && position.character == 0
        && (text.is_empty() || text.ends_with('\n'))
    {
        return Some(text.len());
    }

    None
}

fn offset_within_line(segment: &str, line_start: usize, character: u32) -> Option<usize> {
    // Line-ending bytes are not addressable characters.
    let content = segment.strip_suffix('\n').unwrap_or(segment);
    let content = content.strip_suffix('\r').unwrap_or(content);

    let mut units = 0u32;
    for (index, ch) in content.char_indices() {
        if units == character {
            return Some(line_start + index);
        }
        units += ch.len_utf16() as u32;
        if units > character {
            // The target lands inside a surrogate pair.
            return None;
        }
    }

    (units == character).then_some(line_start + content.len())
}

/// The character ending at `offset`, if any.
pub fn char_before(text: &str, offset: usize) -> Option<char> {
    text.get(..offset)?.chars().next_back()
}

/// The character starting at `offset`, if any.
pub fn char_after(text: &str, offset: usize) -> Option<char> {
    text.get(offset..)?.chars().next()
}
