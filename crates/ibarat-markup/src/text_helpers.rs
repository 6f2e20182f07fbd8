//! Char/byte offset helpers for plain `&str` input.
//!
//! Selection offsets are Unicode scalar values. Arabic text carries
//! combining harakat, so byte offsets from a UI would split characters.

/// Byte offset of the `char_offset`-th char, or `None` past the end.
///
/// `char_offset == len_chars(text)` maps to `text.len()`.
pub fn char_to_byte(text: &str, char_offset: usize) -> Option<usize> {
    if char_offset == 0 {
        return Some(0);
    }
    match text.char_indices().nth(char_offset) {
        Some((byte, _)) => Some(byte),
        None if text.chars().count() == char_offset => Some(text.len()),
        None => None,
    }
}

/// Length in chars.
pub fn len_chars(text: &str) -> usize {
    text.chars().count()
}
