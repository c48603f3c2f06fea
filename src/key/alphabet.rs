//! The 62-symbol key alphabet.
//!
//! Digits map to 0-9, lowercase letters to 10-35 and uppercase letters to
//! 36-61. `-` and ` ` are separators and carry no value.

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: u8 = 62;

/// Whether `ch` is a structurally insignificant separator.
pub fn is_separator(ch: char) -> bool {
    ch == '-' || ch == ' '
}

/// Map a key character to its symbol value.
///
/// Returns `None` for anything outside `[0-9a-zA-Z]`, separators included.
pub fn symbol_value(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'a'..='z' => Some(ch as u8 - b'a' + 10),
        'A'..='Z' => Some(ch as u8 - b'A' + 36),
        _ => None,
    }
}

/// Map a symbol value back to its character.
pub fn symbol_for(value: u8) -> Option<char> {
    match value {
        0..=9 => Some((b'0' + value) as char),
        10..=35 => Some((b'a' + value - 10) as char),
        36..=61 => Some((b'A' + value - 36) as char),
        _ => None,
    }
}
