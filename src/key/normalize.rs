//! Raw key text to [`NormalizedKey`].

use crate::key::alphabet::{is_separator, symbol_for, symbol_value, ALPHABET_SIZE};
use crate::key::{GROUP_LEN, KEY_LEN};
use crate::KeywardError;
use std::fmt;
use std::str::FromStr;

/// Exactly [`KEY_LEN`] symbol values, each below [`ALPHABET_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedKey([u8; KEY_LEN]);

impl NormalizedKey {
    /// Build a key directly from symbol values.
    ///
    /// # Errors
    /// `MalformedKey` if any value is outside the alphabet.
    pub fn from_values(values: [u8; KEY_LEN]) -> Result<Self, KeywardError> {
        if let Some(bad) = values.iter().find(|v| **v >= ALPHABET_SIZE) {
            return Err(KeywardError::malformed(format!(
                "symbol value {} outside alphabet",
                bad
            )));
        }
        Ok(Self(values))
    }

    /// The symbol values in key order.
    pub fn values(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// The key's consecutive segments of [`GROUP_LEN`] values.
    pub fn groups(&self) -> impl Iterator<Item = &[u8]> {
        self.0.chunks_exact(GROUP_LEN)
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            for value in group {
                // Every stored value is inside the alphabet.
                write!(f, "{}", symbol_for(*value).unwrap_or('?'))?;
            }
        }
        Ok(())
    }
}

impl FromStr for NormalizedKey {
    type Err = KeywardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Normalize a raw key.
///
/// Separators are skipped. The scan stops at the first foreign character
/// and at the first symbol past [`KEY_LEN`]; fewer than [`KEY_LEN`] symbols
/// is also malformed.
///
/// # Errors
/// `MalformedKey` describing the first problem found.
pub fn normalize(raw: &str) -> Result<NormalizedKey, KeywardError> {
    let mut values = [0u8; KEY_LEN];
    let mut count = 0usize;

    for ch in raw.chars() {
        if is_separator(ch) {
            continue;
        }

        let value = symbol_value(ch)
            .ok_or_else(|| KeywardError::malformed(format!("unexpected character {:?}", ch)))?;

        if count == KEY_LEN {
            return Err(KeywardError::malformed(format!(
                "more than {} symbols",
                KEY_LEN
            )));
        }

        values[count] = value;
        count += 1;
    }

    if count != KEY_LEN {
        return Err(KeywardError::malformed(format!(
            "expected {} symbols, got {}",
            KEY_LEN, count
        )));
    }

    Ok(NormalizedKey(values))
}
