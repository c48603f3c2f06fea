//! Keyward configuration.
//!
//! There are no config files or environment variables. Every constant the
//! structural checks consult lives in a [`DecisionTable`], embedded in the
//! binary as [`DecisionTable::STANDARD`].

use crate::key::{GROUP_LEN, KEY_LEN};
use crate::KeywardError;
use serde::Serialize;

/// Half-open index window `[start, end)` into a normalized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    /// First index (inclusive).
    pub start: usize,
    /// Last index (exclusive).
    pub end: usize,
}

impl Window {
    /// Create a window over `[start, end)`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Constants driving the structural checks.
///
/// SECURITY: this should be hard-coded in your application. It is also the
/// region the anti-tamper guard measures, so it must stay serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecisionTable {
    /// Indices summed by the sum test.
    pub sum_window: Window,

    /// The sum must be divisible by this.
    pub sum_modulus: u64,

    /// Indices multiplied (wrapping) by the product test.
    pub product_window: Window,

    /// The wrapped product must be divisible by this.
    pub product_modulus: u64,

    /// Bits each symbol is shifted by when folding a group.
    pub fold_shift: u32,
}

impl DecisionTable {
    /// The embedded production table.
    pub const STANDARD: DecisionTable = DecisionTable {
        sum_window: Window::new(0, 8),
        sum_modulus: 7,
        product_window: Window::new(8, 16),
        product_modulus: 11,
        fold_shift: 6,
    };

    /// Validate the table for obvious errors.
    pub fn validate(&self) -> Result<(), KeywardError> {
        check_window("sum_window", self.sum_window)?;
        check_window("product_window", self.product_window)?;

        if self.sum_modulus == 0 {
            return Err(KeywardError::ConfigError(
                "sum_modulus cannot be zero".to_string(),
            ));
        }
        if self.product_modulus == 0 {
            return Err(KeywardError::ConfigError(
                "product_modulus cannot be zero".to_string(),
            ));
        }
        if self.fold_shift == 0 || self.fold_shift as usize * GROUP_LEN > 64 {
            return Err(KeywardError::ConfigError(format!(
                "fold_shift must be in 1..={}, got {}",
                64 / GROUP_LEN,
                self.fold_shift
            )));
        }
        Ok(())
    }
}

impl Default for DecisionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn check_window(name: &str, window: Window) -> Result<(), KeywardError> {
    if window.start >= window.end || window.end > KEY_LEN {
        return Err(KeywardError::ConfigError(format!(
            "{} must be a non-empty range within 0..{}, got {}..{}",
            name, KEY_LEN, window.start, window.end
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        assert!(DecisionTable::STANDARD.validate().is_ok());
        assert_eq!(DecisionTable::default(), DecisionTable::STANDARD);
    }

    #[test]
    fn test_zero_sum_modulus_rejected() {
        let table = DecisionTable {
            sum_modulus: 0,
            ..DecisionTable::STANDARD
        };
        assert!(matches!(table.validate(), Err(KeywardError::ConfigError(_))));
    }

    #[test]
    fn test_zero_product_modulus_rejected() {
        let table = DecisionTable {
            product_modulus: 0,
            ..DecisionTable::STANDARD
        };
        assert!(matches!(table.validate(), Err(KeywardError::ConfigError(_))));
    }

    #[test]
    fn test_window_past_key_end_rejected() {
        let table = DecisionTable {
            product_window: Window::new(8, 17),
            ..DecisionTable::STANDARD
        };
        assert!(matches!(table.validate(), Err(KeywardError::ConfigError(_))));
    }

    #[test]
    fn test_empty_window_rejected() {
        let table = DecisionTable {
            sum_window: Window::new(4, 4),
            ..DecisionTable::STANDARD
        };
        assert!(matches!(table.validate(), Err(KeywardError::ConfigError(_))));
    }

    #[test]
    fn test_fold_shift_bounds() {
        let too_wide = DecisionTable {
            fold_shift: 17,
            ..DecisionTable::STANDARD
        };
        assert!(too_wide.validate().is_err());

        let zero = DecisionTable {
            fold_shift: 0,
            ..DecisionTable::STANDARD
        };
        assert!(zero.validate().is_err());

        let widest = DecisionTable {
            fold_shift: 16,
            ..DecisionTable::STANDARD
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_table_serializes_stably() {
        let a = serde_json::to_string(&DecisionTable::STANDARD).unwrap();
        let b = serde_json::to_string(&DecisionTable::STANDARD).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("\"sum_modulus\":7"));
        assert!(a.contains("\"product_modulus\":11"));
    }
}
