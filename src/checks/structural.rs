//! The four structural predicates.
//!
//! Each predicate is independent and reads the key only. The engine
//! combines them with a plain AND; callers outside tests should not expose
//! which one failed.
//!
//! The predicates divide by the table's moduli, so they are crate-private:
//! the only way in is through an engine whose table passed
//! [`DecisionTable::validate`].

use crate::checks::primality::is_prime;
use crate::config::{DecisionTable, Window};
use crate::key::NormalizedKey;

/// Per-predicate outcome of one structural pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralReport {
    /// Sum window divisible by the sum modulus.
    pub sum: bool,
    /// Wrapped product window divisible by the product modulus.
    pub product: bool,
    /// Every segment has a nonzero sum.
    pub segments_nonzero: bool,
    /// Every folded segment is prime.
    pub segments_prime: bool,
}

impl StructuralReport {
    /// Whether every predicate passed.
    pub fn passed(&self) -> bool {
        self.sum & self.product & self.segments_nonzero & self.segments_prime
    }
}

/// Evaluate all four predicates. None is skipped when an earlier one fails.
pub(crate) fn run_checks(key: &NormalizedKey, table: &DecisionTable) -> StructuralReport {
    StructuralReport {
        sum: sum_test(key, table),
        product: product_test(key, table),
        segments_nonzero: segments_nonzero_test(key),
        segments_prime: segments_prime_test(key, table),
    }
}

fn window(key: &NormalizedKey, window: Window) -> impl Iterator<Item = u64> + '_ {
    key.values()[window.start..window.end]
        .iter()
        .map(|v| u64::from(*v))
}

/// Sum of the sum window is divisible by the sum modulus.
pub(crate) fn sum_test(key: &NormalizedKey, table: &DecisionTable) -> bool {
    let sum: u64 = window(key, table.sum_window).sum();
    sum % table.sum_modulus == 0
}

/// Product of `values` with natural u64 wraparound.
pub fn wrapping_product(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(1u64, u64::wrapping_mul)
}

/// Wrapped product of the product window is divisible by the product modulus.
pub(crate) fn product_test(key: &NormalizedKey, table: &DecisionTable) -> bool {
    wrapping_product(window(key, table.product_window)) % table.product_modulus == 0
}

/// Every segment sums to something other than zero.
pub(crate) fn segments_nonzero_test(key: &NormalizedKey) -> bool {
    key.groups()
        .all(|group| group.iter().map(|v| u64::from(*v)).sum::<u64>() != 0)
}

/// Fold a segment into one integer: shift left by `shift` bits, add the next value.
pub fn fold_group(group: &[u8], shift: u32) -> u64 {
    group
        .iter()
        .fold(0u64, |acc, v| (acc << shift) + u64::from(*v))
}

/// Every folded segment is prime.
pub(crate) fn segments_prime_test(key: &NormalizedKey, table: &DecisionTable) -> bool {
    key.groups()
        .all(|group| is_prime(fold_group(group, table.fold_shift)))
}
