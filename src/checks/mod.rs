//! Structural predicates over a normalized key.

pub mod primality;
pub mod structural;

pub use primality::is_prime;
pub use structural::{fold_group, wrapping_product, StructuralReport};
