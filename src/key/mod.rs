//! Key normalization: raw key text to a fixed array of symbol values.

pub mod alphabet;
pub mod normalize;

/// Number of meaningful symbols in a key.
pub const KEY_LEN: usize = 16;

/// Number of symbols in one segment.
pub const GROUP_LEN: usize = 4;

/// Number of segments in a key.
pub const GROUP_COUNT: usize = KEY_LEN / GROUP_LEN;

// Segments tile the key exactly.
const _: () = assert!(GROUP_LEN * GROUP_COUNT == KEY_LEN);

pub use normalize::{normalize, NormalizedKey};
