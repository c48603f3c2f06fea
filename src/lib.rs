//! # Keyward
//!
//! **Offline structural product-key validation with runtime tamper checks.**
//!
//! Keyward decides whether a product key is valid using only the key
//! itself: a 62-symbol alphabet, a fixed length of 16 symbols, and four
//! arithmetic predicates (segment sums, a wrapping product, and primality
//! of each folded segment). Around the decision it runs a small
//! anti-tamper guard.
//!
//! ## Features
//!
//! - **Strict normalization** — foreign characters and over-length keys are
//!   rejected explicitly; `-` and ` ` are ignored as separators
//! - **Deterministic checks** — exact 6k±1 primality, u64 wraparound product
//! - **Coarse diagnostics** — the user never learns which predicate failed
//! - **Debugger probe** — aborts before reading a key when a tracer is attached
//! - **Integrity measurement** — decision table checksummed before and after
//!   validation; a change refuses success
//!
//! ## Quickstart
//!
//! ```
//! use keyward::{KeyValidationEngine, ValidationVerdict};
//!
//! let engine = KeyValidationEngine::standard();
//! assert_eq!(engine.validate(Some("qjBf-paEX-hHkV-ZTBX")), ValidationVerdict::Valid);
//! assert!(!engine.validate(Some("AAAA-BBBB-CCCC-DDDD")).is_valid());
//! ```
//!
//! ## Threat Model
//!
//! This is friction, not security. The predicates are discoverable by
//! static analysis, the additive checksum is forgeable, and the debugger
//! probe can be patched out. Keyward does **not** prevent binary patching.

#![deny(missing_docs)]

// Core modules
pub mod config;
pub mod errors;

// Key layer
pub mod key;

// Check layer
pub mod checks;

// Engine (main public API)
pub mod engine;

// Anti-tamper layer
pub mod guard;

// Single-shot run
pub mod driver;

// Re-exports for public API
pub use config::DecisionTable;
pub use driver::{Driver, Outcome};
pub use engine::{KeyValidationEngine, ValidationVerdict, CODE_INVALID_KEY, CODE_NULL_INPUT};
pub use errors::KeywardError;
pub use guard::{DebuggerProbe, IntegrityChecksum, SystemProbe};
pub use key::{normalize, NormalizedKey};

#[cfg(any(test, feature = "test-seams"))]
pub use guard::MockProbe;
