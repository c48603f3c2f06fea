//! Keyward error types.

use crate::guard::integrity::IntegrityChecksum;
use thiserror::Error;

/// Errors that can occur during a key check run.
#[derive(Debug, Error)]
pub enum KeywardError {
    /// No key was supplied at all.
    #[error("Null key input")]
    NullKey,

    /// Key contains a foreign character or the wrong number of symbols.
    #[error("Malformed key: {reason}")]
    MalformedKey {
        /// What made the key malformed.
        reason: String,
    },

    /// At least one structural predicate rejected the key.
    #[error("Structural check failed")]
    StructuralFailure,

    /// A tracer is attached to the process (fatal, pre-validation).
    #[error("Debugger detected")]
    DebuggerDetected,

    /// The measured region changed between the two measurements.
    #[error("Code integrity violation (checksum {before} -> {after})")]
    IntegrityViolation {
        /// Checksum taken before validation.
        before: IntegrityChecksum,
        /// Checksum taken after validation.
        after: IntegrityChecksum,
    },

    /// Reading the key from the terminal failed.
    #[error("Input read error: {0}")]
    InputRead(String),

    /// Decision table is inconsistent.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Decision table could not be snapshotted for measurement.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl KeywardError {
    /// Build a `MalformedKey` error from any displayable reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedKey {
            reason: reason.into(),
        }
    }
}
