//! Key Validation Engine - the main public API for Keyward.
//!
//! The `KeyValidationEngine` turns one raw key into one [`ValidationVerdict`]:
//! - Null input is rejected before normalization
//! - Malformed input and structural failures share one generic diagnostic
//! - All four structural predicates run on every well-formed key

use crate::checks::structural::run_checks;
use crate::config::DecisionTable;
use crate::guard::integrity::IntegrityRegion;
use crate::key::normalize;
use crate::KeywardError;

/// Diagnostic code for a missing key.
pub const CODE_NULL_INPUT: u8 = 0;

/// Diagnostic code for any malformed or structurally invalid key.
pub const CODE_INVALID_KEY: u8 = 2;

const NULL_KEY_MESSAGE: &str = "Null key input";
const INVALID_KEY_MESSAGE: &str = "Invalid key";

/// Outcome of one validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationVerdict {
    /// Key passed every check.
    Valid,

    /// Key was rejected.
    Invalid {
        /// Human-readable diagnostic; always populated.
        reason: &'static str,
        /// Classification ordinal (see `CODE_*`).
        code: u8,
    },
}

impl ValidationVerdict {
    /// Whether the key was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Diagnostic message, if rejected.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason, .. } => Some(*reason),
        }
    }

    /// Diagnostic code, if rejected.
    pub fn code(&self) -> Option<u8> {
        match self {
            Self::Valid => None,
            Self::Invalid { code, .. } => Some(*code),
        }
    }
}

impl From<&KeywardError> for ValidationVerdict {
    fn from(error: &KeywardError) -> Self {
        match error {
            KeywardError::NullKey => Self::Invalid {
                reason: NULL_KEY_MESSAGE,
                code: CODE_NULL_INPUT,
            },
            _ => Self::Invalid {
                reason: INVALID_KEY_MESSAGE,
                code: CODE_INVALID_KEY,
            },
        }
    }
}

/// Stateless structural key validator.
#[derive(Debug, Clone)]
pub struct KeyValidationEngine {
    table: DecisionTable,
}

impl KeyValidationEngine {
    /// Create an engine with a custom decision table.
    ///
    /// # Errors
    /// `ConfigError` if the table is inconsistent.
    pub fn new(table: DecisionTable) -> Result<Self, KeywardError> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Create an engine with the embedded production table.
    pub fn standard() -> Self {
        Self {
            table: DecisionTable::STANDARD,
        }
    }

    /// Validate a raw key.
    ///
    /// Pure function of its input. `None` models an absent key.
    pub fn validate(&self, raw_key: Option<&str>) -> ValidationVerdict {
        match self.check(raw_key) {
            Ok(()) => {
                tracing::debug!("key accepted");
                ValidationVerdict::Valid
            }
            Err(e) => {
                tracing::debug!(error = %e, "key rejected");
                ValidationVerdict::from(&e)
            }
        }
    }

    /// Validate a raw key, returning the error class instead of a verdict.
    ///
    /// # Errors
    /// - `NullKey` - No key supplied
    /// - `MalformedKey` - Foreign character or wrong symbol count
    /// - `StructuralFailure` - Any structural predicate failed
    pub fn check(&self, raw_key: Option<&str>) -> Result<(), KeywardError> {
        let raw_key = raw_key.ok_or(KeywardError::NullKey)?;
        let key = normalize(raw_key)?;

        if !run_checks(&key, &self.table).passed() {
            return Err(KeywardError::StructuralFailure);
        }
        Ok(())
    }

    /// Get the decision table.
    pub fn table(&self) -> &DecisionTable {
        &self.table
    }
}

impl Default for KeyValidationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl IntegrityRegion for KeyValidationEngine {
    /// Canonical JSON of the decision table.
    fn snapshot(&self) -> Result<Vec<u8>, KeywardError> {
        serde_json::to_vec(&self.table).map_err(|e| KeywardError::Snapshot(e.to_string()))
    }
}
