//! Single-shot run: probe, measure, read, validate, verify.
//!
//! ```text
//! Start -> Probe -> { DebuggerDetected | Measure -> Read -> { ReadFailed | Validate
//!       -> { Invalid | Re-measure -> { IntegrityViolation | Success } } } }
//! ```
//!
//! Every transition happens once. Nothing is retried. The first measurement
//! is taken before the prompt, so the wait for input is covered too.
//!
//! Abort details are logged at `debug` only. Below that level a rejected key
//! leaves no trace beyond [`Outcome::message`].

use crate::engine::{KeyValidationEngine, ValidationVerdict};
use crate::guard::integrity::{measure, IntegrityRegion};
use crate::guard::probe::DebuggerProbe;
use crate::KeywardError;
use std::io::{BufRead, Write};
use tracing::Level;

/// Prompt shown before reading the key.
pub const PROMPT: &str = "Enter a product key: ";

/// Log level used when `--verbose` is not given.
pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Key valid and both measurements match.
    Success,

    /// A tracer was attached; nothing else ran.
    DebuggerDetected,

    /// The key could not be read.
    ReadFailed(String),

    /// The engine rejected the key.
    Invalid(ValidationVerdict),

    /// The measured region changed (or could not be measured).
    IntegrityViolation(String),
}

impl Outcome {
    /// Process exit status. Zero only for `Success`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Invalid(_) => 1,
            Self::ReadFailed(_) => 2,
            Self::IntegrityViolation(_) => 3,
            Self::DebuggerDetected => 4,
        }
    }

    /// Whether the run succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// User-facing message for this outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Success => "Valid key".to_string(),
            Self::DebuggerDetected => "Debugging detected. Exiting.".to_string(),
            Self::ReadFailed(_) => "Failed to read input".to_string(),
            Self::Invalid(verdict) => {
                format!("Error: {}", verdict.reason().unwrap_or("Invalid key"))
            }
            Self::IntegrityViolation(_) => "Code integrity violation. Exiting.".to_string(),
        }
    }

    /// Whether the message belongs on stderr rather than stdout.
    pub fn is_alert(&self) -> bool {
        matches!(
            self,
            Self::DebuggerDetected | Self::ReadFailed(_) | Self::IntegrityViolation(_)
        )
    }
}

impl From<KeywardError> for Outcome {
    fn from(error: KeywardError) -> Self {
        match error {
            KeywardError::DebuggerDetected => Self::DebuggerDetected,
            KeywardError::InputRead(detail) => Self::ReadFailed(detail),
            e @ (KeywardError::IntegrityViolation { .. } | KeywardError::Snapshot(_)) => {
                Self::IntegrityViolation(e.to_string())
            }
            e => Self::Invalid(ValidationVerdict::from(&e)),
        }
    }
}

/// Runs the guarded validation flow once.
pub struct Driver<P: DebuggerProbe> {
    probe: P,
    engine: KeyValidationEngine,
    region: Option<Box<dyn IntegrityRegion>>,
}

impl<P: DebuggerProbe> Driver<P> {
    /// Create a driver that measures the engine's own decision table.
    pub fn new(probe: P, engine: KeyValidationEngine) -> Self {
        Self {
            probe,
            engine,
            region: None,
        }
    }

    /// Create a driver that measures a custom region instead of the engine.
    pub fn with_region(
        probe: P,
        engine: KeyValidationEngine,
        region: Box<dyn IntegrityRegion>,
    ) -> Self {
        Self {
            probe,
            engine,
            region: Some(region),
        }
    }

    /// Run once: write the prompt to `prompt`, read one line from `input`.
    pub fn run<R: BufRead, W: Write>(&self, input: R, prompt: W) -> Outcome {
        match self.try_run(input, prompt) {
            Ok(()) => Outcome::Success,
            Err(e) => {
                tracing::debug!(error = %e, "run aborted");
                Outcome::from(e)
            }
        }
    }

    fn try_run<R: BufRead, W: Write>(&self, input: R, prompt: W) -> Result<(), KeywardError> {
        if self.probe.is_being_debugged() {
            return Err(KeywardError::DebuggerDetected);
        }

        let before = measure(self.region())?;
        let key = read_key(input, prompt)?;

        self.engine.check(Some(&key))?;
        let after = measure(self.region())?;
        before.verify(&after)?;

        Ok(())
    }

    fn region(&self) -> &dyn IntegrityRegion {
        match &self.region {
            Some(region) => region.as_ref(),
            None => &self.engine,
        }
    }

    /// Get the engine.
    pub fn engine(&self) -> &KeyValidationEngine {
        &self.engine
    }
}

/// Prompt and read one line, stripping the trailing line terminator.
///
/// # Errors
/// `InputRead` on I/O failure or end of input before any data.
pub fn read_key<R: BufRead, W: Write>(mut input: R, mut prompt: W) -> Result<String, KeywardError> {
    if let Err(e) = prompt
        .write_all(PROMPT.as_bytes())
        .and_then(|_| prompt.flush())
    {
        tracing::warn!(error = %e, "failed to write prompt");
    }

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| KeywardError::InputRead(e.to_string()))?;
    if read == 0 {
        return Err(KeywardError::InputRead("end of input".to_string()));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
