//! Anti-tamper guard: debugger probe and before/after integrity measurement.
//!
//! Both checks are best-effort heuristics. A capable attacker can bypass
//! the probe (e.g. by patching the syscall) and can forge the additive
//! checksum. They add friction; they are not a security boundary.

pub mod integrity;
pub mod probe;

pub use integrity::{checksum, measure, IntegrityChecksum, IntegrityRegion, Measurement};
pub use probe::{DebuggerProbe, SystemProbe};

#[cfg(any(test, feature = "test-seams"))]
pub use probe::MockProbe;
