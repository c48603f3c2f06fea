//! Debugger-presence probe abstraction.

/// Probe trait so the driver can run with a deterministic probe in tests.
pub trait DebuggerProbe {
    /// Whether a debugger or other tracer is attached to this process.
    fn is_being_debugged(&self) -> bool;
}

/// Platform probe.
///
/// On Linux the process asks to be traced by its parent (`PTRACE_TRACEME`).
/// That fails when a tracer is already attached, which is reported as
/// "being debugged"; on success the request is immediately undone with
/// `PTRACE_DETACH`. On Windows it asks `IsDebuggerPresent`. Other platforms
/// report "not debugged".
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl DebuggerProbe for SystemProbe {
    fn is_being_debugged(&self) -> bool {
        let debugged = tracer_attached();
        tracing::debug!(debugged, "debugger probe finished");
        debugged
    }
}

#[cfg(target_os = "linux")]
fn tracer_attached() -> bool {
    use std::ptr::null_mut;

    // SAFETY: TRACEME and DETACH on ourselves take no addresses; the
    // pointer arguments are ignored by the kernel for these requests.
    let traced = unsafe {
        libc::ptrace(
            libc::PTRACE_TRACEME,
            0 as libc::pid_t,
            null_mut::<libc::c_void>(),
            null_mut::<libc::c_void>(),
        )
    };
    if traced == -1 {
        return true;
    }

    unsafe {
        libc::ptrace(
            libc::PTRACE_DETACH,
            0 as libc::pid_t,
            null_mut::<libc::c_void>(),
            null_mut::<libc::c_void>(),
        );
    }
    false
}

#[cfg(windows)]
fn tracer_attached() -> bool {
    // SAFETY: IsDebuggerPresent takes no arguments and only reads the PEB.
    unsafe { windows_sys::Win32::System::Diagnostics::Debug::IsDebuggerPresent() != 0 }
}

#[cfg(not(any(target_os = "linux", windows)))]
fn tracer_attached() -> bool {
    tracing::debug!("no debugger probe for this platform");
    false
}

/// Mock probe for deterministic testing.
#[cfg(any(test, feature = "test-seams"))]
#[derive(Debug, Default)]
pub struct MockProbe {
    debugged: bool,
    calls: std::cell::Cell<usize>,
}

#[cfg(any(test, feature = "test-seams"))]
impl MockProbe {
    /// Create a probe that always reports `debugged`.
    pub fn new(debugged: bool) -> Self {
        Self {
            debugged,
            calls: std::cell::Cell::new(0),
        }
    }

    /// How many times the probe has been asked.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[cfg(any(test, feature = "test-seams"))]
impl DebuggerProbe for MockProbe {
    fn is_being_debugged(&self) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.debugged
    }
}
