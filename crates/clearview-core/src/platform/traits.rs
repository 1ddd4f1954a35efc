//! Capability traits that isolate every operating-system call.

use crate::platform::errors::PlatformError;
use crate::windows::types::{Pid, ProcessRef, WindowId, WindowInfo};

/// Read-only view of the desktop: which process is frontmost, which
/// windows are on screen, and whether a process is still running.
pub trait WindowSource {
    /// PID of the frontmost application, or `None` when there is none
    /// (e.g. during a Space transition).
    fn frontmost_process(&self) -> Result<Option<Pid>, PlatformError>;

    /// Windows currently on screen, desktop elements excluded, front to back.
    fn on_screen_windows(&self) -> Result<Vec<WindowInfo>, PlatformError>;

    /// Look up a process. `None` means it has exited.
    fn resolve_process(&self, pid: Pid) -> Option<ProcessRef>;
}

/// Actions on another process's window.
///
/// Both calls are requests: success means the request was delivered, not
/// that the window finished animating.
pub trait WindowController {
    /// Minimize `window` of `process`.
    fn minimize(
        &self,
        process: &ProcessRef,
        window: WindowId,
        title: &str,
    ) -> Result<(), PlatformError>;

    /// Bring `process` to the front, un-minimize `window` and raise it.
    fn restore(
        &self,
        process: &ProcessRef,
        window: WindowId,
        title: &str,
    ) -> Result<(), PlatformError>;
}
