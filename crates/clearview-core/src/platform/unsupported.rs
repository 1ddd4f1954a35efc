use tracing::warn;

use super::errors::PlatformError;
use super::process;
use super::traits::{WindowController, WindowSource};
use crate::windows::types::{Pid, ProcessRef, WindowId, WindowInfo};

/// Stand-in desktop for platforms without window control. Every fallible
/// call returns [`PlatformError::UnsupportedPlatform`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDesktop;

impl UnsupportedDesktop {
    pub fn new() -> Self {
        Self
    }
}

impl WindowSource for UnsupportedDesktop {
    fn frontmost_process(&self) -> Result<Option<Pid>, PlatformError> {
        warn!(
            event = "core.desktop.platform_not_supported",
            platform = std::env::consts::OS
        );
        Err(PlatformError::unsupported())
    }

    fn on_screen_windows(&self) -> Result<Vec<WindowInfo>, PlatformError> {
        Err(PlatformError::unsupported())
    }

    fn resolve_process(&self, pid: Pid) -> Option<ProcessRef> {
        process::resolve_process(pid)
    }
}

impl WindowController for UnsupportedDesktop {
    fn minimize(
        &self,
        _process: &ProcessRef,
        _window: WindowId,
        _title: &str,
    ) -> Result<(), PlatformError> {
        Err(PlatformError::unsupported())
    }

    fn restore(
        &self,
        _process: &ProcessRef,
        _window: WindowId,
        _title: &str,
    ) -> Result<(), PlatformError> {
        Err(PlatformError::unsupported())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_reports_unsupported() {
        let desktop = UnsupportedDesktop::new();
        let process = ProcessRef {
            pid: Pid(1),
            name: "launchd".to_string(),
        };

        assert!(matches!(
            desktop.frontmost_process(),
            Err(PlatformError::UnsupportedPlatform { .. })
        ));
        assert!(desktop.on_screen_windows().is_err());
        assert!(desktop.minimize(&process, WindowId(1), "").is_err());
        assert!(desktop.restore(&process, WindowId(1), "").is_err());
    }
}
