//! Automation permission probe.
//!
//! Window actions are sent to System Events, which macOS gates behind the
//! Privacy → Automation setting. Running an empty `tell` block triggers the
//! system consent prompt the first time and fails while access is denied.

use tracing::{info, warn};

use crate::platform::applescript::{permission_probe_script, run_script};
use crate::platform::errors::PlatformError;

/// System Settings pane where automation access is granted.
pub const AUTOMATION_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Automation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied { message: String },
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

impl From<Result<String, PlatformError>> for PermissionStatus {
    fn from(result: Result<String, PlatformError>) -> Self {
        match result {
            Ok(_) => PermissionStatus::Granted,
            Err(e) => PermissionStatus::Denied {
                message: e.to_string(),
            },
        }
    }
}

/// Check whether this process may send Apple events to System Events.
pub fn probe_automation() -> PermissionStatus {
    let status = PermissionStatus::from(run_script(&permission_probe_script(), "permission"));

    match &status {
        PermissionStatus::Granted => info!(event = "core.permissions.automation_granted"),
        PermissionStatus::Denied { message } => warn!(
            event = "core.permissions.automation_denied",
            error = %message,
            settings_url = AUTOMATION_SETTINGS_URL
        ),
    }

    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_success() {
        let status = PermissionStatus::from(Ok(String::new()));
        assert!(status.is_granted());
    }

    #[test]
    fn test_status_from_failure_keeps_message() {
        let status = PermissionStatus::from(Err(PlatformError::AppleScriptFailed {
            purpose: "permission".to_string(),
            stderr: "Not authorized to send Apple events to System Events. (-1743)".to_string(),
        }));

        match status {
            PermissionStatus::Denied { message } => assert!(message.contains("-1743")),
            PermissionStatus::Granted => panic!("expected Denied"),
        }
    }

    #[test]
    fn test_probe_on_unsupported_platform_is_denied() {
        #[cfg(not(target_os = "macos"))]
        assert!(!probe_automation().is_granted());
    }
}
