use crate::errors::ClearviewError;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Failed to enumerate on-screen windows: {message}")]
    EnumerationFailed { message: String },

    #[error("AppleScript execution failed: {message}")]
    AppleScriptExecution { message: String },

    #[error("AppleScript '{purpose}' failed with error: {stderr}")]
    AppleScriptFailed { purpose: String, stderr: String },

    #[error("AppleScript '{purpose}' returned unexpected output: '{output}'")]
    UnexpectedOutput { purpose: String, output: String },

    #[error("No window to {purpose} (last known title: '{title}')")]
    WindowNotFound { purpose: String, title: String },

    #[error("Window control requires macOS (running on {platform})")]
    UnsupportedPlatform { platform: String },
}

impl PlatformError {
    pub fn unsupported() -> Self {
        PlatformError::UnsupportedPlatform {
            platform: std::env::consts::OS.to_string(),
        }
    }
}

impl ClearviewError for PlatformError {
    fn error_code(&self) -> &'static str {
        match self {
            PlatformError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            PlatformError::AppleScriptExecution { .. } => "APPLESCRIPT_EXECUTION_FAILED",
            PlatformError::AppleScriptFailed { .. } => "APPLESCRIPT_FAILED",
            PlatformError::UnexpectedOutput { .. } => "APPLESCRIPT_UNEXPECTED_OUTPUT",
            PlatformError::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            PlatformError::UnsupportedPlatform { .. } => "UNSUPPORTED_PLATFORM",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            PlatformError::AppleScriptFailed { .. } | PlatformError::UnsupportedPlatform { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applescript_failed_display() {
        let error = PlatformError::AppleScriptFailed {
            purpose: "minimize".to_string(),
            stderr: "Not authorized to send Apple events".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "AppleScript 'minimize' failed with error: Not authorized to send Apple events"
        );
        assert_eq!(error.error_code(), "APPLESCRIPT_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_unsupported_names_current_os() {
        let error = PlatformError::unsupported();
        assert!(error.to_string().contains(std::env::consts::OS));
        assert_eq!(error.error_code(), "UNSUPPORTED_PLATFORM");
    }

    #[test]
    fn test_enumeration_failed_is_system_error() {
        let error = PlatformError::EnumerationFailed {
            message: "window server unavailable".to_string(),
        };
        assert_eq!(error.error_code(), "WINDOW_ENUMERATION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_window_not_found_display() {
        let error = PlatformError::WindowNotFound {
            purpose: "restore".to_string(),
            title: "Slack | general".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No window to restore (last known title: 'Slack | general')"
        );
        assert_eq!(error.error_code(), "WINDOW_NOT_FOUND");
        assert!(!error.is_user_error());
    }
}
