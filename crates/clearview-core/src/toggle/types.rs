use serde::Serialize;
use std::time::Duration;

use crate::config::ClearviewConfig;
use crate::windows::types::{Pid, WindowInfo};

/// Tunables for the toggle controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSettings {
    /// Pause after each restore request so the window server can finish the
    /// un-minimize animation before the next window is raised.
    pub restore_delay: Duration,
}

impl Default for ToggleSettings {
    fn default() -> Self {
        Self {
            restore_delay: Duration::from_millis(crate::config::defaults::default_restore_delay_ms()),
        }
    }
}

impl From<&ClearviewConfig> for ToggleSettings {
    fn from(config: &ClearviewConfig) -> Self {
        Self {
            restore_delay: config.restore.delay(),
        }
    }
}

/// What a single `toggle()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Windows were hidden. `hidden` counts registry records, including
    /// windows whose minimize request failed.
    Hidden { hidden: usize, failed: usize },
    /// The registry was drained. `skipped` counts records whose process had
    /// exited; `failed` counts restore requests that reported an error.
    Restored {
        restored: usize,
        skipped: usize,
        failed: usize,
    },
}

impl ToggleOutcome {
    /// Whether the controller is in the hidden state after this toggle.
    pub fn is_hidden_state(&self) -> bool {
        matches!(self, ToggleOutcome::Hidden { hidden, .. } if *hidden > 0)
    }
}

/// What a hide would minimize right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HideablePreview {
    pub frontmost: Option<Pid>,
    pub windows: Vec<WindowInfo>,
}
