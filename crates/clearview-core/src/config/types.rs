//! Configuration type definitions for ClearView.
//!
//! These types are serialized/deserialized from the TOML config file.
//!
//! # Example Configuration
//!
//! ```toml
//! [hotkey]
//! enabled = true
//! toggle = "alt+super+KeyH"
//!
//! [restore]
//! delay_ms = 100
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration loaded from `~/.clearview/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClearviewConfig {
    /// Global hotkey settings
    #[serde(default)]
    pub hotkey: HotkeyConfig,

    /// Restore behavior
    #[serde(default)]
    pub restore: RestoreConfig,
}

/// Global hotkey configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Whether the agent registers the global hotkey at all.
    #[serde(default = "super::defaults::default_hotkey_enabled")]
    pub enabled: bool,

    /// Key chord that triggers a toggle, in `modifier+...+Key` form.
    /// Modifiers: alt/option, super/cmd/command, ctrl/control, shift.
    #[serde(default = "super::defaults::default_toggle_chord")]
    pub toggle: String,
}

/// Restore configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreConfig {
    /// Pause after each restored window so the un-minimize animation can
    /// finish before the next one starts.
    #[serde(default = "super::defaults::default_restore_delay_ms")]
    pub delay_ms: u64,
}

impl RestoreConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
