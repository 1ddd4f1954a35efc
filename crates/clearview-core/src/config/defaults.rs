//! Default implementations for configuration types.
//!
//! Helper functions here back the serde `#[serde(default = "...")]`
//! attributes so that missing fields and missing sections agree.

use crate::config::types::{HotkeyConfig, RestoreConfig};

/// Option+Command+H.
pub fn default_toggle_chord() -> String {
    "alt+super+KeyH".to_string()
}

pub fn default_hotkey_enabled() -> bool {
    true
}

/// Returns the default per-window restore pause in milliseconds (100ms).
pub fn default_restore_delay_ms() -> u64 {
    100
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            enabled: default_hotkey_enabled(),
            toggle: default_toggle_chord(),
        }
    }
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_restore_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::ClearviewConfig;

    #[test]
    fn test_clearview_config_default() {
        let config = ClearviewConfig::default();
        assert!(config.hotkey.enabled);
        assert_eq!(config.hotkey.toggle, "alt+super+KeyH");
        assert_eq!(config.restore.delay_ms, 100);
    }

    #[test]
    fn test_partial_hotkey_section_uses_defaults() {
        let toml_str = r#"
[hotkey]
enabled = false
"#;
        let config: ClearviewConfig = toml::from_str(toml_str).unwrap();

        assert!(!config.hotkey.enabled);
        assert_eq!(
            config.hotkey.toggle, "alt+super+KeyH",
            "toggle should default when missing"
        );
        assert_eq!(
            config.restore.delay_ms, 100,
            "delay_ms should default to 100 when restore section is missing"
        );
    }

    #[test]
    fn test_restore_explicit_zero_preserved() {
        let toml_str = r#"
[restore]
delay_ms = 0
"#;
        let config: ClearviewConfig = toml::from_str(toml_str).unwrap();

        // serde default only applies to missing fields
        assert_eq!(
            config.restore.delay_ms, 0,
            "explicit zero should be preserved, not overridden to default"
        );
    }
}
