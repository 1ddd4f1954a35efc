//! Configuration validation.

use crate::config::types::ClearviewConfig;
use crate::errors::ConfigError;

/// Upper bound for the per-window restore pause.
pub const MAX_RESTORE_DELAY_MS: u64 = 2000;

/// Modifier tokens accepted in a hotkey chord (case-insensitive).
pub const VALID_MODIFIERS: &[&str] = &[
    "alt", "option", "super", "cmd", "command", "ctrl", "control", "shift",
];

/// Validate the configuration.
///
/// The hotkey chord is only checked when the hotkey is enabled.
pub fn validate_config(config: &ClearviewConfig) -> Result<(), ConfigError> {
    if config.hotkey.enabled {
        validate_chord(&config.hotkey.toggle)?;
    }

    if config.restore.delay_ms > MAX_RESTORE_DELAY_MS {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "restore.delay_ms must be at most {}ms, got {}ms",
                MAX_RESTORE_DELAY_MS, config.restore.delay_ms
            ),
        });
    }

    Ok(())
}

/// Check the shape of a chord such as `alt+super+KeyH`.
///
/// Every token but the last must be a known modifier and the last token is
/// the key. Whether the key name itself is recognized is left to the hotkey
/// backend at registration time.
pub fn validate_chord(chord: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidHotkey {
        chord: chord.to_string(),
        reason: reason.to_string(),
    };

    let tokens: Vec<&str> = chord.split('+').map(str::trim).collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(invalid("empty token"));
    }

    let Some((key, modifiers)) = tokens.split_last() else {
        return Err(invalid("empty chord"));
    };

    if modifiers.is_empty() {
        return Err(invalid("at least one modifier is required"));
    }

    if let Some(unknown) = modifiers
        .iter()
        .find(|m| !VALID_MODIFIERS.contains(&m.to_lowercase().as_str()))
    {
        return Err(invalid(&format!("unknown modifier '{}'", unknown)));
    }

    if VALID_MODIFIERS.contains(&key.to_lowercase().as_str()) {
        return Err(invalid("chord must end with a key, not a modifier"));
    }

    Ok(())
}
