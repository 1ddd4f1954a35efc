use std::str::FromStr;

use global_hotkey::{GlobalHotKeyManager, HotKeyState};
use global_hotkey::hotkey::HotKey;
use tracing::{info, warn};

/// A registered global hotkey. Holds the manager, which must stay alive for
/// as long as the chord should fire.
pub struct RegisteredHotkey {
    pub id: u32,
    pub chord: String,
    _manager: GlobalHotKeyManager,
}

/// Register `chord` as a system-wide hotkey.
pub fn register(chord: &str) -> Result<RegisteredHotkey, Box<dyn std::error::Error>> {
    let hotkey = HotKey::from_str(chord).map_err(|e| {
        warn!(event = "cli.agent.hotkey_parse_failed", chord = chord, error = %e);
        format!("Invalid hotkey '{}': {}", chord, e)
    })?;

    let manager = GlobalHotKeyManager::new()?;
    manager.register(hotkey).map_err(|e| {
        warn!(event = "cli.agent.hotkey_register_failed", chord = chord, error = %e);
        format!("Failed to register hotkey '{}': {}", chord, e)
    })?;

    info!(
        event = "cli.agent.hotkey_registered",
        chord = chord,
        id = hotkey.id()
    );

    Ok(RegisteredHotkey {
        id: hotkey.id(),
        chord: chord.to_string(),
        _manager: manager,
    })
}

/// Whether a hotkey event should flip the toggle: only a press of the
/// registered chord counts.
pub fn should_toggle(registered: Option<u32>, id: u32, state: HotKeyState) -> bool {
    registered == Some(id) && state == HotKeyState::Pressed
}

/// Menu label suffix for a chord, e.g. `alt+super+KeyH` becomes `⌥⌘H`.
pub fn chord_symbols(chord: &str) -> String {
    chord
        .split('+')
        .map(str::trim)
        .map(|token| match token.to_lowercase().as_str() {
            "ctrl" | "control" => "⌃".to_string(),
            "alt" | "option" => "⌥".to_string(),
            "shift" => "⇧".to_string(),
            "super" | "cmd" | "command" => "⌘".to_string(),
            _ => token
                .strip_prefix("Key")
                .or_else(|| token.strip_prefix("Digit"))
                .unwrap_or(token)
                .to_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_toggle_on_registered_press() {
        assert!(should_toggle(Some(7), 7, HotKeyState::Pressed));
    }

    #[test]
    fn test_should_not_toggle_on_release() {
        assert!(!should_toggle(Some(7), 7, HotKeyState::Released));
    }

    #[test]
    fn test_should_not_toggle_for_other_hotkey() {
        assert!(!should_toggle(Some(7), 8, HotKeyState::Pressed));
    }

    #[test]
    fn test_should_not_toggle_without_registration() {
        assert!(!should_toggle(None, 7, HotKeyState::Pressed));
    }

    #[test]
    fn test_chord_symbols_default() {
        assert_eq!(chord_symbols("alt+super+KeyH"), "⌥⌘H");
    }

    #[test]
    fn test_chord_symbols_aliases() {
        assert_eq!(chord_symbols("Control + Shift + Digit1"), "⌃⇧1");
        assert_eq!(chord_symbols("option+command+h"), "⌥⌘H");
    }
}
