//! Configuration loading.
//!
//! # Configuration Hierarchy
//!
//! Later sources override earlier ones:
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.clearview/config.toml`
//! 3. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::ClearviewConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Command-line overrides applied on top of the file configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub toggle_chord: Option<String>,
    pub restore_delay_ms: Option<u64>,
    pub disable_hotkey: bool,
}

/// Path of the user config file, `~/.clearview/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".clearview").join("config.toml"))
}

/// Load defaults merged with the user config file, apply CLI overrides, then
/// validate.
///
/// A missing config file is not an error.
pub fn load_hierarchy_with(overrides: &ConfigOverrides) -> Result<ClearviewConfig, ConfigError> {
    let file_config = match user_config_path() {
        Some(path) => load_config_file(&path)?,
        None => {
            debug!(event = "core.config.home_dir_missing");
            None
        }
    };

    let mut config = file_config.unwrap_or_default();
    apply_overrides(&mut config, overrides);
    validate_config(&config)?;

    info!(
        event = "core.config.loaded",
        hotkey_enabled = config.hotkey.enabled,
        toggle = %config.hotkey.toggle,
        restore_delay_ms = config.restore.delay_ms
    );

    Ok(config)
}

/// Load a configuration file. Returns `Ok(None)` if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<ClearviewConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "core.config.file_not_found", path = %path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config: ClearviewConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(Some(config))
}

/// Apply CLI overrides in place.
pub fn apply_overrides(config: &mut ClearviewConfig, overrides: &ConfigOverrides) {
    if let Some(chord) = &overrides.toggle_chord {
        config.hotkey.toggle = chord.clone();
    }
    if let Some(delay_ms) = overrides.restore_delay_ms {
        config.restore.delay_ms = delay_ms;
    }
    if overrides.disable_hotkey {
        config.hotkey.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result = load_config_file(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[hotkey]
toggle = "ctrl+shift+KeyH"

[restore]
delay_ms = 250
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap().unwrap();
        assert!(config.hotkey.enabled);
        assert_eq!(config.hotkey.toggle, "ctrl+shift+KeyH");
        assert_eq!(config.restore.delay_ms, 250);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[restore\ndelay_ms = ").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[restore]\ndelay_ms = \"fast\"\n").unwrap();

        assert!(matches!(
            load_config_file(&path),
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = ClearviewConfig::default();
        let overrides = ConfigOverrides {
            toggle_chord: Some("ctrl+alt+KeyW".to_string()),
            restore_delay_ms: Some(0),
            disable_hotkey: true,
        };

        apply_overrides(&mut config, &overrides);

        assert_eq!(config.hotkey.toggle, "ctrl+alt+KeyW");
        assert_eq!(config.restore.delay_ms, 0);
        assert!(!config.hotkey.enabled);
    }

    #[test]
    fn test_empty_overrides_leave_config_untouched() {
        let mut config = ClearviewConfig::default();
        apply_overrides(&mut config, &ConfigOverrides::default());
        assert_eq!(config, ClearviewConfig::default());
    }

    #[test]
    fn test_user_config_path_location() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with(".clearview/config.toml"));
        }
    }
}
