use clap::ArgMatches;
use tracing::{error, info};

use clearview_core::config::{ConfigOverrides, load_hierarchy_with};
use clearview_core::events;

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.run_started");

    let overrides = ConfigOverrides {
        toggle_chord: matches.get_one::<String>("hotkey").cloned(),
        restore_delay_ms: matches.get_one::<u64>("restore-delay-ms").copied(),
        disable_hotkey: matches.get_flag("no-hotkey"),
    };

    let config = match load_hierarchy_with(&overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            error!(event = "cli.run_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    start_agent(config)
}

#[cfg(target_os = "macos")]
fn start_agent(
    config: clearview_core::ClearviewConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = crate::agent::run(config);
    events::log_app_shutdown();
    result
}

#[cfg(not(target_os = "macos"))]
fn start_agent(
    _config: clearview_core::ClearviewConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!(
        "The ClearView menu-bar agent requires macOS (running on {}).",
        std::env::consts::OS
    );
    error!(
        event = "cli.run_failed",
        reason = "platform_not_supported",
        platform = std::env::consts::OS
    );
    Err(clearview_core::PlatformError::unsupported().into())
}
