use clap::ArgMatches;
use tracing::info;

use clearview_core::permissions::{AUTOMATION_SETTINGS_URL, PermissionStatus, probe_automation};

pub(crate) fn handle_check_command(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.check_started");

    match probe_automation() {
        PermissionStatus::Granted => {
            println!("Automation permission granted. ClearView can control other windows.");
            info!(event = "cli.check_completed", granted = true);
            Ok(())
        }
        PermissionStatus::Denied { message } => {
            eprintln!("Automation permission missing: {}", message);
            eprintln!(
                "Enable ClearView (or your terminal) under System Settings > Privacy & Security > Automation:"
            );
            eprintln!("  open \"{}\"", AUTOMATION_SETTINGS_URL);
            info!(event = "cli.check_completed", granted = false);
            Err("automation permission not granted".into())
        }
    }
}
