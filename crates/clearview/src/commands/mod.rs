use clap::ArgMatches;
use tracing::error;

use clearview_core::events;

mod check;
mod list;
mod run;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("check", sub_matches)) => check::handle_check_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
