use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("clearview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hide every window except the frontmost app's, and bring them back")
        .long_about("ClearView lives in the menu bar. Press the hotkey (Option+Command+H by default) or pick 'Toggle Windows' from its menu to minimize every window that does not belong to the frontmost application. Toggle again to restore them in the order they were hidden.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Start the menu-bar agent (macOS)")
                .arg(
                    Arg::new("hotkey")
                        .long("hotkey")
                        .help("Toggle chord, e.g. 'alt+super+KeyH' (overrides config)")
                        .conflicts_with("no-hotkey")
                )
                .arg(
                    Arg::new("no-hotkey")
                        .long("no-hotkey")
                        .help("Do not register a global hotkey; toggle from the menu only")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("restore-delay-ms")
                        .long("restore-delay-ms")
                        .help("Pause after each restored window in milliseconds (overrides config)")
                        .value_parser(clap::value_parser!(u64))
                )
        )
        .subcommand(
            Command::new("list")
                .about("List the windows a toggle would hide right now")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("check")
                .about("Check that ClearView may control other applications' windows")
        )
}
