use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use clearview_core::toggle::list_hideable;
use clearview_core::{Desktop, HideablePreview, WindowInfo, events};

#[derive(Serialize)]
struct ListOutput<'a> {
    frontmost_pid: Option<u32>,
    count: usize,
    windows: &'a [WindowInfo],
}

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let preview = match list_hideable(&Desktop::new()) {
        Ok(preview) => preview,
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        let output = ListOutput {
            frontmost_pid: preview.frontmost.map(|p| p.0),
            count: preview.windows.len(),
            windows: &preview.windows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_preview(&preview);
    }

    info!(event = "cli.list_completed", count = preview.windows.len());
    Ok(())
}

fn print_preview(preview: &HideablePreview) {
    match preview.frontmost {
        Some(pid) => println!("Frontmost process: {}", pid),
        None => println!("No frontmost application - nothing would be hidden."),
    }

    if preview.windows.is_empty() {
        println!("No other windows on screen.");
        return;
    }

    let app_width = preview
        .windows
        .iter()
        .map(|w| w.owner_name.chars().count())
        .max()
        .unwrap_or(11)
        .clamp(11, 40);

    println!();
    println!(
        "{:<8} {:<7} {:<app_width$} Title",
        "Window", "PID", "Application"
    );
    for window in &preview.windows {
        let title = if window.title.is_empty() {
            "(untitled)"
        } else {
            window.title.as_str()
        };
        println!(
            "{:<8} {:<7} {:<app_width$} {}",
            window.id, window.owner_pid, window.owner_name, title
        );
    }
    println!();
    println!("{} window(s) would be hidden.", preview.windows.len());
}
