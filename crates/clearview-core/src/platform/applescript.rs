//! AppleScript builders and the `osascript` runner.
//!
//! Every script talks to System Events and addresses processes by
//! `unix id`, so display names with quotes or duplicates never matter.

use crate::platform::errors::PlatformError;
use crate::windows::types::Pid;
use tracing::warn;

/// Escape a string for use inside an AppleScript string literal.
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Printed by the window scripts when an action was applied.
pub const WINDOW_FOUND: &str = "found";
/// Printed by the window scripts when no window could be resolved.
pub const WINDOW_MISSING: &str = "missing";

/// `if` chain that binds `targetWindow` inside a `tell process` block.
///
/// A known title is tried first. Titles can change while a window is
/// minimized, so the chain falls through to `fallback`, then to `window 1`,
/// and finally returns [`WINDOW_MISSING`].
fn resolve_window(title: &str, fallback: Option<&str>) -> String {
    let mut script = String::from("        set targetWindow to missing value\n");

    if !title.is_empty() {
        let titled = format!("(first window whose name is \"{}\")", applescript_escape(title));
        script.push_str(&format!(
            "        if exists {titled} then\n            set targetWindow to {titled}\n        end if\n"
        ));
    }

    if let Some(fallback) = fallback {
        script.push_str("        if targetWindow is missing value then\n");
        script.push_str(fallback);
        script.push_str("        end if\n");
    }

    script.push_str(&format!(
        "        if targetWindow is missing value and (exists window 1) then set targetWindow to window 1\n        if targetWindow is missing value then return \"{WINDOW_MISSING}\"\n"
    ));
    script
}

/// Picks the first minimized window of the process.
const FIRST_MINIMIZED_WINDOW: &str = r#"            repeat with candidate in windows
                if value of attribute "AXMinimized" of candidate is true then
                    set targetWindow to contents of candidate
                    exit repeat
                end if
            end repeat
"#;

pub fn frontmost_pid_script() -> String {
    r#"tell application "System Events"
    set frontProcesses to application processes whose frontmost is true
    if (count of frontProcesses) is 0 then return ""
    return unix id of item 1 of frontProcesses
end tell"#
        .to_string()
}

pub fn minimize_script(pid: Pid, title: &str) -> String {
    let resolve = resolve_window(title, None);
    format!(
        r#"tell application "System Events"
    tell (first application process whose unix id is {pid})
{resolve}        set value of attribute "AXMinimized" of targetWindow to true
        return "{WINDOW_FOUND}"
    end tell
end tell"#
    )
}

pub fn restore_script(pid: Pid, title: &str) -> String {
    let resolve = resolve_window(title, Some(FIRST_MINIMIZED_WINDOW));
    format!(
        r#"tell application "System Events"
    tell (first application process whose unix id is {pid})
        set frontmost to true
{resolve}        set value of attribute "AXMinimized" of targetWindow to false
        perform action "AXRaise" of targetWindow
        return "{WINDOW_FOUND}"
    end tell
end tell"#
    )
}

/// Map the output of [`minimize_script`] or [`restore_script`] to a result.
pub fn check_window_action(output: &str, purpose: &str, title: &str) -> Result<(), PlatformError> {
    match output.trim() {
        WINDOW_FOUND => Ok(()),
        WINDOW_MISSING => Err(PlatformError::WindowNotFound {
            purpose: purpose.to_string(),
            title: title.to_string(),
        }),
        other => Err(PlatformError::UnexpectedOutput {
            purpose: purpose.to_string(),
            output: other.to_string(),
        }),
    }
}

/// Empty System Events block. Fails when automation permission is missing.
pub fn permission_probe_script() -> String {
    "tell application \"System Events\"\nend tell".to_string()
}

/// Run a script with `osascript` and return its trimmed stdout.
#[cfg(target_os = "macos")]
pub fn run_script(script: &str, purpose: &str) -> Result<String, PlatformError> {
    use tracing::debug;

    debug!(event = "core.applescript.execution_started", purpose = purpose);

    let output = std::process::Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .map_err(|e| PlatformError::AppleScriptExecution {
            message: format!("Failed to execute osascript for {}: {}", purpose, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            event = "core.applescript.execution_failed",
            purpose = purpose,
            stderr = %stderr
        );
        return Err(PlatformError::AppleScriptFailed {
            purpose: purpose.to_string(),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

    debug!(
        event = "core.applescript.execution_completed",
        purpose = purpose,
        output = %stdout
    );

    Ok(stdout)
}

#[cfg(not(target_os = "macos"))]
pub fn run_script(_script: &str, purpose: &str) -> Result<String, PlatformError> {
    warn!(
        event = "core.applescript.platform_not_supported",
        purpose = purpose,
        platform = std::env::consts::OS
    );
    Err(PlatformError::unsupported())
}

/// Parse the output of [`frontmost_pid_script`].
pub fn parse_frontmost_pid(output: &str) -> Result<Option<Pid>, PlatformError> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(|pid| Some(Pid(pid)))
        .map_err(|_| PlatformError::UnexpectedOutput {
            purpose: "frontmost".to_string(),
            output: trimmed.to_string(),
        })
}
