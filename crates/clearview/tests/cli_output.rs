//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Run clearview with an empty home directory so no user config is picked up.
fn run_clearview(args: &[&str]) -> Output {
    let home = TempDir::new().expect("Failed to create temp home");
    Command::new(env!("CARGO_BIN_EXE_clearview"))
        .args(args)
        .env("HOME", home.path())
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute 'clearview {}': {}", args.join(" "), e))
}

#[test]
fn test_help_lists_subcommands() {
    let output = run_clearview(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["run", "list", "check"] {
        assert!(
            stdout.contains(subcommand),
            "help should mention '{}', got: {}",
            subcommand,
            stdout
        );
    }
}

#[test]
fn test_version_flag() {
    let output = run_clearview(&["--version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    let output = run_clearview(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = run_clearview(&["shuffle"]);
    assert!(!output.status.success());
}

#[test]
fn test_hotkey_flags_conflict() {
    let output = run_clearview(&["run", "--hotkey", "ctrl+KeyH", "--no-hotkey"]);
    assert!(!output.status.success());
}

/// Configuration is validated before the agent starts, on every platform.
#[test]
fn test_run_rejects_hotkey_without_modifier() {
    let output = run_clearview(&["run", "--hotkey", "KeyH"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid configuration"),
        "expected a configuration error, got: {}",
        stderr
    );
}

#[test]
fn test_run_rejects_excessive_restore_delay() {
    let output = run_clearview(&["run", "--restore-delay-ms", "60000"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("restore.delay_ms"), "got: {}", stderr);
}

/// Default mode must not emit INFO logs, even when the command fails.
#[test]
fn test_default_mode_emits_no_info_logs() {
    let output = run_clearview(&["run", "--hotkey", "KeyH"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {}",
        stderr
    );
}

#[test]
fn test_verbose_mode_emits_json_logs() {
    let output = run_clearview(&["-v", "run", "--hotkey", "KeyH"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""event":"cli.run_started""#),
        "Verbose mode should emit JSON logs, got: {}",
        stderr
    );
}

#[cfg(not(target_os = "macos"))]
mod unsupported_platform {
    use super::run_clearview;

    #[test]
    fn test_list_reports_unsupported_platform() {
        let output = run_clearview(&["list"]);
        assert!(!output.status.success());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to list windows"), "got: {}", stderr);
        assert!(stderr.contains("macOS"), "got: {}", stderr);
    }

    #[test]
    fn test_run_reports_unsupported_platform() {
        let output = run_clearview(&["run", "--no-hotkey"]);
        assert!(!output.status.success());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("requires macOS"), "got: {}", stderr);
    }

    #[test]
    fn test_check_reports_missing_permission() {
        let output = run_clearview(&["check"]);
        assert!(!output.status.success());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Privacy_Automation"), "got: {}", stderr);
    }
}
