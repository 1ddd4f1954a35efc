use core_foundation::base::{CFType, TCFType};
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::number::CFNumber;
use core_foundation::string::{CFString, CFStringRef};
use core_graphics::window::{
    copy_window_info, kCGNullWindowID, kCGWindowLayer, kCGWindowListExcludeDesktopElements,
    kCGWindowListOptionOnScreenOnly, kCGWindowName, kCGWindowNumber, kCGWindowOwnerName,
    kCGWindowOwnerPID,
};
use tracing::{debug, info, warn};

use super::applescript::{
    check_window_action, frontmost_pid_script, minimize_script, parse_frontmost_pid,
    restore_script, run_script,
};
use super::errors::PlatformError;
use super::process;
use super::traits::{WindowController, WindowSource};
use crate::windows::types::{Pid, ProcessRef, WindowId, WindowInfo};

/// The real macOS desktop: Core Graphics for enumeration, System Events
/// AppleScript for window actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacDesktop;

impl MacDesktop {
    pub fn new() -> Self {
        Self
    }
}

type WindowDictionary = CFDictionary<CFString, CFType>;

fn dict_value(dict: &WindowDictionary, key: CFStringRef) -> Option<CFType> {
    // SAFETY: the kCGWindow* keys are static CFStrings owned by Core Graphics.
    let key = unsafe { CFString::wrap_under_get_rule(key) };
    dict.find(&key).map(|value| (*value).clone())
}

fn dict_i64(dict: &WindowDictionary, key: CFStringRef) -> Option<i64> {
    dict_value(dict, key)
        .and_then(|value| value.downcast::<CFNumber>())
        .and_then(|number| number.to_i64())
}

fn dict_string(dict: &WindowDictionary, key: CFStringRef) -> Option<String> {
    dict_value(dict, key)
        .and_then(|value| value.downcast::<CFString>())
        .map(|s| s.to_string())
}

fn window_from_dictionary(dict: &WindowDictionary) -> Option<WindowInfo> {
    // SAFETY: reading extern statics exported by Core Graphics.
    let (number_key, pid_key, layer_key, owner_key, name_key) = unsafe {
        (
            kCGWindowNumber,
            kCGWindowOwnerPID,
            kCGWindowLayer,
            kCGWindowOwnerName,
            kCGWindowName,
        )
    };

    let id = u32::try_from(dict_i64(dict, number_key)?).ok()?;
    let owner_pid = u32::try_from(dict_i64(dict, pid_key)?).ok()?;
    let layer = i32::try_from(dict_i64(dict, layer_key)?).ok()?;

    Some(WindowInfo {
        id: WindowId(id),
        owner_pid: Pid(owner_pid),
        owner_name: dict_string(dict, owner_key).unwrap_or_default(),
        title: dict_string(dict, name_key).unwrap_or_default(),
        layer,
    })
}

impl WindowSource for MacDesktop {
    fn frontmost_process(&self) -> Result<Option<Pid>, PlatformError> {
        let output = run_script(&frontmost_pid_script(), "frontmost")?;
        let pid = parse_frontmost_pid(&output)?;
        debug!(event = "core.desktop.frontmost_resolved", pid = ?pid.map(|p| p.0));
        Ok(pid)
    }

    fn on_screen_windows(&self) -> Result<Vec<WindowInfo>, PlatformError> {
        debug!(event = "core.desktop.enumeration_started");

        let options = kCGWindowListOptionOnScreenOnly | kCGWindowListExcludeDesktopElements;
        let entries = copy_window_info(options, kCGNullWindowID).ok_or_else(|| {
            PlatformError::EnumerationFailed {
                message: "CGWindowListCopyWindowInfo returned no list".to_string(),
            }
        })?;

        let mut skipped_count = 0;
        let mut windows = Vec::with_capacity(entries.len() as usize);

        for entry in entries.iter() {
            // SAFETY: every element of the window info array is a CFDictionary
            // owned by the array; get rule retains it for our wrapper.
            let dict: WindowDictionary =
                unsafe { CFDictionary::wrap_under_get_rule(*entry as CFDictionaryRef) };

            match window_from_dictionary(&dict) {
                Some(window) => windows.push(window),
                None => skipped_count += 1,
            }
        }

        if skipped_count > 0 {
            warn!(
                event = "core.desktop.enumeration_incomplete",
                skipped_count = skipped_count,
                returned_count = windows.len()
            );
        }

        info!(
            event = "core.desktop.enumeration_completed",
            count = windows.len()
        );
        Ok(windows)
    }

    fn resolve_process(&self, pid: Pid) -> Option<ProcessRef> {
        process::resolve_process(pid)
    }
}

impl WindowController for MacDesktop {
    fn minimize(
        &self,
        process: &ProcessRef,
        window: WindowId,
        title: &str,
    ) -> Result<(), PlatformError> {
        debug!(
            event = "core.desktop.minimize_started",
            pid = process.pid.0,
            app_name = %process.name,
            window_id = window.0
        );
        let output = run_script(&minimize_script(process.pid, title), "minimize")?;
        check_window_action(&output, "minimize", title)
    }

    fn restore(
        &self,
        process: &ProcessRef,
        window: WindowId,
        title: &str,
    ) -> Result<(), PlatformError> {
        debug!(
            event = "core.desktop.restore_started",
            pid = process.pid.0,
            app_name = %process.name,
            window_id = window.0
        );
        let output = run_script(&restore_script(process.pid, title), "restore")?;
        check_window_action(&output, "restore", title)
    }
}
