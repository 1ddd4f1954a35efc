//! The toggle state machine.
//!
//! An empty registry means "nothing hidden": the next toggle hides every
//! normal window not owned by the frontmost application. A non-empty
//! registry means "hidden": the next toggle restores those windows in the
//! order they were hidden and empties the registry.
//!
//! Every platform call is best-effort. Failures are logged and counted in
//! the returned [`ToggleOutcome`], never propagated, and never stop the
//! remaining windows from being processed.

use tracing::{debug, info, warn};

use super::types::{HideablePreview, ToggleOutcome, ToggleSettings};
use crate::platform::errors::PlatformError;
use crate::platform::traits::{WindowController, WindowSource};
use crate::windows::operations::select_hideable;
use crate::windows::registry::WindowRegistry;
use crate::windows::types::HiddenWindow;

pub struct ToggleController<S, C> {
    registry: WindowRegistry,
    source: S,
    controller: C,
    settings: ToggleSettings,
}

impl<S: WindowSource, C: WindowController> ToggleController<S, C> {
    pub fn new(
        registry: WindowRegistry,
        source: S,
        controller: C,
        settings: ToggleSettings,
    ) -> Self {
        Self {
            registry,
            source,
            controller,
            settings,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn is_hidden(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Hide when nothing is hidden, restore otherwise.
    pub fn toggle(&mut self) -> ToggleOutcome {
        if self.registry.is_empty() {
            self.hide_other_windows()
        } else {
            self.restore_windows()
        }
    }

    fn hide_other_windows(&mut self) -> ToggleOutcome {
        info!(event = "core.toggle.hide_started");

        let frontmost = match self.source.frontmost_process() {
            Ok(Some(pid)) => pid,
            Ok(None) => {
                warn!(
                    event = "core.toggle.hide_skipped",
                    reason = "no_frontmost_application"
                );
                return ToggleOutcome::Hidden {
                    hidden: 0,
                    failed: 0,
                };
            }
            Err(e) => {
                warn!(
                    event = "core.toggle.hide_skipped",
                    reason = "frontmost_lookup_failed",
                    error = %e
                );
                return ToggleOutcome::Hidden {
                    hidden: 0,
                    failed: 0,
                };
            }
        };

        let windows = match self.source.on_screen_windows() {
            Ok(windows) => windows,
            Err(e) => {
                warn!(
                    event = "core.toggle.hide_skipped",
                    reason = "enumeration_failed",
                    error = %e
                );
                return ToggleOutcome::Hidden {
                    hidden: 0,
                    failed: 0,
                };
            }
        };

        let mut failed = 0;

        for window in select_hideable(windows, frontmost) {
            let Some(process) = self.source.resolve_process(window.owner_pid) else {
                debug!(
                    event = "core.toggle.window_skipped",
                    reason = "process_not_found",
                    pid = window.owner_pid.0,
                    window_id = window.id.0
                );
                continue;
            };

            if let Err(e) = self.controller.minimize(&process, window.id, &window.title) {
                failed += 1;
                warn!(
                    event = "core.toggle.minimize_failed",
                    pid = process.pid.0,
                    app_name = %process.name,
                    window_id = window.id.0,
                    error = %e
                );
            }

            // Recorded even on failure; the restore pass treats every record alike.
            self.registry.push(HiddenWindow {
                process,
                window: window.id,
                title: window.title,
            });
        }

        let hidden = self.registry.len();
        info!(
            event = "core.toggle.hide_completed",
            frontmost_pid = frontmost.0,
            hidden = hidden,
            failed = failed
        );

        ToggleOutcome::Hidden { hidden, failed }
    }

    fn restore_windows(&mut self) -> ToggleOutcome {
        let records = self.registry.take_all();
        info!(event = "core.toggle.restore_started", count = records.len());

        let mut restored = 0;
        let mut skipped = 0;
        let mut failed = 0;

        for record in records {
            if self.source.resolve_process(record.process.pid).is_none() {
                skipped += 1;
                debug!(
                    event = "core.toggle.window_skipped",
                    reason = "process_exited",
                    pid = record.process.pid.0,
                    app_name = %record.process.name,
                    window_id = record.window.0
                );
                continue;
            }

            match self
                .controller
                .restore(&record.process, record.window, &record.title)
            {
                Ok(()) => restored += 1,
                Err(e) => {
                    failed += 1;
                    warn!(
                        event = "core.toggle.restore_failed",
                        pid = record.process.pid.0,
                        app_name = %record.process.name,
                        window_id = record.window.0,
                        error = %e
                    );
                }
            }

            if !self.settings.restore_delay.is_zero() {
                std::thread::sleep(self.settings.restore_delay);
            }
        }

        info!(
            event = "core.toggle.restore_completed",
            restored = restored,
            skipped = skipped,
            failed = failed
        );

        ToggleOutcome::Restored {
            restored,
            skipped,
            failed,
        }
    }
}

/// Read-only preview of what a hide would minimize right now.
pub fn list_hideable<S: WindowSource>(source: &S) -> Result<HideablePreview, PlatformError> {
    info!(event = "core.toggle.preview_started");

    let frontmost = source.frontmost_process()?;
    let windows = source.on_screen_windows()?;

    let windows = match frontmost {
        Some(pid) => select_hideable(windows, pid),
        None => Vec::new(),
    };

    info!(
        event = "core.toggle.preview_completed",
        frontmost_pid = ?frontmost.map(|p| p.0),
        count = windows.len()
    );

    Ok(HideablePreview { frontmost, windows })
}
