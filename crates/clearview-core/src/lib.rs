//! clearview-core: hide every window except the frontmost application's,
//! then bring them back.
//!
//! # Main Entry Points
//!
//! - [`toggle`] - The hide/restore state machine
//! - [`windows`] - Window records and the hidden-window registry
//! - [`platform`] - Desktop access behind the `WindowSource` and
//!   `WindowController` traits
//! - [`config`] - Configuration management
//! - [`permissions`] - Automation permission probe

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod permissions;
pub mod platform;
pub mod toggle;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use config::ClearviewConfig;
pub use errors::{ClearviewError, ConfigError};
pub use platform::{Desktop, PlatformError, WindowController, WindowSource};
pub use toggle::{HideablePreview, ToggleController, ToggleOutcome, ToggleSettings};
pub use windows::{HiddenWindow, Pid, ProcessRef, WindowId, WindowInfo, WindowRegistry};

// Re-export logging initialization
pub use logging::init_logging;
