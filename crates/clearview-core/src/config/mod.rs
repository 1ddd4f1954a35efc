//! # Configuration System
//!
//! TOML configuration for the ClearView agent, read from
//! `~/.clearview/config.toml`. Every field is optional.
//!
//! ```toml
//! [hotkey]
//! enabled = true
//! toggle = "alt+super+KeyH"
//!
//! [restore]
//! delay_ms = 100
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use clearview_core::config::{ConfigOverrides, load_hierarchy_with};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_hierarchy_with(&ConfigOverrides::default())?;
//!     println!("toggle chord: {}", config.hotkey.toggle);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use loading::{ConfigOverrides, load_hierarchy_with, user_config_path};
pub use types::{ClearviewConfig, HotkeyConfig, RestoreConfig};
pub use validation::{validate_chord, validate_config};
