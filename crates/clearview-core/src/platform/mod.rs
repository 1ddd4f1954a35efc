pub mod applescript;
pub mod errors;
#[cfg(target_os = "macos")]
mod macos;
pub mod process;
pub mod traits;
#[cfg(not(target_os = "macos"))]
mod unsupported;

pub use errors::PlatformError;
pub use traits::{WindowController, WindowSource};

#[cfg(target_os = "macos")]
pub use macos::MacDesktop;
#[cfg(not(target_os = "macos"))]
pub use unsupported::UnsupportedDesktop;

/// The desktop implementation for the current platform.
#[cfg(target_os = "macos")]
pub type Desktop = MacDesktop;

/// The desktop implementation for the current platform.
#[cfg(not(target_os = "macos"))]
pub type Desktop = UnsupportedDesktop;
