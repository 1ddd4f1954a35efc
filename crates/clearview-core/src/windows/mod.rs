pub mod operations;
pub mod registry;
pub mod types;

pub use operations::select_hideable;
pub use registry::WindowRegistry;
pub use types::{HiddenWindow, Pid, ProcessRef, WindowId, WindowInfo};
