use serde::{Deserialize, Serialize};
use std::fmt;

/// Core Graphics window number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u32);

/// Process identifier of a window owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Window layer of ordinary application windows. Menus, the Dock, overlays
/// and status items all sit on higher layers.
pub const NORMAL_WINDOW_LAYER: i32 = 0;

/// One on-screen window as reported by the window server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: WindowId,
    pub owner_pid: Pid,
    pub owner_name: String,
    /// Window title. Empty when the window server withholds it (no screen
    /// recording permission) or the window has none.
    pub title: String,
    pub layer: i32,
}

impl WindowInfo {
    pub fn is_normal_layer(&self) -> bool {
        self.layer == NORMAL_WINDOW_LAYER
    }
}

/// A running process that owns at least one window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessRef {
    pub pid: Pid,
    pub name: String,
}

/// A window this tool minimized and is responsible for restoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenWindow {
    pub process: ProcessRef,
    pub window: WindowId,
    /// Title at hide time, used to find the same window again on restore.
    pub title: String,
}
