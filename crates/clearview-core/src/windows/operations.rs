use super::types::{Pid, WindowInfo};

/// Windows a hide would minimize: normal-layer windows not owned by the
/// frontmost process. Enumeration order is preserved.
pub fn select_hideable(windows: Vec<WindowInfo>, frontmost: Pid) -> Vec<WindowInfo> {
    windows
        .into_iter()
        .filter(|w| w.is_normal_layer() && w.owner_pid != frontmost)
        .collect()
}
