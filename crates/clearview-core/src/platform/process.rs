use sysinfo::{Pid as SysinfoPid, ProcessesToUpdate, System};
use tracing::debug;

use crate::windows::types::{Pid, ProcessRef};

/// Look up a running process by PID.
///
/// Returns `None` when the process has exited.
pub fn resolve_process(pid: Pid) -> Option<ProcessRef> {
    let mut system = System::new();
    let pid_obj = SysinfoPid::from_u32(pid.0);
    system.refresh_processes(ProcessesToUpdate::Some(&[pid_obj]), true);

    match system.process(pid_obj) {
        Some(process) => Some(ProcessRef {
            pid,
            name: process.name().to_string_lossy().to_string(),
        }),
        None => {
            debug!(event = "core.process.not_found", pid = pid.0);
            None
        }
    }
}
