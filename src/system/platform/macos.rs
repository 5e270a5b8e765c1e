use libproc::libproc::proc_pid;
use libproc::libproc::task_info::TaskInfo;

use super::PlatformExtensions;
use crate::system::counters::ProcessMemory;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn process_command(pid: u32) -> Option<String> {
        proc_pid::name(pid as i32).ok().filter(|n| !n.is_empty())
    }

    fn process_memory(pid: u32) -> Option<ProcessMemory> {
        // Mach task info has no shared-page split for other processes.
        let info = proc_pid::pidinfo::<TaskInfo>(pid as i32, 0).ok()?;
        Some(ProcessMemory {
            resident: info.pti_resident_size,
            shared: 0,
        })
    }
}
