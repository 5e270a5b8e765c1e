use super::PlatformExtensions;
use crate::system::counters::ProcessMemory;

pub struct Platform;

// sysinfo already covers names and working-set size on Windows.
impl PlatformExtensions for Platform {
    fn process_command(_pid: u32) -> Option<String> {
        None
    }

    fn process_memory(_pid: u32) -> Option<ProcessMemory> {
        None
    }
}
