use super::PlatformExtensions;
use crate::system::counters::ProcessMemory;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn process_command(pid: u32) -> Option<String> {
        let raw = std::fs::read(format!("/proc/{pid}/cmdline")).ok()?;
        command_from_cmdline(&raw)
    }

    fn process_memory(pid: u32) -> Option<ProcessMemory> {
        let contents = std::fs::read_to_string(format!("/proc/{pid}/status")).ok()?;
        memory_from_status(&contents)
    }
}

/// Basename of argv[0]. Kernel threads have an empty cmdline.
fn command_from_cmdline(raw: &[u8]) -> Option<String> {
    let argv0 = raw.split(|&b| b == 0).next()?;
    let argv0 = String::from_utf8_lossy(argv0);
    let name = argv0.rsplit('/').next()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Resident and shared bytes from `/proc/<pid>/status`. Shared is the
/// file-backed plus shmem part of the resident set, the same split `statm`
/// reports.
fn memory_from_status(contents: &str) -> Option<ProcessMemory> {
    let mut resident_kb = None;
    let mut file_kb = 0;
    let mut shmem_kb = 0;
    for line in contents.lines() {
        if let Some(val) = line.strip_prefix("VmRSS:") {
            resident_kb = parse_kb(val);
        } else if let Some(val) = line.strip_prefix("RssFile:") {
            file_kb = parse_kb(val).unwrap_or(0);
        } else if let Some(val) = line.strip_prefix("RssShmem:") {
            shmem_kb = parse_kb(val).unwrap_or(0);
        }
    }
    Some(ProcessMemory {
        resident: resident_kb? * 1024,
        shared: (file_kb + shmem_kb) * 1024,
    })
}

fn parse_kb(val: &str) -> Option<u64> {
    val.split_whitespace().next()?.parse().ok()
}
