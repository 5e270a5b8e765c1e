use super::counters::ProcessMemory;

/// Per-OS readers for counters `sysinfo` does not expose.
pub trait PlatformExtensions {
    fn process_command(pid: u32) -> Option<String>;
    fn process_memory(pid: u32) -> Option<ProcessMemory>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn process_command(pid: u32) -> Option<String> {
    platform_impl::Platform::process_command(pid)
}

pub fn process_memory(pid: u32) -> Option<ProcessMemory> {
    platform_impl::Platform::process_memory(pid)
}
