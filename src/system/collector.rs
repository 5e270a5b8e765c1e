use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use super::counters::{CountersProvider, MemoryTotals, ProcessMemory, SwapTotals};
use super::platform;
use crate::error::{MonitorError, Result};

/// `sysinfo`-backed counters, with platform readers filling in what
/// `sysinfo` lacks (argv[0] names, shared resident pages).
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Collector { sys }
    }

    fn refresh_processes(&mut self) {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
    }
}

impl CountersProvider for Collector {
    fn memory_totals(&mut self) -> Result<MemoryTotals> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(MonitorError::CounterUnavailable("memory"));
        }
        let free = self.sys.free_memory();
        let available = self.sys.available_memory();
        Ok(MemoryTotals {
            total,
            used: total.saturating_sub(free),
            cached: available.saturating_sub(free),
        })
    }

    fn swap_totals(&mut self) -> Result<SwapTotals> {
        // refresh_memory in memory_totals already covers swap.
        Ok(SwapTotals {
            total: self.sys.total_swap(),
            used: self.sys.used_swap(),
        })
    }

    fn process_ids(&mut self) -> Vec<u32> {
        let _span = tracing::trace_span!("collector.process_ids").entered();

        self.refresh_processes();
        // Threads share their leader's memory; counting them would repeat it.
        let mut pids: Vec<u32> = self
            .sys
            .processes()
            .iter()
            .filter(|(_, process)| process.thread_kind().is_none())
            .map(|(pid, _)| pid.as_u32())
            .collect();
        pids.sort_unstable();
        pids
    }

    fn process_command(&mut self, pid: u32) -> Result<String> {
        if let Some(command) = platform::process_command(pid) {
            return Ok(command);
        }
        self.sys
            .process(Pid::from_u32(pid))
            .map(|p| p.name().to_string_lossy().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(MonitorError::CommandUnresolved(pid))
    }

    fn process_memory(&mut self, pid: u32) -> Result<ProcessMemory> {
        if let Some(mem) = platform::process_memory(pid) {
            return Ok(mem);
        }
        self.sys
            .process(Pid::from_u32(pid))
            .map(|p| ProcessMemory {
                resident: p.memory(),
                shared: 0,
            })
            .ok_or(MonitorError::ProcessVanished(pid))
    }
}
