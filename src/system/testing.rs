use std::collections::HashMap;

use super::counters::{CountersProvider, MemoryTotals, ProcessMemory, SwapTotals};
use crate::error::{MonitorError, Result};

#[derive(Default)]
pub struct FakeCounters {
    memory: MemoryTotals,
    swap: SwapTotals,
    pids: Vec<u32>,
    commands: HashMap<u32, String>,
    processes: HashMap<u32, ProcessMemory>,
    command_calls: HashMap<u32, usize>,
    memory_calls: HashMap<u32, usize>,
}

impl FakeCounters {
    pub fn with_memory(mut self, total: u64, used: u64, cached: u64) -> Self {
        self.memory = MemoryTotals {
            total,
            used,
            cached,
        };
        self
    }

    pub fn with_swap(mut self, total: u64, used: u64) -> Self {
        self.swap = SwapTotals { total, used };
        self
    }

    pub fn with_process(mut self, pid: u32, command: &str, resident: u64, shared: u64) -> Self {
        self.commands.insert(pid, command.to_string());
        self.with_unnamed_process(pid, resident, shared)
    }

    pub fn with_unnamed_process(mut self, pid: u32, resident: u64, shared: u64) -> Self {
        self.pids.push(pid);
        self.processes
            .insert(pid, ProcessMemory { resident, shared });
        self
    }

    pub fn set_memory(&mut self, pid: u32, resident: u64, shared: u64) {
        self.processes
            .insert(pid, ProcessMemory { resident, shared });
    }

    pub fn set_command(&mut self, pid: u32, command: &str) {
        self.commands.insert(pid, command.to_string());
    }

    pub fn remove_process(&mut self, pid: u32) {
        self.pids.retain(|&p| p != pid);
        self.processes.remove(&pid);
    }

    pub fn command_lookups(&self, pid: u32) -> usize {
        self.command_calls.get(&pid).copied().unwrap_or(0)
    }

    pub fn memory_lookups(&self, pid: u32) -> usize {
        self.memory_calls.get(&pid).copied().unwrap_or(0)
    }
}

impl CountersProvider for FakeCounters {
    fn memory_totals(&mut self) -> Result<MemoryTotals> {
        Ok(self.memory)
    }

    fn swap_totals(&mut self) -> Result<SwapTotals> {
        Ok(self.swap)
    }

    fn process_ids(&mut self) -> Vec<u32> {
        self.pids.clone()
    }

    fn process_command(&mut self, pid: u32) -> Result<String> {
        *self.command_calls.entry(pid).or_default() += 1;
        self.commands
            .get(&pid)
            .cloned()
            .ok_or(MonitorError::CommandUnresolved(pid))
    }

    fn process_memory(&mut self, pid: u32) -> Result<ProcessMemory> {
        *self.memory_calls.entry(pid).or_default() += 1;
        self.processes
            .get(&pid)
            .copied()
            .ok_or(MonitorError::ProcessVanished(pid))
    }
}
