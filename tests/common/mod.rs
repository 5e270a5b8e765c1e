#![allow(dead_code)]

use std::collections::HashMap;

use memwatch::error::{MonitorError, Result};
use memwatch::system::counters::{CountersProvider, MemoryTotals, ProcessMemory, SwapTotals};

pub const MB: u64 = 1024 * 1024;

/// Scripted counters: tests set up processes and totals, then inspect how
/// often each pid was queried.
#[derive(Default)]
pub struct ScriptedCounters {
    pub memory: Option<MemoryTotals>,
    pub swap: SwapTotals,
    pub live: Vec<u32>,
    pub commands: HashMap<u32, String>,
    pub memory_by_pid: HashMap<u32, ProcessMemory>,
    pub command_calls: HashMap<u32, usize>,
}

impl ScriptedCounters {
    pub fn add(&mut self, pid: u32, command: &str, usage_mb: u64) {
        self.live.push(pid);
        self.commands.insert(pid, command.to_string());
        self.memory_by_pid.insert(
            pid,
            ProcessMemory {
                resident: usage_mb * MB,
                shared: 0,
            },
        );
    }

    pub fn command_calls(&self, pid: u32) -> usize {
        self.command_calls.get(&pid).copied().unwrap_or(0)
    }
}

impl CountersProvider for ScriptedCounters {
    fn memory_totals(&mut self) -> Result<MemoryTotals> {
        self.memory
            .ok_or(MonitorError::CounterUnavailable("memory"))
    }

    fn swap_totals(&mut self) -> Result<SwapTotals> {
        Ok(self.swap)
    }

    fn process_ids(&mut self) -> Vec<u32> {
        self.live.clone()
    }

    fn process_command(&mut self, pid: u32) -> Result<String> {
        *self.command_calls.entry(pid).or_default() += 1;
        self.commands
            .get(&pid)
            .cloned()
            .ok_or(MonitorError::CommandUnresolved(pid))
    }

    fn process_memory(&mut self, pid: u32) -> Result<ProcessMemory> {
        self.memory_by_pid
            .get(&pid)
            .copied()
            .ok_or(MonitorError::ProcessVanished(pid))
    }
}
