use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryTotals {
    pub total: u64,
    pub used: u64,
    pub cached: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapTotals {
    pub total: u64,
    pub used: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessMemory {
    pub resident: u64,
    pub shared: u64,
}

/// Source of raw memory counters. All values are bytes.
///
/// Methods take `&mut self` because real providers refresh cached OS state
/// on every read.
pub trait CountersProvider {
    fn memory_totals(&mut self) -> Result<MemoryTotals>;

    fn swap_totals(&mut self) -> Result<SwapTotals>;

    /// Live process ids in enumeration order.
    fn process_ids(&mut self) -> Vec<u32>;

    /// Fails with `CommandUnresolved` when no name can be found.
    fn process_command(&mut self, pid: u32) -> Result<String>;

    /// Fails with `ProcessVanished` when the process is gone.
    fn process_memory(&mut self, pid: u32) -> Result<ProcessMemory>;
}
