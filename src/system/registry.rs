use std::collections::HashMap;

use super::counters::CountersProvider;
use super::process::ProcessMemoryInfo;

/// Per-process memory state keyed by pid, in the enumeration order of the
/// last reconciliation.
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    entries: Vec<ProcessMemoryInfo>,
    index: HashMap<u32, usize>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry directly from already-populated entries. Later
    /// duplicates of a pid are ignored.
    pub fn from_entries(entries: impl IntoIterator<Item = ProcessMemoryInfo>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.insert(entry);
        }
        registry
    }

    /// Rebuild the registry against the current live pid set.
    ///
    /// Entries of pids that are gone are dropped. A command is looked up for
    /// every entry that does not have one yet, so a lookup that fails while a
    /// process is starting is retried next tick; once resolved it is never
    /// looked up again. Memory is refreshed for every entry with a command,
    /// and an entry whose memory read fails is left out of this tick. The new
    /// mapping replaces the old one in a single assignment.
    pub fn reconcile<P: CountersProvider + ?Sized>(&mut self, live_pids: &[u32], provider: &mut P) {
        let mut previous: HashMap<u32, ProcessMemoryInfo> = std::mem::take(&mut self.entries)
            .into_iter()
            .map(|p| (p.pid, p))
            .collect();
        let mut updated = Self {
            entries: Vec::with_capacity(live_pids.len()),
            index: HashMap::with_capacity(live_pids.len()),
        };

        for &pid in live_pids {
            if updated.index.contains_key(&pid) {
                continue;
            }

            let mut info = previous
                .remove(&pid)
                .unwrap_or_else(|| ProcessMemoryInfo::new(pid));

            if !info.has_command() {
                match provider.process_command(pid) {
                    Ok(command) => info.command = command,
                    Err(err) => tracing::trace!(pid, %err, "command not resolved"),
                }
            }

            if info.has_command() {
                match provider.process_memory(pid) {
                    Ok(mem) => {
                        info.resident = mem.resident;
                        info.shared = mem.shared;
                    }
                    Err(err) => {
                        tracing::trace!(pid, %err, "dropping process for this tick");
                        continue;
                    }
                }
            }

            updated.insert(info);
        }

        *self = updated;
    }

    fn insert(&mut self, info: ProcessMemoryInfo) {
        if self.index.contains_key(&info.pid) {
            return;
        }
        self.index.insert(info.pid, self.entries.len());
        self.entries.push(info);
    }

    pub fn get(&self, pid: u32) -> Option<&ProcessMemoryInfo> {
        self.index.get(&pid).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, pid: u32) -> bool {
        self.index.contains_key(&pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessMemoryInfo> {
        self.entries.iter()
    }

    pub fn pids(&self) -> Vec<u32> {
        self.entries.iter().map(|p| p.pid).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
