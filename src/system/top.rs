use std::cmp::Reverse;

use serde::Serialize;

use super::process::ProcessMemoryInfo;
use super::registry::ProcessRegistry;

pub const DEFAULT_TOP_PROCESSES: usize = 6;

/// One row of the top-processes list. Blank rows pad the list to its
/// fixed length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TopProcessSlot {
    pub pid: Option<u32>,
    pub command: String,
    pub usage: String,
}

impl TopProcessSlot {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.pid.is_none()
    }

    fn from_info(info: &ProcessMemoryInfo) -> Self {
        Self {
            pid: Some(info.pid),
            command: info.command.clone(),
            usage: info.usage_label(),
        }
    }
}

/// Rank processes by private memory, largest first, returning exactly `n`
/// slots.
///
/// Only processes with a resolved command and a positive displayed usage
/// qualify. Equal usage keeps registry order.
pub fn top_n(registry: &ProcessRegistry, n: usize) -> Vec<TopProcessSlot> {
    let mut ranked: Vec<&ProcessMemoryInfo> = registry
        .iter()
        .filter(|p| p.has_command() && p.usage_tenths() > 0)
        .collect();
    ranked.sort_by_key(|p| Reverse(p.usage_tenths()));

    let mut slots: Vec<TopProcessSlot> = ranked
        .into_iter()
        .take(n)
        .map(TopProcessSlot::from_info)
        .collect();
    slots.resize_with(n, TopProcessSlot::blank);
    slots
}
