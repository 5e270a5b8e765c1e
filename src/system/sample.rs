use serde::Serialize;

use super::counters::CountersProvider;
use crate::error::{MonitorError, Result};

/// One chart point: memory and swap utilization as rounded percentages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemorySample {
    pub mem_percent: u32,
    pub swap_percent: u32,
}

/// Read the provider's memory and swap totals and turn them into a sample.
///
/// Page cache counts as free memory. A machine without swap reports 0% swap
/// rather than failing the whole sample.
pub fn sample<P: CountersProvider + ?Sized>(provider: &mut P) -> Result<MemorySample> {
    let mem = provider.memory_totals()?;
    if mem.total == 0 {
        return Err(MonitorError::CounterUnavailable("memory"));
    }
    let mem_percent = percent(mem.used.saturating_sub(mem.cached), mem.total);

    let swap = provider.swap_totals()?;
    let swap_percent = if swap.total == 0 {
        0
    } else {
        percent(swap.used, swap.total)
    };

    Ok(MemorySample {
        mem_percent,
        swap_percent,
    })
}

fn percent(part: u64, total: u64) -> u32 {
    (part as f64 / total as f64 * 100.0).round() as u32
}
