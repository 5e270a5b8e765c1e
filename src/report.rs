use serde::Serialize;

use crate::monitor::Monitor;
use crate::system::counters::CountersProvider;
use crate::system::sample::MemorySample;
use crate::system::top::TopProcessSlot;

/// One-shot view of the monitor for `--once`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub sample: Option<MemorySample>,
    pub top_processes: Vec<TopProcessSlot>,
}

impl Report {
    /// Run one chart tick and one process tick, then capture the result.
    pub fn collect<P: CountersProvider>(monitor: &mut Monitor<P>) -> Self {
        let sample = monitor.refresh_chart().ok();
        let top_processes = monitor.refresh_processes().to_vec();
        Report {
            sample,
            top_processes,
        }
    }
}
