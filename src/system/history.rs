use std::collections::VecDeque;

use super::sample::MemorySample;

pub const DEFAULT_CAPACITY: usize = 60;

// Storage beyond this grows on demand as samples arrive.
const PREALLOCATED_SAMPLES: usize = 1024;

/// Rolling window of memory samples for the history chart, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: VecDeque<MemorySample>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity.min(PREALLOCATED_SAMPLES)),
            capacity,
        }
    }

    pub fn record(&mut self, sample: MemorySample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn snapshot(&self) -> Vec<MemorySample> {
        self.samples.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemorySample> {
        self.samples.iter()
    }

    /// Memory percentages oldest first, in the shape chart widgets expect.
    pub fn mem_series(&self) -> Vec<u64> {
        self.samples.iter().map(|s| u64::from(s.mem_percent)).collect()
    }

    pub fn latest(&self) -> Option<MemorySample> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
