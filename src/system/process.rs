use crate::format::format_usage;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessMemoryInfo {
    pub pid: u32,
    pub command: String,
    pub resident: u64,
    pub shared: u64,
}

impl ProcessMemoryInfo {
    pub fn new(pid: u32) -> Self {
        Self {
            pid,
            command: String::new(),
            resident: 0,
            shared: 0,
        }
    }

    /// Private memory in megabytes. Negative while shared briefly exceeds
    /// resident.
    pub fn usage_mb(&self) -> f64 {
        (self.resident as f64 - self.shared as f64) / BYTES_PER_MB
    }

    /// Usage at display precision (tenths of a megabyte). Ranking works on
    /// this value so ties match what the user sees.
    pub fn usage_tenths(&self) -> i64 {
        (self.usage_mb() * 10.0).round() as i64
    }

    pub fn usage_label(&self) -> String {
        format_usage(self.usage_tenths())
    }

    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }
}
