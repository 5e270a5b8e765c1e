/// Conditions raised while reading counters. None of them are fatal: each
/// one is absorbed by the tick that hit it and re-evaluated on the next.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonitorError {
    #[error("{0} counters unavailable")]
    CounterUnavailable(&'static str),

    #[error("process {0} vanished before its memory could be read")]
    ProcessVanished(u32),

    #[error("command name for process {0} could not be resolved")]
    CommandUnresolved(u32),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
