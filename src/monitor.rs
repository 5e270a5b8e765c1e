use crate::error::Result;
use crate::system::counters::CountersProvider;
use crate::system::history::HistoryBuffer;
use crate::system::registry::ProcessRegistry;
use crate::system::sample::{MemorySample, sample};
use crate::system::top::{TopProcessSlot, top_n};

/// Owns every piece of sampled state and the provider that feeds it. The
/// event loop calls the two `refresh_*` ticks; renderers only read.
pub struct Monitor<P> {
    provider: P,
    history: HistoryBuffer,
    registry: ProcessRegistry,
    top: Vec<TopProcessSlot>,
    top_count: usize,
}

impl<P: CountersProvider> Monitor<P> {
    pub fn new(provider: P, history_size: usize, top_count: usize) -> Self {
        Self {
            provider,
            history: HistoryBuffer::new(history_size),
            registry: ProcessRegistry::new(),
            top: vec![TopProcessSlot::blank(); top_count],
            top_count,
        }
    }

    /// Chart tick: sample memory and append to history. On failure the
    /// history is left exactly as it was.
    pub fn refresh_chart(&mut self) -> Result<MemorySample> {
        let _span = tracing::debug_span!("monitor.refresh_chart").entered();

        match sample(&mut self.provider) {
            Ok(s) => {
                self.history.record(s);
                Ok(s)
            }
            Err(err) => {
                tracing::debug!(%err, "skipping chart tick");
                Err(err)
            }
        }
    }

    /// Process tick: reconcile the registry against live pids and re-rank.
    pub fn refresh_processes(&mut self) -> &[TopProcessSlot] {
        let _span = tracing::debug_span!("monitor.refresh_processes").entered();

        let live = self.provider.process_ids();
        self.registry.reconcile(&live, &mut self.provider);
        self.top = top_n(&self.registry, self.top_count);
        tracing::trace!(
            live = live.len(),
            tracked = self.registry.len(),
            "processes reconciled"
        );
        &self.top
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}

impl<P> Monitor<P> {
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn latest(&self) -> Option<MemorySample> {
        self.history.latest()
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    pub fn top_processes(&self) -> &[TopProcessSlot] {
        &self.top
    }

    pub fn top_count(&self) -> usize {
        self.top_count
    }
}
