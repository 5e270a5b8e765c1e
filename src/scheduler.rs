use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Sends `event` into `tx` every `period` until cancelled.
///
/// The first tick fires immediately. Ticks missed while the receiver was busy
/// are skipped, never burst, so a slow handler cannot pile up work. Dropping
/// the timer cancels it.
pub struct RepeatingTimer {
    task: Option<JoinHandle<()>>,
}

impl RepeatingTimer {
    pub fn start<E>(period: Duration, tx: UnboundedSender<E>, event: E) -> Self
    where
        E: Clone + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(event.clone()).is_err() {
                    break;
                }
            }
        });
        Self { task: Some(task) }
    }

    /// Stop the timer. Safe to call any number of times.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn fires_repeatedly() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = RepeatingTimer::start(Duration::from_secs(2), tx, 7u8);
        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(7));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent_and_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = RepeatingTimer::start(Duration::from_secs(1), tx, ());
        assert_eq!(rx.recv().await, Some(()));

        timer.cancel();
        timer.cancel();
        assert!(!timer.is_active());

        let next = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(!matches!(next, Ok(Some(()))));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = RepeatingTimer::start(Duration::from_secs(1), tx, ());
        assert_eq!(rx.recv().await, Some(()));
        drop(timer);

        let next = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(!matches!(next, Ok(Some(()))));
    }
}
