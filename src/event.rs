use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::scheduler::RepeatingTimer;

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    ChartTick,
    ProcessTick,
}

/// Merges terminal input and the two sampling timers into one stream that
/// the main loop drains one event at a time.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    chart_timer: RepeatingTimer,
    process_timer: RepeatingTimer,
    input_task: Option<tokio::task::JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(chart_interval: Duration, process_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();

        let chart_timer = RepeatingTimer::start(chart_interval, tx.clone(), Event::ChartTick);
        let process_timer =
            RepeatingTimer::start(process_interval, tx.clone(), Event::ProcessTick);

        let input_task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            while let Some(Ok(evt)) = reader.next().await {
                let mapped = match evt {
                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                    _ => None,
                };
                if let Some(e) = mapped
                    && tx.send(e).is_err()
                {
                    break;
                }
            }
        });

        Self {
            rx,
            chart_timer,
            process_timer,
            input_task: Some(input_task),
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Stop both timers and the input reader. Idempotent.
    pub fn shutdown(&mut self) {
        self.chart_timer.cancel();
        self.process_timer.cancel();
        if let Some(task) = self.input_task.take() {
            task.abort();
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
