use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::store::Subscription;
use crate::ui::list::ListState;

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize,
    /// The store published a new state.
    StateChanged(Arc<ListState>),
}

/// Merges terminal input, ticks and store publications into one queue.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !thread_stop.load(Ordering::Relaxed) {
                // Short poll timeout so the stop flag is checked often.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let sent = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Input(key)),
                            Ok(Event::Resize(..)) => event_tx.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                break;
                            }
                        };
                        if sent.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    /// Wait up to `timeout` for an event, then take everything else already
    /// queued, with store states coalesced by [`coalesce_states`].
    pub fn next_batch(
        &self,
        timeout: Duration,
    ) -> Result<Vec<AppEvent>, mpsc::RecvTimeoutError> {
        let first = self.rx.recv_timeout(timeout)?;
        let batch = std::iter::once(first).chain(self.rx.try_iter()).collect();
        Ok(coalesce_states(batch))
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Drop every `StateChanged` but the last.
///
/// Each published state is a full snapshot, so only the newest matters for
/// drawing. Other events keep their order, and the surviving state keeps its
/// position relative to them.
pub fn coalesce_states(events: Vec<AppEvent>) -> Vec<AppEvent> {
    let last_state = events
        .iter()
        .rposition(|event| matches!(event, AppEvent::StateChanged(_)));
    events
        .into_iter()
        .enumerate()
        .filter(|(index, event)| {
            !matches!(event, AppEvent::StateChanged(_)) || Some(*index) == last_state
        })
        .map(|(_, event)| event)
        .collect()
}

/// Forward every store publication into the UI event queue until either
/// side goes away.
pub async fn forward_states(mut subscription: Subscription, tx: mpsc::Sender<AppEvent>) {
    while let Some(state) = subscription.recv().await {
        if tx.send(AppEvent::StateChanged(state)).is_err() {
            break;
        }
    }
}
