//! Periodic refresh scheduling.
//!
//! The timing core never owns a free-running timer. It asks a [`Ticker`] to
//! start or stop delivering refreshes, and the ticker delivers them as
//! [`AppEvent::Tick`] on the event bus so they reach the core on its owning
//! thread.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::events::{AppEvent, EventPublisher};

/// Starts and stops periodic display refreshes.
pub trait Ticker {
    /// Begin delivering a refresh every `interval`. Replaces any running
    /// schedule.
    fn schedule(&mut self, interval: Duration);

    /// Stop delivering refreshes. No-op when nothing is scheduled.
    fn cancel(&mut self);

    fn is_scheduled(&self) -> bool;
}

/// Ticker backed by a background thread that publishes `AppEvent::Tick`.
pub struct ThreadTicker {
    publisher: EventPublisher,
    active: Option<TickerThread>,
}

struct TickerThread {
    // Dropping the sender wakes the thread and ends it
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

impl ThreadTicker {
    pub fn new(publisher: EventPublisher) -> Self {
        Self {
            publisher,
            active: None,
        }
    }
}

impl Ticker for ThreadTicker {
    fn schedule(&mut self, interval: Duration) {
        self.cancel();

        let (stop, stop_rx) = mpsc::channel::<()>();
        let publisher = self.publisher.clone();
        let spawned = thread::Builder::new()
            .name("lapwatch-ticker".to_string())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => publisher.publish(AppEvent::Tick),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            });

        match spawned {
            Ok(handle) => {
                tracing::trace!(?interval, "ticker scheduled");
                self.active = Some(TickerThread { stop, handle });
            }
            Err(e) => tracing::error!(%e, "Failed to spawn the ticker thread"),
        }
    }

    fn cancel(&mut self) {
        if let Some(TickerThread { stop, handle }) = self.active.take() {
            drop(stop);
            if handle.join().is_err() {
                tracing::warn!("Ticker thread panicked");
            }
            tracing::trace!("ticker cancelled");
        }
    }

    fn is_scheduled(&self) -> bool {
        self.active.is_some()
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Ticker that only records what it was asked to do. Ticks are delivered
/// by calling `refresh_display` directly.
#[derive(Debug, Default)]
pub struct ManualTicker {
    interval: Option<Duration>,
    schedules: usize,
    cancels: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval of the current schedule, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn schedule_count(&self) -> usize {
        self.schedules
    }

    /// Number of cancels that actually stopped a schedule.
    pub fn cancel_count(&self) -> usize {
        self.cancels
    }
}

impl Ticker for ManualTicker {
    fn schedule(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.schedules += 1;
    }

    fn cancel(&mut self) {
        if self.interval.take().is_some() {
            self.cancels += 1;
        }
    }

    fn is_scheduled(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;

    #[test]
    fn test_thread_ticker_publishes_ticks() {
        let bus = EventBus::new();
        let mut ticker = ThreadTicker::new(bus.publisher());

        ticker.schedule(Duration::from_millis(5));
        assert!(ticker.is_scheduled());

        let event = bus.recv_timeout(Duration::from_secs(5));
        assert_eq!(event, Some(AppEvent::Tick));

        ticker.cancel();
        assert!(!ticker.is_scheduled());
    }

    #[test]
    fn test_thread_ticker_stops_after_cancel() {
        let bus = EventBus::new();
        let mut ticker = ThreadTicker::new(bus.publisher());

        ticker.schedule(Duration::from_millis(5));
        ticker.cancel();
        // cancel joins the thread, so nothing can arrive after this drain
        bus.drain();

        assert_eq!(bus.recv_timeout(Duration::from_millis(50)), None);
    }

    #[test]
    fn test_thread_ticker_reschedule_replaces_thread() {
        let bus = EventBus::new();
        let mut ticker = ThreadTicker::new(bus.publisher());

        ticker.schedule(Duration::from_secs(3600));
        ticker.schedule(Duration::from_millis(5));

        assert_eq!(
            bus.recv_timeout(Duration::from_secs(5)),
            Some(AppEvent::Tick)
        );
    }

    #[test]
    fn test_thread_ticker_cancel_without_schedule_is_noop() {
        let bus = EventBus::new();
        let mut ticker = ThreadTicker::new(bus.publisher());
        ticker.cancel();
        assert!(!ticker.is_scheduled());
    }

    #[test]
    fn test_manual_ticker_counts() {
        let mut ticker = ManualTicker::new();
        ticker.cancel();
        assert_eq!(ticker.cancel_count(), 0);

        ticker.schedule(Duration::from_secs(1));
        assert_eq!(ticker.interval(), Some(Duration::from_secs(1)));
        ticker.cancel();
        ticker.cancel();

        assert_eq!(ticker.schedule_count(), 1);
        assert_eq!(ticker.cancel_count(), 1);
        assert!(!ticker.is_scheduled());
    }
}
