//! Thread-safe event bus using mpsc channels.
//!
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The thread that owns the timing core receives them via `recv()` or
//!   `drain()`
//!
//! Publishing is how producers on other threads (ticker, stdin reader,
//! Carbon hotkey callback) marshal work onto the owning thread.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::types::AppEvent;

/// Multi-producer, single-consumer event queue.
///
/// # Example
///
/// ```
/// use lapwatch::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::ToggleStartStop);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds a sender itself, so this cannot disconnect
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the next event arrives.
    pub fn recv(&self) -> Option<AppEvent> {
        self.receiver.recv().ok()
    }

    /// Block for at most `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<AppEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the bus is gone the app is shutting down and the
    /// event is dropped.
    pub fn publish(&self, event: AppEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("event bus closed, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_multiple_events() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ToggleStartStop);
        publisher.publish(AppEvent::Tick);
        publisher.publish(AppEvent::RequestQuit);

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                AppEvent::ToggleStartStop,
                AppEvent::Tick,
                AppEvent::RequestQuit
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::Start);
        publisher.publish(AppEvent::Pause);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_another_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        std::thread::spawn(move || publisher.publish(AppEvent::ToggleStartStop))
            .join()
            .unwrap();

        assert_eq!(bus.recv(), Some(AppEvent::ToggleStartStop));
    }

    #[test]
    fn test_recv_timeout_when_empty() {
        let bus = EventBus::new();
        assert_eq!(bus.recv_timeout(Duration::from_millis(10)), None);
    }

    #[test]
    fn test_events_preserve_data() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::SetTransparency(0.35));
        publisher.publish(AppEvent::SetAlwaysOnTop(true));

        assert_eq!(bus.try_recv(), Some(AppEvent::SetTransparency(0.35)));
        assert_eq!(bus.try_recv(), Some(AppEvent::SetAlwaysOnTop(true)));
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(AppEvent::Tick);
    }
}
