//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and applies them to
//! the timing core or the window options. It runs on the thread that owns
//! both, so neither needs any locking.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → Dispatcher::dispatch_all() → TimingCore / OptionsStore
//! ```

use crate::clock::Clock;
use crate::events::AppEvent;
use crate::model::OptionsStore;
use crate::ticker::Ticker;
use crate::timing::TimingCore;

/// What the main loop should do after dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the timing core and the shared window options.
pub struct Dispatcher<C: Clock, T: Ticker> {
    core: TimingCore<C, T>,
    options: OptionsStore,
}

impl<C: Clock, T: Ticker> Dispatcher<C, T> {
    pub fn new(core: TimingCore<C, T>, options: OptionsStore) -> Self {
        Self { core, options }
    }

    /// Apply a single event.
    pub fn dispatch(&mut self, event: &AppEvent) -> Flow {
        if !matches!(event, AppEvent::Tick) {
            tracing::debug!(?event, action = event.description(), "dispatching");
        }

        match event {
            AppEvent::ToggleStartStop => self.core.toggle_start_stop(),
            AppEvent::Start => {
                self.core.start();
            }
            AppEvent::Pause => {
                self.core.pause();
            }
            AppEvent::Stop => self.core.stop(),
            AppEvent::DeleteLastLap => {
                self.core.delete_last_lap();
            }
            AppEvent::Tick => self.core.refresh_display(),
            AppEvent::SetTransparency(value) => self.options.set_transparency(*value),
            AppEvent::SetAlwaysOnTop(on) => self.options.set_always_on_top(*on),
            AppEvent::ToggleAlwaysOnTop => self.options.toggle_always_on_top(),
            AppEvent::RequestQuit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Apply events in order, stopping at the first one that quits.
    pub fn dispatch_all<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = AppEvent>,
    {
        for event in events {
            if self.dispatch(&event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    pub fn core(&self) -> &TimingCore<C, T> {
        &self.core
    }

    pub fn options(&self) -> &OptionsStore {
        &self.options
    }

    /// Surfaces subscribe to option changes through this.
    pub fn options_mut(&mut self) -> &mut OptionsStore {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::ticker::ManualTicker;
    use std::time::Duration;

    fn dispatcher(clock: &ManualClock) -> Dispatcher<&ManualClock, ManualTicker> {
        Dispatcher::new(
            TimingCore::new(clock, ManualTicker::new()),
            OptionsStore::default(),
        )
    }

    #[test]
    fn test_toggle_routes_to_core() {
        let clock = ManualClock::new();
        let mut d = dispatcher(&clock);

        assert_eq!(d.dispatch(&AppEvent::ToggleStartStop), Flow::Continue);
        assert!(d.core().is_running());
        clock.advance(Duration::from_secs(3));
        d.dispatch(&AppEvent::ToggleStartStop);

        assert!(!d.core().is_running());
        assert_eq!(d.core().laps().len(), 1);
    }

    #[test]
    fn test_tick_refreshes_display() {
        let clock = ManualClock::new();
        let mut d = dispatcher(&clock);

        d.dispatch(&AppEvent::Start);
        clock.advance(Duration::from_secs(42));
        d.dispatch(&AppEvent::Tick);

        assert_eq!(d.core().total_elapsed_display(), "00:00:42");
    }

    #[test]
    fn test_window_events_route_to_options() {
        let clock = ManualClock::new();
        let mut d = dispatcher(&clock);

        d.dispatch(&AppEvent::SetTransparency(0.1));
        d.dispatch(&AppEvent::ToggleAlwaysOnTop);

        assert_eq!(d.options().get().transparency, 0.2);
        assert!(d.options().get().always_on_top);

        d.dispatch(&AppEvent::SetAlwaysOnTop(false));
        assert!(!d.options().get().always_on_top);
        assert!(!d.core().is_running());
    }

    #[test]
    fn test_dispatch_all_stops_at_quit() {
        let clock = ManualClock::new();
        let mut d = dispatcher(&clock);

        let flow = d.dispatch_all(vec![
            AppEvent::Start,
            AppEvent::RequestQuit,
            AppEvent::Stop,
        ]);

        assert_eq!(flow, Flow::Quit);
        // Stop came after quit and was not applied
        assert!(d.core().is_running());
    }
}
