//! The stopwatch state machine.

use std::time::Duration;

use super::format::format_hms;
use super::lap::{Lap, LapView};
use crate::clock::{Clock, Timestamp};
use crate::model::constants::{TICK_INTERVAL, ZERO_DISPLAY};
use crate::ticker::Ticker;

/// Whether a lap is in progress. The lap start exists only while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running { lap_start: Timestamp },
}

/// Accumulated time and lap history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingSession {
    total_elapsed: Duration,
    laps: Vec<Lap>,
    run_state: RunState,
}

impl Default for TimingSession {
    fn default() -> Self {
        Self {
            total_elapsed: Duration::ZERO,
            laps: Vec::new(),
            run_state: RunState::Stopped,
        }
    }
}

impl TimingSession {
    /// Sum of all closed laps. The running lap is not included.
    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.run_state, RunState::Running { .. })
    }
}

/// Owns the timing session and drives the refresh ticker.
///
/// All commands tolerate violated preconditions: pausing while stopped,
/// starting while running and deleting from an empty lap list do nothing.
/// Not thread-safe; callers marshal every command onto one thread.
pub struct TimingCore<C: Clock, T: Ticker> {
    clock: C,
    ticker: T,
    session: TimingSession,
    display: String,
}

impl<C: Clock, T: Ticker> TimingCore<C, T> {
    pub fn new(clock: C, ticker: T) -> Self {
        Self {
            clock,
            ticker,
            session: TimingSession::default(),
            display: ZERO_DISPLAY.to_string(),
        }
    }

    /// Begin a new lap. Returns false if a lap was already running.
    pub fn start(&mut self) -> bool {
        if self.session.is_running() {
            tracing::trace!("start ignored, already running");
            return false;
        }
        let lap_start = self.clock.now();
        self.session.run_state = RunState::Running { lap_start };
        self.ticker.schedule(TICK_INTERVAL);
        tracing::debug!(lap = self.session.laps.len() + 1, "lap started");
        true
    }

    /// Close the running lap and record it. Returns the new lap, or `None`
    /// if nothing was running.
    pub fn pause(&mut self) -> Option<&Lap> {
        let RunState::Running { lap_start } = self.session.run_state else {
            tracing::trace!("pause ignored, not running");
            return None;
        };
        self.ticker.cancel();

        let duration = self.clock.now().duration_since(&lap_start);
        let lap = Lap::new(self.session.laps.len() + 1, lap_start, duration);
        self.session.total_elapsed += duration;
        self.session.run_state = RunState::Stopped;
        self.display = format_hms(self.session.total_elapsed);

        tracing::debug!(
            lap = lap.number(),
            ?duration,
            total = ?self.session.total_elapsed,
            "lap recorded"
        );
        self.session.laps.push(lap);
        self.session.laps.last()
    }

    /// Single entry point for the start/pause hotkey.
    pub fn toggle_start_stop(&mut self) {
        if self.session.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Remove the most recent lap and take its time off the total.
    pub fn delete_last_lap(&mut self) -> Option<Lap> {
        let Some(lap) = self.session.laps.pop() else {
            tracing::trace!("delete ignored, no laps");
            return None;
        };
        self.session.total_elapsed = self.session.total_elapsed.saturating_sub(lap.duration());
        self.display = format_hms(self.live_elapsed());
        tracing::debug!(lap = lap.number(), total = ?self.session.total_elapsed, "lap deleted");
        Some(lap)
    }

    /// Full reset: clears laps and total, and stops any running lap.
    pub fn stop(&mut self) {
        self.ticker.cancel();
        self.session = TimingSession::default();
        self.display = ZERO_DISPLAY.to_string();
        tracing::debug!("stopwatch reset");
    }

    /// Recompute the live display. Only meaningful while running.
    pub fn refresh_display(&mut self) {
        if !self.session.is_running() {
            tracing::trace!("refresh ignored, not running");
            return;
        }
        self.display = format_hms(self.live_elapsed());
    }

    /// Closed laps plus the running lap's time so far.
    pub fn live_elapsed(&self) -> Duration {
        match self.session.run_state {
            RunState::Running { lap_start } => {
                self.session.total_elapsed + self.clock.now().duration_since(&lap_start)
            }
            RunState::Stopped => self.session.total_elapsed,
        }
    }

    /// Formatted total as of the last command or refresh.
    pub fn total_elapsed_display(&self) -> &str {
        &self.display
    }

    pub fn total_elapsed(&self) -> Duration {
        self.session.total_elapsed
    }

    pub fn laps(&self) -> &[Lap] {
        self.session.laps()
    }

    pub fn lap_views(&self) -> Vec<LapView> {
        self.session.laps.iter().map(Lap::view).collect()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn can_delete_last_lap(&self) -> bool {
        !self.session.laps.is_empty()
    }

    pub fn session(&self) -> &TimingSession {
        &self.session
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
