//! Application events for inter-module communication.
//!
//! These events represent the commands any producer (hotkey, ticker,
//! terminal input, window) can send to the stopwatch. They are handled by
//! the dispatcher on the thread that owns the timing core.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers through the EventBus to the dispatcher,
/// which applies them to the timing core or the window options.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // === Timing Commands ===
    /// Start if stopped, pause if running (global hotkey, Start/Pause button)
    ToggleStartStop,

    /// Begin a new lap
    Start,

    /// Close the running lap
    Pause,

    /// Clear every lap and reset the total
    Stop,

    /// Remove the most recent lap
    DeleteLastLap,

    /// Periodic refresh of the live display while running
    Tick,

    // === Window Chrome ===
    /// Set the window alpha (clamped to the valid range)
    SetTransparency(f64),

    /// Set the always-on-top flag
    SetAlwaysOnTop(bool),

    /// Flip the always-on-top flag (menu command)
    ToggleAlwaysOnTop,

    // === Lifecycle ===
    /// Leave the application
    RequestQuit,
}

impl AppEvent {
    /// Returns true if this event is routed to the timing core.
    pub fn is_timing_command(&self) -> bool {
        matches!(
            self,
            AppEvent::ToggleStartStop
                | AppEvent::Start
                | AppEvent::Pause
                | AppEvent::Stop
                | AppEvent::DeleteLastLap
                | AppEvent::Tick
        )
    }

    /// Returns true if the user should confirm before this event is sent.
    ///
    /// Both discard recorded laps.
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, AppEvent::Stop | AppEvent::DeleteLastLap)
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleStartStop => "Start or pause",
            AppEvent::Start => "Start a lap",
            AppEvent::Pause => "Pause and record the lap",
            AppEvent::Stop => "Stop and clear all laps",
            AppEvent::DeleteLastLap => "Delete the last lap",
            AppEvent::Tick => "Refresh the display",
            AppEvent::SetTransparency(_) => "Set window transparency",
            AppEvent::SetAlwaysOnTop(_) => "Set always on top",
            AppEvent::ToggleAlwaysOnTop => "Toggle always on top",
            AppEvent::RequestQuit => "Quit",
        }
    }
}
