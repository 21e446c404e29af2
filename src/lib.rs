#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Stopwatch core and the pure helpers around it. Everything outside
//! `platform` is free of OS FFI so tests run as normal integration tests.

pub mod clock;
pub mod events;
pub mod handlers;
pub mod hotkeys;
pub mod input;
pub mod model;
pub mod platform;
pub mod ticker;
pub mod timing;
pub mod ui;

// Re-export the types every surface touches
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use handlers::{Dispatcher, Flow};
pub use hotkeys::{
    HotkeyError, HotkeySource, HotkeySubscription, KeyCombo, ManualHotkeySource, Modifiers,
    UnsupportedHotkeySource,
};
pub use model::{OptionsStore, WindowOptions};
pub use ticker::{ManualTicker, ThreadTicker, Ticker};
pub use timing::{format_hms, Lap, LapView, RunState, TimingCore, TimingSession};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
