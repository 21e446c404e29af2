//! Stopwatch timing: laps, accumulation and display formatting.
//!
//! - [`state`]: the Stopped/Running state machine ([`TimingCore`])
//! - [`lap`]: recorded laps and their display projection
//! - [`format`]: `HH:MM:SS` rendering

pub mod state;
pub mod format;
pub mod lap;

pub use state::{RunState, TimingCore, TimingSession};
pub use format::{format_hms, format_time_of_day};
pub use lap::{Lap, LapView};
