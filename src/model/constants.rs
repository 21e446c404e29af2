//! Configuration constants and default values.
//!
//! This module contains the stopwatch timing constants, window chrome
//! defaults and validation limits, and the default hotkey.

use std::time::Duration;

// === Timing ===

/// Interval between live display refreshes while a lap is running.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Display shown before any time has been recorded.
pub const ZERO_DISPLAY: &str = "00:00:00";

// === Window Chrome Defaults ===

/// Default window transparency (alpha value).
pub const DEFAULT_TRANSPARENCY: f64 = 0.9;

/// The window starts at normal level.
pub const DEFAULT_ALWAYS_ON_TOP: bool = false;

// === Validation Limits ===

/// Minimum window transparency. Lower values make the clock unreadable.
pub const MIN_TRANSPARENCY: f64 = 0.2;

/// Maximum window transparency (fully opaque).
pub const MAX_TRANSPARENCY: f64 = 1.0;

// === Hotkey ===

/// Default global start/pause shortcut (Cmd+Shift+S).
pub const DEFAULT_HOTKEY: &str = "cmd+shift+s";

// === Menu Titles ===

/// Menu title while always-on-top is off.
pub const MENU_ENABLE_ALWAYS_ON_TOP: &str = "Enable Always on Top";

/// Menu title while always-on-top is on.
pub const MENU_DISABLE_ALWAYS_ON_TOP: &str = "Disable Always on Top";
