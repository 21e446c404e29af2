//! Input handling module.
//!
//! - hotkeys.rs: Carbon global hotkey source

pub mod hotkeys;

pub use hotkeys::CarbonHotkeySource;
