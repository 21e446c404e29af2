//! Platform-specific implementations.
//!
//! macOS gets a native floating clock window and Carbon global hotkeys.
//! Every other platform runs the terminal presentation only.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
