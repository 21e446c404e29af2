//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! - FFI bindings to Carbon and small objc2 helpers
//! - Input handling (Carbon global hotkeys)
//! - UI (floating clock window)

pub mod ffi;
pub mod input;
pub mod ui;

pub use ffi::bridge;
pub use input::CarbonHotkeySource;
pub use ui::{AppMenu, ClockWindow};
