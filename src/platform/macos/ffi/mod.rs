//! macOS FFI: Carbon hotkey declarations and objc2 helpers.

pub mod bridge;
pub mod carbon;

pub use carbon::*;
