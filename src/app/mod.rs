//! Shared functionality for the binary's event loops.
//!
//! Both the terminal loop and the macOS run loop drain the bus, dispatch
//! and print through these helpers.

pub mod helpers;

pub use helpers::{print_intro, process_batch, subscribe_hotkey};
