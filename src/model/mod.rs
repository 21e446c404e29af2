//! Application domain model.
//!
//! This module contains pure state (no FFI dependencies): the window
//! options shared by every presentation surface and the configuration
//! constants.

pub mod constants;
pub mod window_options;

pub use constants::*;
pub use window_options::{OptionsStore, SubscriptionId, WindowOptions};
