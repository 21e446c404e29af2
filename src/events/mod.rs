//! Event system for decoupled inter-module communication.
//!
//! Producers on any thread publish [`AppEvent`]s; the thread that owns the
//! timing core drains them and hands them to the dispatcher.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Hotkey    │     │   Ticker    │     │  Terminal   │
//! │  (Carbon)   │     │  (thread)   │     │   input     │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ recv() / drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          Dispatcher (TimingCore, OptionsStore)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
