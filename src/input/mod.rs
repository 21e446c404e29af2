//! Input handling module.
//!
//! - commands.rs: typed terminal commands, confirmation prompts and the
//!   stdin reader thread
//!
//! Global hotkeys live behind [`crate::hotkeys::HotkeySource`]; the Carbon
//! implementation is in `platform::macos::input`.

pub mod commands;

pub use commands::{
    confirmation_prompt, is_affirmative, parse_command, run_command_reader, spawn_stdin_reader,
    Command, CommandError,
};
