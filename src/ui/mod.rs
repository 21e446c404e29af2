//! User interface module.
//!
//! - text.rs: status line, lap table, chrome summary and help text
//! - menu.rs: commands of the native app menu
//!
//! The native floating window is in `platform::macos::ui`.

pub mod menu;
pub mod text;

pub use menu::MenuCommand;
pub use text::{
    chrome_line, delete_hint, help_text, lap_table, redraw_for, render, status_line, toggle_label,
    Redraw,
};
