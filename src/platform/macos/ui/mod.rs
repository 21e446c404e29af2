//! macOS UI components.
//!
//! - clock_window.rs: the floating window showing the total time
//! - app_menu.rs: menu bar with Start/Pause, always-on-top and Quit

pub mod app_menu;
pub mod clock_window;

pub use app_menu::AppMenu;
pub use clock_window::ClockWindow;
