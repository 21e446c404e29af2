//! Commands offered by the native app menu.
//!
//! Titles and tags live here so the mapping is tested without AppKit. The
//! macOS menu stores [`MenuCommand::tag`] on each item and turns the tag
//! back into an [`AppEvent`] when the item is chosen.

use crate::events::AppEvent;
use crate::model::WindowOptions;

use super::text::toggle_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    StartPause,
    ToggleAlwaysOnTop,
    Quit,
}

impl MenuCommand {
    /// In menu order.
    pub const ALL: [MenuCommand; 3] = [
        MenuCommand::StartPause,
        MenuCommand::ToggleAlwaysOnTop,
        MenuCommand::Quit,
    ];

    pub fn tag(self) -> isize {
        match self {
            MenuCommand::StartPause => 1,
            MenuCommand::ToggleAlwaysOnTop => 2,
            MenuCommand::Quit => 3,
        }
    }

    pub fn from_tag(tag: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.tag() == tag)
    }

    pub fn event(self) -> AppEvent {
        match self {
            MenuCommand::StartPause => AppEvent::ToggleStartStop,
            MenuCommand::ToggleAlwaysOnTop => AppEvent::ToggleAlwaysOnTop,
            MenuCommand::Quit => AppEvent::RequestQuit,
        }
    }

    /// Used with the Command modifier.
    pub fn key_equivalent(self) -> &'static str {
        match self {
            MenuCommand::StartPause => "s",
            MenuCommand::ToggleAlwaysOnTop => "t",
            MenuCommand::Quit => "q",
        }
    }

    pub fn title(self, running: bool, options: &WindowOptions) -> &'static str {
        match self {
            MenuCommand::StartPause => toggle_label(running),
            MenuCommand::ToggleAlwaysOnTop => options.always_on_top_menu_title(),
            MenuCommand::Quit => "Quit Lapwatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::{MENU_DISABLE_ALWAYS_ON_TOP, MENU_ENABLE_ALWAYS_ON_TOP};

    #[test]
    fn test_tags_round_trip() {
        for command in MenuCommand::ALL {
            assert_eq!(MenuCommand::from_tag(command.tag()), Some(command));
        }
        assert_eq!(MenuCommand::from_tag(0), None);
    }

    #[test]
    fn test_always_on_top_title_follows_options() {
        let off = WindowOptions::default();
        let on = WindowOptions::new(0.9, true);
        assert_eq!(
            MenuCommand::ToggleAlwaysOnTop.title(false, &off),
            MENU_ENABLE_ALWAYS_ON_TOP
        );
        assert_eq!(
            MenuCommand::ToggleAlwaysOnTop.title(false, &on),
            MENU_DISABLE_ALWAYS_ON_TOP
        );
    }

    #[test]
    fn test_start_pause_title_follows_run_state() {
        let options = WindowOptions::default();
        assert_eq!(MenuCommand::StartPause.title(false, &options), "Start");
        assert_eq!(MenuCommand::StartPause.title(true, &options), "Pause");
    }

    #[test]
    fn test_events() {
        assert_eq!(
            MenuCommand::ToggleAlwaysOnTop.event(),
            AppEvent::ToggleAlwaysOnTop
        );
        assert_eq!(MenuCommand::StartPause.event(), AppEvent::ToggleStartStop);
        assert_eq!(MenuCommand::Quit.event(), AppEvent::RequestQuit);
    }
}
