//! Plain-text rendering of the stopwatch projection.
//!
//! Pure string builders shared by the terminal loop and the macOS window,
//! so the layout is tested without a terminal or AppKit.

use crate::clock::Clock;
use crate::events::AppEvent;
use crate::model::WindowOptions;
use crate::ticker::Ticker;
use crate::timing::{LapView, TimingCore};

const HELP: &str = "\
Commands:
  <enter>, s     start / pause
  x              stop and clear all laps
  d              delete the last lap
  t              toggle always on top
  a <0.2-1.0>    set window transparency
  h              show this help
  q              quit
";

pub fn help_text() -> &'static str {
    HELP
}

/// Label for the Start/Pause control.
pub fn toggle_label(running: bool) -> &'static str {
    if running {
        "Pause"
    } else {
        "Start"
    }
}

/// Hint shown next to the delete control.
pub fn delete_hint(can_delete: bool) -> &'static str {
    if can_delete {
        "Delete the last lap"
    } else {
        "No laps to delete"
    }
}

/// One line: state, total time and lap count.
pub fn status_line<C: Clock, T: Ticker>(core: &TimingCore<C, T>) -> String {
    let state = if core.is_running() { "running" } else { "stopped" };
    let laps = core.laps().len();
    format!(
        "{}  [{}]  {} lap{}  ({}: s)",
        core.total_elapsed_display(),
        state,
        laps,
        if laps == 1 { "" } else { "s" },
        toggle_label(core.is_running()),
    )
}

/// Lap list with a header row.
pub fn lap_table(laps: &[LapView]) -> String {
    if laps.is_empty() {
        return "No laps recorded.\n".to_string();
    }
    let mut out = format!("{:<8}{:<12}{}\n", "Lap", "Start", "Duration");
    for lap in laps {
        out.push_str(&format!(
            "{:<8}{:<12}{}\n",
            format!("Lap {}", lap.number),
            lap.start_display,
            lap.duration_display
        ));
    }
    out
}

/// Window chrome summary.
pub fn chrome_line(options: &WindowOptions) -> String {
    format!(
        "Transparency: {:.2}  Always on top: {}  (t: {})",
        options.transparency,
        if options.always_on_top { "on" } else { "off" },
        options.always_on_top_menu_title(),
    )
}

/// How much of the terminal view a batch of events invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Redraw {
    /// Only chrome changed; option observers report it themselves
    Nothing,
    /// Only the live time moved
    Status,
    /// Laps or run state may have changed
    Full,
}

pub fn redraw_for(events: &[AppEvent]) -> Redraw {
    events
        .iter()
        .map(|event| match event {
            AppEvent::Tick => Redraw::Status,
            e if e.is_timing_command() => Redraw::Full,
            _ => Redraw::Nothing,
        })
        .max()
        .unwrap_or(Redraw::Nothing)
}

/// Everything the terminal shows after a command.
pub fn render<C: Clock, T: Ticker>(core: &TimingCore<C, T>) -> String {
    format!(
        "{}\n{}({})\n",
        status_line(core),
        lap_table(&core.lap_views()),
        delete_hint(core.can_delete_last_lap()),
    )
}
