use std::io::{self, Write};

use lapwatch::ui::{chrome_line, help_text, redraw_for, render, status_line, Redraw};
use lapwatch::{
    AppEvent, Clock, Dispatcher, EventPublisher, Flow, HotkeySource, HotkeySubscription, KeyCombo,
    Ticker,
};

/// Register the global Start/Pause hotkey. Failure is not fatal: the
/// stopwatch still works from the terminal.
pub fn subscribe_hotkey<S: HotkeySource>(
    source: &mut S,
    combo: Option<KeyCombo>,
    publisher: EventPublisher,
) -> Option<HotkeySubscription> {
    let combo = combo?;
    match source.subscribe(combo, publisher) {
        Ok(subscription) => {
            tracing::info!(%combo, "Registered global hotkey");
            Some(subscription)
        }
        Err(e) => {
            tracing::warn!(%combo, %e, "Global hotkey unavailable");
            None
        }
    }
}

/// Help, chrome and the initial view.
pub fn print_intro<C, T, W>(
    out: &mut W,
    dispatcher: &Dispatcher<C, T>,
    hotkey: Option<&HotkeySubscription>,
) -> io::Result<()>
where
    C: Clock,
    T: Ticker,
    W: Write,
{
    write!(out, "{}", help_text())?;
    if let Some(subscription) = hotkey {
        writeln!(out, "Global hotkey {} starts and pauses.", subscription.combo())?;
    }
    writeln!(out, "{}", chrome_line(dispatcher.options().get()))?;
    write!(out, "{}", render(dispatcher.core()))?;
    out.flush()
}

/// Dispatch one drained batch and print whatever it invalidated.
pub fn process_batch<C, T, W>(
    dispatcher: &mut Dispatcher<C, T>,
    events: Vec<AppEvent>,
    out: &mut W,
) -> io::Result<Flow>
where
    C: Clock,
    T: Ticker,
    W: Write,
{
    let redraw = redraw_for(&events);
    if dispatcher.dispatch_all(events) == Flow::Quit {
        return Ok(Flow::Quit);
    }

    match redraw {
        Redraw::Nothing => {}
        Redraw::Status => writeln!(out, "{}", status_line(dispatcher.core()))?,
        Redraw::Full => write!(out, "{}", render(dispatcher.core()))?,
    }
    out.flush()?;
    Ok(Flow::Continue)
}
