//! Typed commands from a line-oriented input (the terminal).
//!
//! Each line becomes at most one [`AppEvent`]. Commands that discard laps
//! ask for confirmation first, the same way the window buttons do.

use std::io::{self, BufRead, Write};
use std::thread::{self, JoinHandle};

use thiserror::Error;

use crate::events::{AppEvent, EventPublisher};
use crate::ui::help_text;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(AppEvent),
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs a value")]
    MissingValue(String),
    #[error("`{0}` is not a transparency value")]
    InvalidTransparency(String),
}

/// Parse one input line. An empty line toggles start/pause.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Command::Event(AppEvent::ToggleStartStop));
    };
    let word = word.to_ascii_lowercase();

    let event = match word.as_str() {
        "s" | "toggle" => AppEvent::ToggleStartStop,
        "start" => AppEvent::Start,
        "p" | "pause" => AppEvent::Pause,
        "x" | "stop" => AppEvent::Stop,
        "d" | "delete" => AppEvent::DeleteLastLap,
        "t" | "top" => AppEvent::ToggleAlwaysOnTop,
        "q" | "quit" => AppEvent::RequestQuit,
        "h" | "?" | "help" => return Ok(Command::Help),
        "a" | "alpha" => {
            let value = words
                .next()
                .ok_or_else(|| CommandError::MissingValue(word.clone()))?;
            let transparency = value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CommandError::InvalidTransparency(value.to_string()))?;
            AppEvent::SetTransparency(transparency)
        }
        _ => return Err(CommandError::Unknown(word)),
    };
    Ok(Command::Event(event))
}

/// The question asked before a destructive event, if any.
pub fn confirmation_prompt(event: &AppEvent) -> Option<&'static str> {
    if !event.requires_confirmation() {
        return None;
    }
    match event {
        AppEvent::Stop => Some("Stop the timer and clear all laps? [y/N] "),
        _ => Some("Delete the last lap? [y/N] "),
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Read commands until quit or end of input, publishing each event.
///
/// End of input publishes `RequestQuit` so the main loop can exit.
pub fn run_command_reader<R, W>(input: R, mut output: W, publisher: &EventPublisher) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        let Some(line) = lines.next() else {
            break;
        };
        let event = match parse_command(&line?) {
            Ok(Command::Event(event)) => event,
            Ok(Command::Help) => {
                write!(output, "{}", help_text())?;
                output.flush()?;
                continue;
            }
            Err(e) => {
                tracing::debug!(%e, "rejected command");
                writeln!(output, "{}. Type `h` for help.", e)?;
                output.flush()?;
                continue;
            }
        };

        if let Some(prompt) = confirmation_prompt(&event) {
            write!(output, "{}", prompt)?;
            output.flush()?;
            let Some(answer) = lines.next() else {
                break;
            };
            if !is_affirmative(&answer?) {
                writeln!(output, "Cancelled.")?;
                output.flush()?;
                continue;
            }
        }

        let quit = event == AppEvent::RequestQuit;
        publisher.publish(event);
        if quit {
            return Ok(());
        }
    }

    publisher.publish(AppEvent::RequestQuit);
    Ok(())
}

/// Run the command reader on stdin in a background thread.
pub fn spawn_stdin_reader(publisher: EventPublisher) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("lapwatch-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            if let Err(e) = run_command_reader(stdin.lock(), io::stdout(), &publisher) {
                tracing::error!(%e, "Failed to read commands");
                publisher.publish(AppEvent::RequestQuit);
            }
        })
}
