#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

mod app;
mod cli;
#[cfg(target_os = "macos")]
mod macos_main;
#[cfg(not(target_os = "macos"))]
mod terminal_main;

use crate::cli::Arguments;
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let arguments = Arguments::parse();
    if let Err(e) = set_log_level(&arguments) {
        eprintln!("Failed to configure logging: {e}");
    }

    tracing::debug!(?arguments, "starting lapwatch");

    match run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "Unable to run the stopwatch");
            ExitCode::FAILURE
        }
    }
}

fn set_log_level(arguments: &Arguments) -> anyhow::Result<()> {
    let level = match arguments.verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(target_os = "macos")]
fn run(arguments: &Arguments) -> anyhow::Result<()> {
    macos_main::run(arguments)
}

#[cfg(not(target_os = "macos"))]
fn run(arguments: &Arguments) -> anyhow::Result<()> {
    terminal_main::run(arguments)
}
