//! Terminal entry point for platforms without the floating window.

use std::io;

use lapwatch::input::spawn_stdin_reader;
use lapwatch::ui::chrome_line;
use lapwatch::{
    Dispatcher, EventBus, Flow, OptionsStore, SystemClock, ThreadTicker, TimingCore,
    UnsupportedHotkeySource,
};

use crate::app::{print_intro, process_batch, subscribe_hotkey};
use crate::cli::Arguments;

pub fn run(arguments: &Arguments) -> anyhow::Result<()> {
    let bus = EventBus::new();
    let core = TimingCore::new(SystemClock, ThreadTicker::new(bus.publisher()));
    let mut dispatcher = Dispatcher::new(core, OptionsStore::new(arguments.window_options()));
    dispatcher
        .options_mut()
        .subscribe(|options| println!("{}", chrome_line(options)));

    let hotkey = subscribe_hotkey(
        &mut UnsupportedHotkeySource,
        arguments.hotkey(),
        bus.publisher(),
    );

    let mut stdout = io::stdout();
    print_intro(&mut stdout, &dispatcher, hotkey.as_ref())?;
    spawn_stdin_reader(bus.publisher())?;

    while let Some(first) = bus.recv() {
        let mut events = vec![first];
        events.extend(bus.drain());
        if process_batch(&mut dispatcher, events, &mut stdout)? == Flow::Quit {
            tracing::info!("Quitting");
            break;
        }
    }
    Ok(())
}
